//! Ready-made commands for common tools.
//!
//! Every function returns a plain [`Command`](crate::Command). Values that
//! come from the caller (paths, messages, branch names, URLs) are always
//! [`Quoted`](crate::Argument::Quoted); only fixed flags and shell fragments
//! written here are [`Verbatim`](crate::Argument::Verbatim).
//!
//! ```no_run
//! use shellout::{RunOptions, Runner, catalog::git};
//!
//! let runner = Runner::default();
//! runner.run(&git::init(), RunOptions::at("~/new-project"))?;
//! runner.run(&git::commit("Initial commit", false), RunOptions::at("~/new-project"))?;
//! # Ok::<(), shellout::Error>(())
//! ```

pub mod fs;
pub mod git;
pub mod homebrew;
pub mod swift;
