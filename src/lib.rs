//! shellout: run external commands from Rust.
//!
//! - Build commands from a trusted program name ([`SafeString`]) and
//!   arguments that are either inserted verbatim or shell-quoted
//!   ([`Argument`]), so user-controlled values can never change the
//!   structure of a command line.
//! - Run them with a [`Runner`], which drains stdout and stderr concurrently
//!   (no pipe-buffer deadlocks), optionally tees them into sinks, and returns
//!   either the captured output or a [`ShellOutError`] holding everything the
//!   process printed before it failed.
//!
//! ```no_run
//! use shellout::{Command, RunOptions, Runner, SafeString};
//!
//! let command = Command::new(SafeString::trusted("echo"))
//!     .quoted("foo ; echo bar");
//! let output = Runner::default().run(&command, RunOptions::default())?;
//! assert_eq!(output.stdout, "foo ; echo bar");
//! # Ok::<(), shellout::Error>(())
//! ```

pub mod argument;
pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod output;
pub mod quoting;
pub mod runner;
pub mod safe_string;

#[cfg(test)]
mod test_support;

pub use argument::Argument;
pub use command::Command;
pub use config::ShellConfig;
pub use error::{Error, Result, ShellOutError, ValidationError};
pub use output::CommandOutput;
pub use runner::{BackgroundRun, OutputSink, RunOptions, Runner, shell_out};
pub use safe_string::SafeString;
