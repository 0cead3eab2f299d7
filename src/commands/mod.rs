//! Command implementations for the shellout CLI.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod quote;
mod run;

use crate::cli::{Cli, Command};
use shellout::{Result, Runner};

/// Dispatch a command to its implementation.
///
/// Loads the configuration file when one was given, then routes the
/// command to its handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let runner = match &cli.config {
        Some(path) => Runner::from_config_file(path)?,
        None => Runner::default(),
    };

    match cli.command {
        Command::Run(args) => run::cmd_run(&runner, args),
        Command::Line(args) => run::cmd_line(&runner, args),
        Command::Quote(args) => quote::cmd_quote(args),
    }
}
