//! CLI argument parsing for shellout.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// shellout: run a command, capture its output, and report failures.
#[derive(Parser, Debug)]
#[command(name = "shellout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML configuration file (shell, read chunk size, default timeout).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for shellout.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a program with arguments.
    ///
    /// The program name must not need quoting. Arguments are passed
    /// literally: without a shell, or quoted when `--shell` is given.
    Run(RunArgs),

    /// Run a complete command line through the shell.
    Line(LineArgs),

    /// Print values quoted for safe use in a shell command line.
    Quote(QuoteArgs),
}

/// Options shared by `run` and `line`.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Working directory (`~` expands to the home directory).
    #[arg(long, default_value = ".")]
    pub at: String,

    /// Environment variable for the command, as KEY=VALUE. Repeatable.
    #[arg(short, long = "env", value_parser = parse_env_var)]
    pub env: Vec<(String, String)>,

    /// Kill the command after this many seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Stream output live instead of printing it after the command exits.
    #[arg(long)]
    pub tee: bool,

    /// Print the result as JSON.
    #[arg(long, conflicts_with = "tee")]
    pub json: bool,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub exec: ExecArgs,

    /// Render the command and run it through the shell.
    #[arg(long)]
    pub shell: bool,

    /// Program to run.
    pub program: String,

    /// Arguments for the program.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `line` command.
#[derive(Args, Debug)]
pub struct LineArgs {
    #[command(flatten)]
    pub exec: ExecArgs,

    /// The command line, passed to the shell as-is.
    pub line: String,
}

/// Arguments for the `quote` command.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Values to quote.
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Only report whether each value is safe unquoted.
    #[arg(long)]
    pub check: bool,
}

fn parse_env_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
