//! Homebrew commands.

use crate::{Command, SafeString};

/// `brew install <package>`
pub fn install(package: &str) -> Command {
    Command::new(SafeString::trusted("brew")).verbatim("install").quoted(package)
}
