//! Handles for runs executing on a background thread.

use crate::error::{Error, Result};
use crate::output::CommandOutput;
use std::thread::JoinHandle;

/// A run started with [`Runner::spawn`](super::Runner::spawn).
#[derive(Debug)]
pub struct BackgroundRun {
    command: String,
    handle: JoinHandle<Result<CommandOutput>>,
}

impl BackgroundRun {
    pub(super) fn new(command: String, handle: JoinHandle<Result<CommandOutput>>) -> Self {
        Self { command, handle }
    }

    /// The rendered command line.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Whether the run has finished; [`join`](Self::join) will not block.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the run finishes and return its result.
    pub fn join(self) -> Result<CommandOutput> {
        let command = self.command;
        self.handle
            .join()
            .map_err(|_| Error::Background(format!("worker running '{}' panicked", command)))?
    }
}
