//! Per-run options.

use super::sink::OutputSink;
use std::collections::HashMap;
use std::time::Duration;

/// Options for a single run.
///
/// Defaults: current directory, inherited environment, no sinks, and the
/// runner's configured default timeout.
#[derive(Debug)]
pub struct RunOptions {
    /// Directory the command runs in. `.` keeps the caller's current
    /// directory; a leading `~` or `~/` expands to the home directory.
    pub working_directory: String,

    /// Variables set on top of the inherited environment.
    pub environment: Option<HashMap<String, String>>,

    /// Receives a live copy of everything written to stdout.
    pub output_sink: Option<OutputSink>,

    /// Receives a live copy of everything written to stderr.
    pub error_sink: Option<OutputSink>,

    /// Kill the process if it runs longer than this.
    ///
    /// On Unix a timed run is placed in its own process group and the whole
    /// group is killed, so processes it started go too. Elsewhere only the
    /// direct child is killed.
    pub timeout: Option<Duration>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            working_directory: ".".to_string(),
            environment: None,
            output_sink: None,
            error_sink: None,
            timeout: None,
        }
    }
}

impl RunOptions {
    /// Options that run in `directory`.
    pub fn at(directory: impl Into<String>) -> Self {
        Self::default().working_directory(directory)
    }

    /// Set the working directory.
    pub fn working_directory(mut self, directory: impl Into<String>) -> Self {
        self.working_directory = directory.into();
        self
    }

    /// Set one environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace the environment overrides.
    pub fn environment(mut self, environment: HashMap<String, String>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Tee stdout into `sink`.
    pub fn output_sink(mut self, sink: OutputSink) -> Self {
        self.output_sink = Some(sink);
        self
    }

    /// Tee stderr into `sink`.
    pub fn error_sink(mut self, sink: OutputSink) -> Self {
        self.error_sink = Some(sink);
        self
    }

    /// Set a timeout for this run.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
