//! ShellConfig struct definition and defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shell used for command lines that need shell parsing.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Flag that makes [`DEFAULT_SHELL`] read its command from the next argument.
pub const DEFAULT_SHELL_FLAG: &str = "-c";

/// Bytes requested per read from a child's stdout or stderr pipe.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 8192;

/// Configuration for a [`Runner`](crate::Runner).
///
/// Unknown fields in YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Shell program that interprets rendered command lines.
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Flag passed to the shell before the command line (e.g. `-c`).
    #[serde(default = "default_shell_flag")]
    pub shell_flag: String,

    /// Size of each read from the child's output pipes.
    #[serde(default = "default_read_chunk_size")]
    pub read_chunk_size: usize,

    /// Timeout applied when a run does not set its own (seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_timeout_secs: Option<u64>,

    /// Log every spawned command at `info` instead of `debug`.
    #[serde(default)]
    pub log_commands: bool,
}

impl ShellConfig {
    /// The configured default timeout, if any.
    pub fn default_timeout(&self) -> Option<Duration> {
        self.default_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            shell_flag: default_shell_flag(),
            read_chunk_size: default_read_chunk_size(),
            default_timeout_secs: None,
            log_commands: false,
        }
    }
}

fn default_shell() -> String {
    DEFAULT_SHELL.to_string()
}

fn default_shell_flag() -> String {
    DEFAULT_SHELL_FLAG.to_string()
}

fn default_read_chunk_size() -> usize {
    DEFAULT_READ_CHUNK_SIZE
}
