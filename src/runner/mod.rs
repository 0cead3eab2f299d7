//! Process execution.
//!
//! A [`Runner`] spawns one child per call, drains its stdout and stderr on
//! two reader threads while it runs, waits for it to exit, joins both
//! readers, and only then classifies the result:
//!
//! - exit status 0: [`CommandOutput`] with one trailing newline stripped
//! - any other status: [`ShellOutError`](crate::ShellOutError) holding every
//!   captured byte
//! - the child never started: [`Error::Spawn`](crate::Error::Spawn)
//!
//! Commands that need no shell run the program directly from an argument
//! vector. Commands carrying shell syntax (`&&`, `|`, `>`, ...) or naming a
//! shell builtin (`cd`, `export`, ...) are rendered and handed to the
//! configured shell.
//!
//! There is no cancellation beyond the optional timeout. On Unix a timed run
//! leads its own process group and the deadline kills the whole group.
//! Without a timeout the child stays in the caller's group, so terminal
//! signals such as Ctrl-C still reach it. Descendants that leave the group
//! and keep the pipes open delay the result until they exit.

mod background;
mod drain;
mod execute;
mod invocation;
mod options;
mod sink;
mod workdir;


pub use background::BackgroundRun;
pub use options::RunOptions;
pub use sink::OutputSink;

use crate::command::Command;
use crate::config::ShellConfig;
use crate::error::{Error, Result};
use crate::output::CommandOutput;
use execute::execute;
use invocation::Invocation;
use std::path::Path;
use std::sync::Arc;
use std::thread;

/// Executes commands according to a [`ShellConfig`].
///
/// Cheap to clone; clones share the configuration.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: Arc<ShellConfig>,
}

impl Runner {
    /// Create a runner with the given configuration.
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create a runner from a YAML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(ShellConfig::load(path)?))
    }

    /// The configuration this runner uses.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Run `command`, directly when possible and through the shell when the
    /// program or an argument needs shell parsing, or the program is a shell
    /// builtin such as `cd` or `export`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use shellout::{Command, RunOptions, Runner, SafeString};
    ///
    /// let runner = Runner::default();
    /// let command = Command::new(SafeString::trusted("echo")).quoted("Hello world");
    /// let output = runner.run(&command, RunOptions::default())?;
    /// assert_eq!(output.stdout, "Hello world");
    /// # Ok::<(), shellout::Error>(())
    /// ```
    pub fn run(&self, command: &Command, options: RunOptions) -> Result<CommandOutput> {
        execute(&self.config, &Invocation::for_command(command)?, options)
    }

    /// Run `command` without a shell.
    ///
    /// # Returns
    ///
    /// * `Err(Error::Validation)` - A verbatim argument depends on shell parsing
    pub fn run_direct(&self, command: &Command, options: RunOptions) -> Result<CommandOutput> {
        execute(&self.config, &Invocation::direct(command)?, options)
    }

    /// Render `command` and run it through the shell, even if it would not
    /// need one.
    pub fn run_in_shell(&self, command: &Command, options: RunOptions) -> Result<CommandOutput> {
        execute(&self.config, &Invocation::shell(command.render()), options)
    }

    /// Run a flat command line through the shell.
    ///
    /// The line is passed to the shell untouched; quoting it is the caller's job.
    pub fn run_line(&self, line: &str, options: RunOptions) -> Result<CommandOutput> {
        execute(&self.config, &Invocation::shell(line), options)
    }

    /// Run `command` on a background thread.
    ///
    /// The returned handle yields the same result [`run`](Self::run) would.
    pub fn spawn(&self, command: Command, options: RunOptions) -> Result<BackgroundRun> {
        let runner = self.clone();
        let description = command.render();
        let handle = thread::Builder::new()
            .name("shellout-run".to_string())
            .spawn(move || runner.run(&command, options))
            .map_err(|e| Error::Io {
                context: format!("failed to start background run of '{}'", description),
                source: e,
            })?;
        Ok(BackgroundRun::new(description, handle))
    }

    /// Run `command` on a background thread and hand the result to `callback`.
    ///
    /// `callback` runs on the background thread.
    pub fn run_with_callback<F>(&self, command: Command, options: RunOptions, callback: F) -> Result<()>
    where
        F: FnOnce(Result<CommandOutput>) + Send + 'static,
    {
        let runner = self.clone();
        let description = command.render();
        thread::Builder::new()
            .name("shellout-callback".to_string())
            .spawn(move || callback(runner.run(&command, options)))
            .map_err(|e| Error::Io {
                context: format!("failed to start background run of '{}'", description),
                source: e,
            })?;
        Ok(())
    }
}

/// Run `command` with the default configuration.
///
/// Shorthand for `Runner::default().run(command, options)`.
pub fn shell_out(command: &Command, options: RunOptions) -> Result<CommandOutput> {
    Runner::default().run(command, options)
}
