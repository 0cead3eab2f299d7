//! The blocking execution routine shared by every entry point.

use super::drain::{PipeReader, Stream};
use super::invocation::Invocation;
use super::options::RunOptions;
use super::workdir::resolve_working_directory;
use crate::config::ShellConfig;
use crate::error::{Error, Result, ShellOutError};
use crate::output::CommandOutput;
use std::io;
use std::path::PathBuf;
use std::process::{Child, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How often a child with a deadline is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Spawn `invocation`, capture both streams, and classify the exit.
///
/// Returns only after the child has exited and both pipe readers have
/// reached end-of-stream.
pub(super) fn execute(
    config: &ShellConfig,
    invocation: &Invocation,
    options: RunOptions,
) -> Result<CommandOutput> {
    let RunOptions {
        working_directory,
        environment,
        output_sink,
        error_sink,
        timeout,
    } = options;

    let program = invocation.program(config).to_string();
    let description = invocation.describe();

    let directory = resolve_working_directory(&working_directory).map_err(|e| Error::Spawn {
        program: program.clone(),
        directory: PathBuf::from(&working_directory),
        source: e,
    })?;

    if let Some(dir) = &directory
        && !dir.is_dir()
    {
        return Err(Error::Spawn {
            program,
            directory: dir.clone(),
            source: io::Error::new(
                io::ErrorKind::NotFound,
                "working directory does not exist",
            ),
        });
    }

    let timeout = timeout.or_else(|| config.default_timeout());
    // A timed run leads its own process group; the deadline kills the group.
    let own_group = cfg!(unix) && timeout.is_some();

    let mut command = invocation.to_process_command(config);
    #[cfg(unix)]
    if own_group {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }
    if let Some(dir) = &directory {
        command.current_dir(dir);
    }
    if let Some(environment) = &environment {
        command.envs(environment);
    }
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let shown_directory = directory
        .clone()
        .unwrap_or_else(|| PathBuf::from(&working_directory));
    if config.log_commands {
        info!(command = %description, directory = %shown_directory.display(), mode = invocation.mode(), "running command");
    } else {
        debug!(command = %description, directory = %shown_directory.display(), mode = invocation.mode(), "running command");
    }

    let child = command.spawn().map_err(|e| Error::Spawn {
        program: program.clone(),
        directory: shown_directory.clone(),
        source: e,
    })?;

    let mut child = Spawned { child, own_group };
    let chunk_size = config.read_chunk_size;
    let stdout_reader = match PipeReader::spawn(child.child.stdout.take(), Stream::Stdout, output_sink, chunk_size) {
        Ok(reader) => reader,
        Err(e) => {
            child.kill();
            return Err(e);
        }
    };
    let stderr_reader = match PipeReader::spawn(child.child.stderr.take(), Stream::Stderr, error_sink, chunk_size) {
        Ok(reader) => reader,
        Err(e) => {
            child.kill();
            let _ = stdout_reader.join();
            return Err(e);
        }
    };

    let waited = wait_for_exit(&mut child, timeout);

    // The child may have exited with bytes still in flight; join before
    // looking at anything.
    let stdout = stdout_reader.join();
    let stderr = stderr_reader.join();

    let status = match waited {
        Ok(Some(status)) => status,
        Ok(None) => {
            let timeout = timeout.unwrap_or_default();
            warn!(command = %description, timeout_secs = timeout.as_secs_f64(), "command timed out and was killed");
            return Err(Error::TimedOut {
                command: description,
                timeout,
                stdout: stdout.unwrap_or_default(),
                stderr: stderr.unwrap_or_default(),
            });
        }
        Err(e) => return Err(e),
    };

    let stdout = stdout?;
    let stderr = stderr?;
    let code = exit_code(status);

    debug!(
        command = %description,
        exit_code = code,
        stdout_bytes = stdout.len(),
        stderr_bytes = stderr.len(),
        "command exited"
    );

    if code == 0 {
        Ok(CommandOutput::from_bytes(&stdout, &stderr))
    } else {
        Err(ShellOutError::new(code, stdout, stderr).into())
    }
}

/// A spawned child, and whether it leads its own process group.
struct Spawned {
    child: Child,
    own_group: bool,
}

impl Spawned {
    /// Kill the process (its whole group when it has one) and reap it.
    fn kill(&mut self) {
        #[cfg(unix)]
        if self.own_group {
            use nix::sys::signal::{Signal, kill};
            use nix::unistd::Pid;

            // A negative pid addresses the process group.
            let group = Pid::from_raw(-(self.child.id() as i32));
            let _ = kill(group, Signal::SIGKILL);
        }

        // On Unix this is SIGKILL; on Windows it is TerminateProcess.
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Wait for `child` to exit.
///
/// Without a timeout this blocks. With one, the child is polled and killed
/// once the deadline passes, in which case `Ok(None)` is returned.
fn wait_for_exit(spawned: &mut Spawned, timeout: Option<Duration>) -> Result<Option<ExitStatus>> {
    let Some(timeout) = timeout else {
        return match spawned.child.wait() {
            Ok(status) => Ok(Some(status)),
            Err(e) => {
                spawned.kill();
                Err(Error::Io {
                    context: "failed to wait for process".to_string(),
                    source: e,
                })
            }
        };
    };

    let start = Instant::now();
    loop {
        match spawned.child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status)),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    spawned.kill();
                    return Ok(None);
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                spawned.kill();
                return Err(Error::Io {
                    context: "failed to check process status".to_string(),
                    source: e,
                });
            }
        }
    }
}

/// The numeric exit status; `-signal` for a process killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}
