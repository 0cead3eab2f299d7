//! How a child process is launched: directly or through a shell.

use crate::command::Command;
use crate::config::ShellConfig;
use crate::error::Result;
use crate::quoting;
use std::process::Command as ProcessCommand;

/// Commands that only exist inside a shell, or that only affect the shell
/// they run in. Some systems ship binaries for a few of these (`cd`,
/// `umask`), but running those outside a shell does nothing useful.
const SHELL_BUILTINS: &[&str] = &[
    // special builtins
    ".", ":", "break", "continue", "eval", "exec", "exit", "export", "readonly", "return", "set",
    "shift", "times", "trap", "unset",
    // regular builtins with shell-local effect
    "alias", "bg", "cd", "fc", "fg", "getopts", "hash", "jobs", "local", "read", "source", "type",
    "ulimit", "umask", "unalias", "wait",
];

/// Whether `program` has to be run by a shell to mean anything.
pub(super) fn is_shell_builtin(program: &str) -> bool {
    SHELL_BUILTINS.contains(&program)
}

/// A fully decided launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Invocation {
    /// Exec `program` with `args`; no shell is involved.
    Direct { program: String, args: Vec<String> },
    /// Hand `line` to the configured shell.
    Shell { line: String },
}

impl Invocation {
    /// The launch [`Runner::run`](super::Runner::run) uses for `command`.
    ///
    /// Direct unless the command needs shell parsing or names a shell builtin.
    pub(super) fn for_command(command: &Command) -> Result<Self> {
        if command.requires_shell() || is_shell_builtin(command.program().as_str()) {
            Ok(Invocation::shell(command.render()))
        } else {
            Invocation::direct(command)
        }
    }

    /// A direct launch of `command`.
    ///
    /// Fails when the program or a verbatim argument only makes sense to a
    /// shell.
    pub(super) fn direct(command: &Command) -> Result<Self> {
        Ok(Invocation::Direct {
            program: command.program().as_str().to_string(),
            args: command.argv()?,
        })
    }

    /// A shell launch of `line`.
    pub(super) fn shell(line: impl Into<String>) -> Self {
        Invocation::Shell { line: line.into() }
    }

    /// The executable that will actually be spawned.
    pub(super) fn program<'a>(&'a self, config: &'a ShellConfig) -> &'a str {
        match self {
            Invocation::Direct { program, .. } => program,
            Invocation::Shell { .. } => &config.shell,
        }
    }

    pub(super) fn mode(&self) -> &'static str {
        match self {
            Invocation::Direct { .. } => "direct",
            Invocation::Shell { .. } => "shell",
        }
    }

    /// A human-readable, shell-equivalent rendering for logs and errors.
    pub(super) fn describe(&self) -> String {
        match self {
            Invocation::Direct { program, args } => {
                let mut line = program.clone();
                if !args.is_empty() {
                    line.push(' ');
                    line.push_str(&quoting::join(args));
                }
                line
            }
            Invocation::Shell { line } => line.clone(),
        }
    }

    pub(super) fn to_process_command(&self, config: &ShellConfig) -> ProcessCommand {
        match self {
            Invocation::Direct { program, args } => {
                let mut command = ProcessCommand::new(program);
                command.args(args);
                command
            }
            Invocation::Shell { line } => {
                let mut command = ProcessCommand::new(&config.shell);
                command.arg(&config.shell_flag).arg(line);
                command
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValidationError};
    use crate::safe_string::SafeString;

    #[test]
    fn direct_uses_raw_argument_values() {
        let command = Command::new(SafeString::trusted("echo")).quoted("a b").verbatim("-n");
        let invocation = Invocation::direct(&command).unwrap();
        assert_eq!(
            invocation,
            Invocation::Direct {
                program: "echo".to_string(),
                args: vec!["a b".to_string(), "-n".to_string()],
            }
        );
        assert_eq!(invocation.describe(), "echo 'a b' -n");
        assert_eq!(invocation.mode(), "direct");
    }

    #[test]
    fn direct_rejects_shell_syntax() {
        let command = Command::new(SafeString::trusted("echo")).verbatim("a && b");
        let err = Invocation::direct(&command).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NeedsShell { .. })
        ));
    }

    #[test]
    fn for_command_picks_direct_for_plain_commands() {
        let command = Command::new(SafeString::trusted("echo")).quoted("a ; b");
        assert_eq!(Invocation::for_command(&command).unwrap().mode(), "direct");
    }

    #[test]
    fn for_command_routes_shell_syntax_to_shell() {
        let chained = Command::new(SafeString::trusted("echo a &&")).verbatim("echo").quoted("b");
        assert_eq!(
            Invocation::for_command(&chained).unwrap(),
            Invocation::Shell {
                line: "echo a && echo b".to_string()
            }
        );

        let assignment = Command::new(SafeString::trusted("X=1")).verbatim("true");
        assert_eq!(Invocation::for_command(&assignment).unwrap().mode(), "shell");
    }

    #[test]
    fn for_command_routes_builtins_to_shell() {
        for builtin in ["cd", "export", "exit", ".", "source", "umask", "ulimit", "unset"] {
            let command = Command::new(SafeString::trusted(builtin)).quoted("x");
            assert_eq!(
                Invocation::for_command(&command).unwrap().mode(),
                "shell",
                "builtin: {}",
                builtin
            );
        }
        assert!(!is_shell_builtin("echo"));
        assert!(!is_shell_builtin("cdx"));
    }

    #[test]
    fn direct_rejects_shell_dependent_program() {
        let command = Command::new(SafeString::trusted("echo a &&")).verbatim("echo");
        assert!(matches!(
            Invocation::direct(&command).unwrap_err(),
            Error::Validation(ValidationError::NeedsShell { .. })
        ));
    }

    #[test]
    fn shell_runs_configured_shell() {
        let config = ShellConfig::default();
        let invocation = Invocation::shell("echo hi && echo there");
        assert_eq!(invocation.program(&config), "/bin/sh");
        assert_eq!(invocation.describe(), "echo hi && echo there");

        let command = invocation.to_process_command(&config);
        assert_eq!(command.get_program(), "/bin/sh");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["-c", "echo hi && echo there"]);
    }

    #[test]
    fn direct_process_command_has_argv() {
        let config = ShellConfig::default();
        let invocation = Invocation::Direct {
            program: "printf".to_string(),
            args: vec!["%s".to_string(), "x y".to_string()],
        };
        let command = invocation.to_process_command(&config);
        assert_eq!(command.get_program(), "printf");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["%s", "x y"]);
        assert_eq!(invocation.program(&config), "printf");
    }
}
