//! Commands: a program plus an ordered list of arguments.

use crate::argument::Argument;
use crate::error::ValidationError;
use crate::quoting::{has_unsafe_content, is_assignment};
use crate::safe_string::SafeString;
use std::fmt;

/// A program and its arguments, ready to render or run.
///
/// The rendered command line is always the program followed by each
/// argument's rendering, joined by single spaces, in order.
///
/// # Examples
///
/// ```
/// use shellout::{Argument, Command, SafeString};
///
/// let command = Command::new(SafeString::trusted("git"))
///     .verbatim("commit")
///     .verbatim("-m")
///     .quoted("fix: don't panic");
/// assert_eq!(command.render(), r"git commit -m 'fix: don'\''t panic'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command {
    program: SafeString,
    arguments: Vec<Argument>,
}

impl Command {
    /// A command with no arguments.
    pub fn new(program: SafeString) -> Self {
        Self {
            program,
            arguments: Vec::new(),
        }
    }

    /// A command with the given arguments.
    pub fn with_arguments(program: SafeString, arguments: impl IntoIterator<Item = Argument>) -> Self {
        Self {
            program,
            arguments: arguments.into_iter().collect(),
        }
    }

    /// The program name.
    pub fn program(&self) -> &SafeString {
        &self.program
    }

    /// The arguments, in order.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Add one argument.
    pub fn arg(mut self, argument: impl Into<Argument>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Add several arguments.
    pub fn args(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    /// Add an argument that is inserted without escaping.
    pub fn verbatim(self, value: impl Into<String>) -> Self {
        self.arg(Argument::Verbatim(value.into()))
    }

    /// Add an argument that is shell-quoted on rendering.
    pub fn quoted(self, value: impl Into<String>) -> Self {
        self.arg(Argument::Quoted(value.into()))
    }

    /// A copy of this command with `more` appended; `self` is unchanged.
    pub fn appending(&self, more: impl IntoIterator<Item = Argument>) -> Command {
        self.clone().args(more)
    }

    /// Append `more` in place.
    ///
    /// The new argument list is built first and swapped in as a whole.
    pub fn append(&mut self, more: impl IntoIterator<Item = Argument>) {
        let mut arguments = self.arguments.clone();
        arguments.extend(more);
        self.arguments = arguments;
    }

    /// Render to one flat line for a shell.
    pub fn render(&self) -> String {
        let mut line = self.program.as_str().to_string();
        for argument in &self.arguments {
            line.push(' ');
            line.push_str(&argument.render());
        }
        line
    }

    /// Whether the rendered line only means what it says when a shell
    /// parses it: the program carries shell syntax or is an assignment, or
    /// a verbatim argument does.
    pub fn requires_shell(&self) -> bool {
        self.program_requires_shell() || self.arguments.iter().any(Argument::needs_shell)
    }

    fn program_requires_shell(&self) -> bool {
        let program = self.program.as_str();
        has_unsafe_content(program) || is_assignment(program)
    }

    /// The argument vector for running the program without a shell.
    ///
    /// Quoted arguments pass their raw value; verbatim arguments pass as-is.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - One entry per argument, program excluded
    /// * `Err(ValidationError::NeedsShell)` - The program or a verbatim
    ///   argument depends on shell parsing
    pub fn argv(&self) -> Result<Vec<String>, ValidationError> {
        if self.program_requires_shell() {
            return Err(ValidationError::NeedsShell {
                argument: self.program.as_str().to_string(),
            });
        }
        self.arguments
            .iter()
            .map(|argument| {
                if argument.needs_shell() {
                    Err(ValidationError::NeedsShell {
                        argument: argument.value().to_string(),
                    })
                } else {
                    Ok(argument.value().to_string())
                }
            })
            .collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo() -> Command {
        Command::new(SafeString::trusted("echo"))
    }

    #[test]
    fn render_without_arguments_is_program() {
        assert_eq!(echo().render(), "echo");
    }

    #[test]
    fn render_joins_with_single_spaces() {
        let command = echo().verbatim("-n").quoted("hello world").verbatim("> out");
        assert_eq!(command.render(), "echo -n 'hello world' > out");
        assert_eq!(command.to_string(), command.render());
    }

    #[test]
    fn appending_matches_concatenated_construction() {
        let first = vec![Argument::verbatim("a"), Argument::quoted("b c")];
        let more = vec![Argument::quoted("it's"), Argument::verbatim("&& ls")];

        let appended = Command::with_arguments(SafeString::trusted("echo"), first.clone())
            .appending(more.clone());

        let mut all = first;
        all.extend(more);
        let built = Command::with_arguments(SafeString::trusted("echo"), all);

        assert_eq!(appended.render(), built.render());
        assert_eq!(appended, built);
    }

    #[test]
    fn appending_is_associative() {
        let a = vec![Argument::quoted("1")];
        let b = vec![Argument::quoted("2")];
        let c = vec![Argument::quoted("3")];

        let left = echo().appending(a.clone()).appending(b.clone()).appending(c.clone());
        let mut bc = b;
        bc.extend(c);
        let right = echo().appending(a).appending(bc);

        assert_eq!(left, right);
    }

    #[test]
    fn appending_leaves_receiver_unchanged() {
        let original = echo().quoted("one");
        let _extended = original.appending([Argument::quoted("two")]);
        assert_eq!(original.arguments().len(), 1);
    }

    #[test]
    fn append_mutates_in_place() {
        let mut command = echo().quoted("one");
        command.append([Argument::quoted("two"), Argument::quoted("three")]);
        assert_eq!(command.render(), "echo one two three");
    }

    #[test]
    fn requires_shell_detects_verbatim_syntax() {
        assert!(!echo().quoted("a ; b").requires_shell());
        assert!(echo().verbatim("a ; b").requires_shell());
        assert!(!echo().verbatim("--flag").requires_shell());
    }

    #[test]
    fn requires_shell_checks_the_program() {
        let chained = Command::new(SafeString::trusted("echo a &&")).verbatim("echo").quoted("b");
        assert!(chained.requires_shell());
        assert!(Command::new(SafeString::trusted("X=1")).verbatim("true").requires_shell());
        assert!(!Command::new(SafeString::trusted("/usr/bin/env")).requires_shell());
    }

    #[test]
    fn argv_rejects_shell_dependent_program() {
        let err = Command::new(SafeString::trusted("X=1")).verbatim("true").argv().unwrap_err();
        assert_eq!(
            err,
            ValidationError::NeedsShell {
                argument: "X=1".to_string()
            }
        );
    }

    #[test]
    fn argv_passes_raw_values() {
        let command = echo().verbatim("-n").quoted("foo ; echo bar").quoted("");
        assert_eq!(command.argv().unwrap(), vec!["-n", "foo ; echo bar", ""]);
    }

    #[test]
    fn argv_rejects_shell_dependent_verbatim() {
        let err = echo().verbatim("a | b").argv().unwrap_err();
        assert_eq!(
            err,
            ValidationError::NeedsShell {
                argument: "a | b".to_string()
            }
        );
    }

    #[test]
    fn rendered_line_parses_back_to_argv() {
        let command = echo().quoted("it's here").quoted("$HOME").verbatim("plain");
        let words = shell_words::split(&command.render()).unwrap();
        assert_eq!(words, vec!["echo", "it's here", "$HOME", "plain"]);
    }
}
