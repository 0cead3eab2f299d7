//! Captured output of a successful command.

use serde::Serialize;

/// Standard output and standard error of a command that exited with status 0.
///
/// Both streams are decoded as UTF-8 (invalid sequences become U+FFFD) and
/// have exactly one trailing newline removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandOutput {
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Build an output from raw stream buffers.
    pub fn from_bytes(stdout: &[u8], stderr: &[u8]) -> Self {
        Self {
            stdout: strip_trailing_newline(String::from_utf8_lossy(stdout).into_owned()),
            stderr: strip_trailing_newline(String::from_utf8_lossy(stderr).into_owned()),
        }
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Remove a single trailing `\n`, if present.
///
/// A preceding `\r` is kept, as are any earlier newlines and all leading
/// whitespace.
pub fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_exactly_one_newline() {
        assert_eq!(strip_trailing_newline("hello\n".to_string()), "hello");
        assert_eq!(strip_trailing_newline("hello\n\n".to_string()), "hello\n");
        assert_eq!(strip_trailing_newline("hello".to_string()), "hello");
        assert_eq!(strip_trailing_newline("\n".to_string()), "");
        assert_eq!(strip_trailing_newline(String::new()), "");
    }

    #[test]
    fn keeps_carriage_return_and_leading_whitespace() {
        assert_eq!(strip_trailing_newline("line\r\n".to_string()), "line\r");
        assert_eq!(strip_trailing_newline("  indented \n".to_string()), "  indented ");
        assert_eq!(strip_trailing_newline("trailing space ".to_string()), "trailing space ");
    }

    #[test]
    fn from_bytes_decodes_and_normalizes_both_streams() {
        let output = CommandOutput::from_bytes(b"Hello world\n", b"warning\n");
        assert_eq!(output.stdout, "Hello world");
        assert_eq!(output.stderr, "warning");
    }

    #[test]
    fn from_bytes_replaces_invalid_utf8() {
        let output = CommandOutput::from_bytes(&[0xff, b'\n'], b"");
        assert_eq!(output.stdout, "\u{fffd}");
    }

    #[test]
    fn lines_of_empty_output() {
        assert!(CommandOutput::default().lines().is_empty());

        let output = CommandOutput::from_bytes(b"a\nb\n", b"");
        assert_eq!(output.lines(), vec!["a", "b"]);
    }
}
