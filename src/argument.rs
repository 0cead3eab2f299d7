//! Command-line arguments tagged with their quoting policy.

use crate::quoting::{has_unsafe_content, quote};
use crate::safe_string::SafeString;
use std::borrow::Cow;
use std::fmt;

/// One token of a command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Argument {
    /// Inserted as-is. The caller vouches that the text is meant for the
    /// shell, which may include deliberate syntax such as `&&` or `>`.
    Verbatim(String),

    /// Quoted before insertion; always read back as one literal word.
    Quoted(String),
}

impl Argument {
    /// A token inserted without escaping.
    pub fn verbatim(value: impl Into<String>) -> Self {
        Argument::Verbatim(value.into())
    }

    /// A token that is shell-quoted on rendering.
    pub fn quoted(value: impl Into<String>) -> Self {
        Argument::Quoted(value.into())
    }

    /// The unrendered text.
    pub fn value(&self) -> &str {
        match self {
            Argument::Verbatim(s) | Argument::Quoted(s) => s,
        }
    }

    /// The text as it appears in a rendered command line.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Argument::Verbatim(s) => Cow::Borrowed(s),
            Argument::Quoted(s) => Cow::Owned(quote(s)),
        }
    }

    /// Whether this token only means what it says when a shell parses it.
    ///
    /// True for verbatim text containing whitespace or metacharacters.
    /// Quoted tokens never need a shell.
    pub fn needs_shell(&self) -> bool {
        match self {
            Argument::Verbatim(s) => has_unsafe_content(s),
            Argument::Quoted(_) => false,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<SafeString> for Argument {
    fn from(value: SafeString) -> Self {
        Argument::Verbatim(value.into_inner())
    }
}
