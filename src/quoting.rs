//! POSIX shell quoting.
//!
//! [`quote`] turns any string into a single shell word that the shell reads
//! back as exactly that string. [`has_unsafe_content`] decides whether a
//! string can be placed in a command line without quoting at all.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Strings made only of these characters are never altered by the shell.
static SAFE_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-./:@%+=,]+$").expect("Invalid safe word regex"));

/// A leading `NAME=` makes a first word a variable assignment.
static ASSIGNMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*=").expect("Invalid assignment regex"));

/// Returns true if `s` would need quoting to be read back as one literal word. to be read back as one literal word.
///
/// The empty string counts as unsafe: left unquoted it disappears from the
/// command line entirely.
pub fn has_unsafe_content(s: &str) -> bool {
    !SAFE_WORD_REGEX.is_match(s)
}

/// Returns true if `s`, as the first word of a command line, would be read
/// as a variable assignment (`NAME=value`) rather than a command name.
///
/// Such words are safe as arguments but not as a program.
pub fn is_assignment(s: &str) -> bool {
    ASSIGNMENT_REGEX.is_match(s)
}

/// The first character of `s` that requires quoting, if any.
pub(crate) fn first_unsafe_char(s: &str) -> Option<char> {
    s.chars().find(|c| !is_safe_char(*c))
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | '@' | '%' | '+' | '=' | ',')
}

/// Quote `s` so the shell parses it as one word equal to `s`.
///
/// Safe strings are returned unchanged. Everything else is wrapped in single
/// quotes, and each embedded single quote is written as `'\''` (close the
/// quoting, emit an escaped quote, reopen).
///
/// # Examples
///
/// ```
/// use shellout::quoting::quote;
///
/// assert_eq!(quote("plain"), "plain");
/// assert_eq!(quote(""), "''");
/// assert_eq!(quote("it's"), r"'it'\''s'");
/// ```
pub fn quote(s: &str) -> String {
    if !has_unsafe_content(s) {
        return s.to_string();
    }

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        if c == '\'' {
            quoted.push_str(r"'\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

/// Quote every word and join them with single spaces.
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| quote(w.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a flat command line into words using POSIX shell rules.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The parsed words
/// * `Err(Error::Parse)` - Unmatched quotes or a dangling escape
pub fn split(line: &str) -> Result<Vec<String>> {
    shell_words::split(line).map_err(|e| {
        Error::Parse(format!(
            "{}\nLine: {}\nFix: check for unmatched quotes or invalid escape sequences.",
            e, line
        ))
    })
}
