//! Strings proven safe to place unquoted in a command line.

use crate::error::ValidationError;
use crate::quoting::{first_unsafe_char, has_unsafe_content, is_assignment};
use std::fmt;
use std::str::FromStr;

/// A string that contains no character the shell would interpret.
///
/// Concatenated unquoted into a command line, a `SafeString` is always read
/// back as exactly one word: no word splitting, no globbing, no expansion.
/// In first position it is never taken for a variable assignment.
///
/// Build one with [`SafeString::validate`] for anything that did not come
/// from a literal in your own code. [`SafeString::trusted`] skips the check
/// and leaves correctness to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SafeString(String);

impl SafeString {
    /// Validate `value` and wrap it.
    ///
    /// # Returns
    ///
    /// * `Ok(SafeString)` - The value needs no quoting
    /// * `Err(ValidationError::Empty)` - The value is empty
    /// * `Err(ValidationError::UnsafeCharacter)` - The value contains a
    ///   character that would need quoting
    /// * `Err(ValidationError::Assignment)` - The value starts with `NAME=`,
    ///   which the shell reads as an assignment when it comes first
    pub fn validate(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty);
        }
        if has_unsafe_content(&value) {
            let found = first_unsafe_char(&value).unwrap_or(' ');
            return Err(ValidationError::UnsafeCharacter {
                input: value,
                found,
            });
        }
        if is_assignment(&value) {
            return Err(ValidationError::Assignment { input: value });
        }
        Ok(Self(value))
    }

    /// Wrap `value` without validating it.
    ///
    /// Only for literals the caller controls, such as fixed program names
    /// (`"git"`) or flags. Passing user input here reopens the injection
    /// hole this type exists to close.
    pub fn trusted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The wrapped string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SafeString {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl TryFrom<&str> for SafeString {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::validate(value)
    }
}

impl TryFrom<String> for SafeString {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(value)
    }
}
