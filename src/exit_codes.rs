//! Exit code constants for the shellout CLI.
//!
//! - 0: Success
//! - 1: The command failed (or failed with a status that cannot be passed through)
//! - 2: Usage error (unsafe program name, bad config, unparsable line)
//! - 124: The command timed out
//! - 127: The command could not be started

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Generic failure.
pub const FAILURE: i32 = 1;

/// Invalid input or configuration.
pub const USAGE_ERROR: i32 = 2;

/// The command was killed after exceeding its timeout.
pub const TIMED_OUT: i32 = 124;

/// The command could not be spawned.
pub const SPAWN_FAILURE: i32 = 127;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, FAILURE, USAGE_ERROR, TIMED_OUT, SPAWN_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_follow_shell_conventions() {
        assert_eq!(TIMED_OUT, 124);
        assert_eq!(SPAWN_FAILURE, 127);
    }
}
