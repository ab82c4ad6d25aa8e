//! Error types for argument validation and request construction.

use std::fmt;

use thiserror::Error;

/// Usage line shown when the positional arguments are wrong.
pub(crate) const USAGE: &str = "picsum <size> | picsum <width> <height>";

/// Which positional dimension argument failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgPosition {
    /// The single size argument of a square image.
    Only,
    /// The width argument.
    First,
    /// The height argument.
    Second,
}

impl fmt::Display for ArgPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Only => f.write_str("number"),
            Self::First => f.write_str("first number"),
            Self::Second => f.write_str("second number"),
        }
    }
}

/// Errors that can occur before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Neither one nor two positional arguments were given.
    #[error(
        "invalid arguments: expected 1 or 2 numbers, got {count}\nUsage: {usage}",
        usage = USAGE
    )]
    InvalidArgumentCount {
        /// Number of positional arguments received.
        count: usize,
    },

    /// A positional argument is not a valid integer.
    #[error("invalid {position}: {value}")]
    InvalidNumber {
        /// Which argument was rejected.
        position: ArgPosition,
        /// The offending literal text.
        value: String,
    },

    /// Blur level is set but outside the accepted range.
    #[error("blur level must be between {min} and {max}, got {level}")]
    BlurLevelOutOfRange {
        /// The rejected level.
        level: i32,
        /// Lowest accepted level.
        min: i32,
        /// Highest accepted level.
        max: i32,
    },

    /// Both `--id` and `--seed` were supplied.
    #[error("options --id and --seed are mutually exclusive")]
    ConflictingSelectors,
}

impl RequestError {
    /// Creates an argument count error.
    #[must_use]
    pub fn argument_count(count: usize) -> Self {
        Self::InvalidArgumentCount { count }
    }

    /// Creates a parse error for the argument at `position`.
    #[must_use]
    pub fn parse(position: ArgPosition, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            position,
            value: value.into(),
        }
    }

    /// Creates a blur level range error.
    #[must_use]
    pub fn blur_level(level: i32, min: i32, max: i32) -> Self {
        Self::BlurLevelOutOfRange { level, min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count_display_includes_usage() {
        let msg = RequestError::argument_count(3).to_string();
        assert!(msg.starts_with("invalid arguments"), "got: {msg}");
        assert!(msg.contains("got 3"), "got: {msg}");
        assert!(msg.contains(USAGE), "Expected usage line in: {msg}");
    }

    #[test]
    fn test_parse_error_names_position_and_literal() {
        let only = RequestError::parse(ArgPosition::Only, "abc").to_string();
        assert_eq!(only, "invalid number: abc");

        let first = RequestError::parse(ArgPosition::First, "3x").to_string();
        assert_eq!(first, "invalid first number: 3x");

        let second = RequestError::parse(ArgPosition::Second, "").to_string();
        assert_eq!(second, "invalid second number: ");
    }

    #[test]
    fn test_blur_level_display() {
        let msg = RequestError::blur_level(11, 1, 10).to_string();
        assert_eq!(msg, "blur level must be between 1 and 10, got 11");
    }

    #[test]
    fn test_conflicting_selectors_display() {
        let msg = RequestError::ConflictingSelectors.to_string();
        assert!(msg.contains("--id"), "got: {msg}");
        assert!(msg.contains("--seed"), "got: {msg}");
        assert!(msg.contains("mutually exclusive"), "got: {msg}");
    }
}
