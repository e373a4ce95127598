//! Duration errors
//!
//! Two kinds of failure exist: input that is not a recognizable duration,
//! and configuration that cannot describe a day. Both are plain values;
//! nothing in this crate panics on bad input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const NEGATIVE_DURATION: &str = "NEGATIVE_DURATION";
    pub const NOT_FINITE: &str = "NOT_FINITE";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
}

/// Broad class of a [`DurationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The input is not a duration this crate understands
    Parse,
    /// The duration settings are unusable
    Configuration,
}

/// Error type for duration parsing and construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("Unrecognized duration: '{0}'")]
    Unrecognized(String),

    #[error("Negative duration: {0}")]
    Negative(String),

    #[error("Duration is not a finite number: {0}")]
    NotFinite(String),

    #[error("Duration overflow: '{0}' is too large")]
    Overflow(String),

    #[error("Invalid hours per day: {0} (must be greater than 0)")]
    InvalidHoursPerDay(u32),
}

impl DurationError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unrecognized(_) => codes::PARSE_ERROR,
            Self::Negative(_) => codes::NEGATIVE_DURATION,
            Self::NotFinite(_) => codes::NOT_FINITE,
            Self::Overflow(_) => codes::OVERFLOW,
            Self::InvalidHoursPerDay(_) => codes::INVALID_CONFIG,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidHoursPerDay(_) => ErrorKind::Configuration,
            _ => ErrorKind::Parse,
        }
    }

    pub fn is_parse(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Suggestion for fixing the input
    pub fn suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Parse => "Use seconds (3600), hh:mm:ss, unit tokens (1d 2h 3m 4s) or ISO 8601 (P1DT2H)",
            ErrorKind::Configuration => "Hours per day must be at least 1",
        }
    }
}
