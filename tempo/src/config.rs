//! Duration settings: day length and default format pattern

use serde::{Deserialize, Serialize};
use crate::DurationError;

/// Hours in a day unless configured otherwise
pub const DEFAULT_HOURS_PER_DAY: u32 = 24;

/// Pattern used by `Display` unless configured otherwise
pub const DEFAULT_PATTERN: &str = "hh:mm:ss";

/// Settings fixed at construction of a [`crate::Duration`]
///
/// `hours_per_day` moves the hour→day carry boundary (8 for a work-shift
/// day, for example). `pattern` is the template `Display` renders with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationConfig {
    pub hours_per_day: u32,
    pub pattern: String,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl DurationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hours_per_day(mut self, hours_per_day: u32) -> Self {
        self.hours_per_day = hours_per_day;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Reject settings that cannot describe a day. No clamping.
    pub fn validate(&self) -> Result<(), DurationError> {
        if self.hours_per_day == 0 {
            return Err(DurationError::InvalidHoursPerDay(self.hours_per_day));
        }
        Ok(())
    }
}
