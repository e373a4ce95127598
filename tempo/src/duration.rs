//! The Duration value
//!
//! A duration is stored fully carried as days, hours, minutes and seconds
//! relative to its configured day length. It is built once and only read
//! afterwards.

use std::fmt;
use std::str::FromStr;

use crate::config::{DEFAULT_HOURS_PER_DAY, DEFAULT_PATTERN};
use crate::format;
use crate::normalize::{Parts, RawParts, NANOS_PER_SECOND};
use crate::parse;
use crate::{DurationConfig, DurationError, DurationInput};

/// Elapsed time with a configurable day length
///
/// Total seconds are always `((days * hours_per_day + hours) * 60 + minutes) * 60 + seconds`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Duration {
    parts: Parts,
    hours_per_day: u32,
    pattern: String,
}

impl Default for Duration {
    fn default() -> Self {
        Self::zero()
    }
}

impl Duration {
    // ========== Construction ==========

    /// Build from seconds, text, or nothing, with a 24 hour day and "hh:mm:ss"
    pub fn new(input: impl Into<DurationInput>) -> Result<Self, DurationError> {
        Self::with_config(input, &DurationConfig::default())
    }

    /// Build with an explicit day length and default pattern
    pub fn with_options(
        input: impl Into<DurationInput>,
        hours_per_day: u32,
        pattern: &str,
    ) -> Result<Self, DurationError> {
        let config = DurationConfig::new()
            .with_hours_per_day(hours_per_day)
            .with_pattern(pattern);
        Self::with_config(input, &config)
    }

    pub fn with_config(input: impl Into<DurationInput>, config: &DurationConfig) -> Result<Self, DurationError> {
        let parts = parse::parse_with(input, config)?;
        Ok(Self {
            parts,
            hours_per_day: config.hours_per_day,
            pattern: config.pattern.clone(),
        })
    }

    /// Zero duration with default settings
    pub fn zero() -> Self {
        Self {
            parts: Parts::default(),
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    // ========== Factories ==========

    pub fn from_seconds(seconds: f64) -> Result<Self, DurationError> {
        Self::from_seconds_with(seconds, &DurationConfig::default())
    }

    pub fn from_minutes(minutes: f64) -> Result<Self, DurationError> {
        Self::from_minutes_with(minutes, &DurationConfig::default())
    }

    pub fn from_hours(hours: f64) -> Result<Self, DurationError> {
        Self::from_hours_with(hours, &DurationConfig::default())
    }

    /// Days of the configured length (24 hours by default)
    pub fn from_days(days: f64) -> Result<Self, DurationError> {
        Self::from_days_with(days, &DurationConfig::default())
    }

    pub fn from_string(text: &str) -> Result<Self, DurationError> {
        Self::new(text)
    }

    pub fn from_seconds_with(seconds: f64, config: &DurationConfig) -> Result<Self, DurationError> {
        Self::with_config(seconds, config)
    }

    pub fn from_minutes_with(minutes: f64, config: &DurationConfig) -> Result<Self, DurationError> {
        Self::with_config(minutes * 60.0, config)
    }

    pub fn from_hours_with(hours: f64, config: &DurationConfig) -> Result<Self, DurationError> {
        Self::with_config(hours * 3600.0, config)
    }

    pub fn from_days_with(days: f64, config: &DurationConfig) -> Result<Self, DurationError> {
        config.validate()?;
        let seconds = RawParts { days, ..RawParts::default() }.total_seconds(config.hours_per_day);
        Self::with_config(seconds, config)
    }

    // ========== Parsing ==========

    /// Canonical parts for the input, or why it is not a duration
    pub fn parse(input: impl Into<DurationInput>) -> Result<Parts, DurationError> {
        parse::parse(input)
    }

    pub fn parse_with(input: impl Into<DurationInput>, config: &DurationConfig) -> Result<Parts, DurationError> {
        parse::parse_with(input, config)
    }

    /// Whether [`Duration::parse`] would succeed
    pub fn valid(input: impl Into<DurationInput>) -> bool {
        parse::valid(input)
    }

    // ========== Accessors ==========

    pub fn days(&self) -> u64 {
        self.parts.days
    }

    pub fn hours(&self) -> u32 {
        self.parts.hours
    }

    pub fn minutes(&self) -> u32 {
        self.parts.minutes
    }

    /// Seconds within the minute, possibly fractional
    pub fn seconds(&self) -> f64 {
        self.parts.seconds()
    }

    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    pub fn hours_per_day(&self) -> u32 {
        self.hours_per_day
    }

    /// Default pattern used by `Display`
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_zero(&self) -> bool {
        self.parts.is_zero()
    }

    // ========== Conversions ==========

    pub fn total_nanos(&self) -> u128 {
        self.parts.total_nanos(self.hours_per_day)
    }

    pub fn to_seconds(&self) -> f64 {
        let nanos = self.total_nanos();
        (nanos / NANOS_PER_SECOND) as f64 + (nanos % NANOS_PER_SECOND) as f64 / NANOS_PER_SECOND as f64
    }

    pub fn to_minutes(&self) -> f64 {
        self.to_seconds() / 60.0
    }

    pub fn to_hours(&self) -> f64 {
        self.to_seconds() / 3600.0
    }

    /// Total in days of the configured length
    pub fn to_days(&self) -> f64 {
        self.to_hours() / self.hours_per_day as f64
    }

    // ========== Formatting ==========

    /// Render with a token pattern, see [`crate::format`]
    pub fn format(&self, pattern: &str) -> String {
        format::format_pattern(&self.parts, self.hours_per_day, pattern)
    }

    /// "1d 2h 3m 4s" style, non-zero units only; "0s" when zero
    pub fn humanize(&self) -> String {
        format::humanize(&self.parts)
    }

    pub fn to_iso8601(&self) -> String {
        format::to_iso8601(&self.parts)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&self.pattern))
    }
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<&Duration> for std::time::Duration {
    fn from(d: &Duration) -> Self {
        let nanos = d.total_nanos();
        let secs = (nanos / NANOS_PER_SECOND).min(u64::MAX as u128) as u64;
        std::time::Duration::new(secs, (nanos % NANOS_PER_SECOND) as u32)
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationError;

    fn try_from(d: std::time::Duration) -> Result<Self, Self::Error> {
        let parts = Parts::from_nanos(d.as_nanos(), DEFAULT_HOURS_PER_DAY)
            .ok_or_else(|| DurationError::Overflow(format!("{:?}", d)))?;
        Ok(Self { parts, ..Self::zero() })
    }
}
