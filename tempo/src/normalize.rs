//! Carry logic: raw (days, hours, minutes, seconds) → canonical parts
//!
//! Raw values may be fractional or out of range. They are folded into a
//! total count of nanoseconds, then split again with floor division so
//! that every field stays below its modulus.

use serde::{Deserialize, Serialize};
use crate::DurationError;

pub const NANOS_PER_SECOND: u128 = 1_000_000_000;
pub const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
pub const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Unnormalized amounts per unit, as extracted by the parser
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawParts {
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl RawParts {
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds, ..Self::default() }
    }

    /// Total seconds, counting a day as `hours_per_day` hours
    pub fn total_seconds(&self, hours_per_day: u32) -> f64 {
        ((self.days * hours_per_day as f64 + self.hours) * 60.0 + self.minutes) * 60.0 + self.seconds
    }

    /// Carry seconds into minutes, minutes into hours, hours into days
    pub fn carry(&self, hours_per_day: u32) -> Result<Parts, DurationError> {
        if hours_per_day == 0 {
            return Err(DurationError::InvalidHoursPerDay(hours_per_day));
        }

        let total = self.total_seconds(hours_per_day);
        if !total.is_finite() {
            return Err(DurationError::NotFinite(total.to_string()));
        }
        if total < 0.0 {
            return Err(DurationError::Negative(total.to_string()));
        }

        // Scale whole seconds in integers; f64 loses nanos past 2^53
        let whole = total.trunc();
        let fraction = (total.fract() * NANOS_PER_SECOND as f64).round() as u128;
        let nanos = if whole >= u128::MAX as f64 {
            None
        } else {
            (whole as u128)
                .checked_mul(NANOS_PER_SECOND)
                .and_then(|n| n.checked_add(fraction))
        };

        nanos
            .and_then(|n| Parts::from_nanos(n, hours_per_day))
            .ok_or_else(|| DurationError::Overflow(total.to_string()))
    }
}

/// Canonical, fully carried duration fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parts {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    /// Seconds within the minute, in nanoseconds (always < 60s)
    pub nanos: u64,
}

impl Parts {
    /// Split a nanosecond total. `None` when days do not fit in u64.
    pub fn from_nanos(total: u128, hours_per_day: u32) -> Option<Self> {
        if hours_per_day == 0 {
            return None;
        }
        let nanos = (total % NANOS_PER_MINUTE) as u64;
        let total_minutes = total / NANOS_PER_MINUTE;
        let minutes = (total_minutes % 60) as u32;
        let total_hours = total_minutes / 60;
        let hours = (total_hours % hours_per_day as u128) as u32;
        let days = u64::try_from(total_hours / hours_per_day as u128).ok()?;

        Some(Self { days, hours, minutes, nanos })
    }

    /// Nanosecond total, inverse of [`Parts::from_nanos`]
    pub fn total_nanos(&self, hours_per_day: u32) -> u128 {
        let hours = self.days as u128 * hours_per_day as u128 + self.hours as u128;
        hours * NANOS_PER_HOUR + self.minutes as u128 * NANOS_PER_MINUTE + self.nanos as u128
    }

    /// Seconds within the minute, possibly fractional
    pub fn seconds(&self) -> f64 {
        self.nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn whole_seconds(&self) -> u64 {
        self.nanos / NANOS_PER_SECOND as u64
    }

    pub fn has_fraction(&self) -> bool {
        self.nanos % NANOS_PER_SECOND as u64 != 0
    }

    /// Hours with days flattened in
    pub fn total_hours(&self, hours_per_day: u32) -> u128 {
        self.days as u128 * hours_per_day as u128 + self.hours as u128
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.nanos == 0
    }

    /// Same parts with the seconds dropped (no rounding into minutes)
    pub fn without_seconds(self) -> Self {
        Self { nanos: 0, ..self }
    }
}
