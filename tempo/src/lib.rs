//! Tempo - Duration value type
//!
//! Parses elapsed time written in several notations, keeps it carried
//! into days, hours, minutes and seconds, and renders it back:
//! - `Duration`: the value, built from seconds, text, or nothing
//! - `DurationConfig`: hours per day and default format pattern
//! - `DurationError`: parse and configuration failures
//!
//! Accepted input:
//! - Seconds: `3600`, `"3661.5"`
//! - ISO 8601: `"P2W"`, `"P1DT2H"`, `"PT1.5M"`
//! - Colon: `"01:30:45"`, `"1d 10:30:45"`
//! - Units: `"1d 2h 3m 4.5s"`, `"1h30m"`
//!
//! ```
//! use tempo::Duration;
//!
//! let d = Duration::new("1d 6h").unwrap();
//! assert_eq!(d.format("H:mm:ss"), "30:00:00");
//! assert_eq!(d.humanize(), "1d 6h");
//! assert_eq!(d.to_iso8601(), "P1DT6H");
//! ```

mod config;
mod duration;
mod error;
mod input;
mod serde_impl;

pub mod format;
pub mod normalize;
pub mod parse;

pub use config::{DurationConfig, DEFAULT_HOURS_PER_DAY, DEFAULT_PATTERN};
pub use duration::Duration;
pub use error::{codes, DurationError, ErrorKind};
pub use input::DurationInput;
pub use normalize::{Parts, RawParts};
pub use parse::{parse, parse_with, valid, valid_with, Strategy};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Duration, DurationConfig, DurationError, DurationInput};
}
