//! Duration parsing - turn "1d 2h", "01:30:00", "PT1H30M" or 3600 into parts
//!
//! Each notation is a [`Strategy`]. Strategies are tried in
//! [`Strategy::ORDER`] and the first match wins; they are never combined.
//! The raw amounts a strategy extracts are then carried by
//! [`RawParts::carry`].

use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

use crate::format::has_seconds_token;
use crate::normalize::{Parts, RawParts};
use crate::{DurationConfig, DurationError, DurationInput};

// ============ Compiled regex patterns ============

/// Non-negative integer or decimal, either side of the dot may be bare ("5.", ".5")
const NUM: &str = r"(\d+\.?\d*|\.\d+)";

fn get_numeric_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)$").unwrap()
    })
}

fn get_iso8601_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            r"(?i)^P(?:{n}W)?(?:{n}D)?(?:(T)(?:{n}H)?(?:{n}M)?(?:{n}S)?)?$",
            n = NUM
        );
        Regex::new(&pattern).unwrap()
    })
}

fn get_colon_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Optional "<n>d" on either side of h:m:s or m:s
        let pattern = format!(
            r"(?i)^(?:{n}d\s*)?{n}:{n}(?::{n})?(?:\s*{n}d)?$",
            n = NUM
        );
        Regex::new(&pattern).unwrap()
    })
}

fn get_units_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:(?:\d+\.?\d*|\.\d+)[dhms]\s*)+$").unwrap()
    })
}

fn get_unit_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i){}([dhms])", NUM)).unwrap()
    })
}

// ============ Strategies ============

/// One recognized duration notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// "3600", "3661.5", "-3600" (seconds)
    Numeric,
    /// "P2W", "P1DT2H", "PT1.5M"
    Iso8601,
    /// "01:30:45", "1d 10:30:45", "12:1:1 2d"
    Colon,
    /// "1d 2h 3m 4.5s", "1h30m"
    Units,
}

impl Strategy {
    /// Most specific first
    pub const ORDER: [Strategy; 4] = [
        Strategy::Numeric,
        Strategy::Iso8601,
        Strategy::Colon,
        Strategy::Units,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Iso8601 => "iso8601",
            Self::Colon => "colon",
            Self::Units => "units",
        }
    }

    /// Extract raw amounts from trimmed text, or `None` if the notation does not apply
    pub fn attempt(&self, text: &str) -> Option<RawParts> {
        match self {
            Self::Numeric => parse_numeric(text),
            Self::Iso8601 => parse_iso8601(text),
            Self::Colon => parse_colon(text),
            Self::Units => parse_units(text),
        }
    }
}

fn capture_f64(caps: &regex::Captures<'_>, index: usize) -> Option<f64> {
    caps.get(index).and_then(|m| m.as_str().parse().ok())
}

fn parse_numeric(text: &str) -> Option<RawParts> {
    if !get_numeric_regex().is_match(text) {
        return None;
    }
    text.parse::<f64>().ok().map(RawParts::from_seconds)
}

fn parse_iso8601(text: &str) -> Option<RawParts> {
    let caps = get_iso8601_regex().captures(text)?;

    let weeks = capture_f64(&caps, 1);
    let days = capture_f64(&caps, 2);
    let has_time = caps.get(3).is_some();
    let hours = capture_f64(&caps, 4);
    let minutes = capture_f64(&caps, 5);
    let seconds = capture_f64(&caps, 6);

    let has_time_part = hours.is_some() || minutes.is_some() || seconds.is_some();
    if has_time && !has_time_part {
        return None;
    }
    if weeks.is_none() && days.is_none() && !has_time_part {
        return None;
    }

    // Weeks only count on their own: "P1W1D" is one day, "P2WT1H" one hour
    let weeks = if days.is_some() || has_time_part { None } else { weeks };

    Some(RawParts {
        days: weeks.map(|w| w * 7.0).unwrap_or(0.0) + days.unwrap_or(0.0),
        hours: hours.unwrap_or(0.0),
        minutes: minutes.unwrap_or(0.0),
        seconds: seconds.unwrap_or(0.0),
    })
}

fn parse_colon(text: &str) -> Option<RawParts> {
    let caps = get_colon_regex().captures(text)?;

    let lead_days = capture_f64(&caps, 1).unwrap_or(0.0);
    let first = capture_f64(&caps, 2)?;
    let second = capture_f64(&caps, 3)?;
    let third = capture_f64(&caps, 4);
    let trail_days = capture_f64(&caps, 5).unwrap_or(0.0);

    // Right to left: seconds, minutes, hours
    let (hours, minutes, seconds) = match third {
        Some(s) => (first, second, s),
        None => (0.0, first, second),
    };

    Some(RawParts {
        days: lead_days + trail_days,
        hours,
        minutes,
        seconds,
    })
}

fn parse_units(text: &str) -> Option<RawParts> {
    if !get_units_regex().is_match(text) {
        return None;
    }

    let mut raw = RawParts::default();
    for caps in get_unit_token_regex().captures_iter(text) {
        let value = capture_f64(&caps, 1)?;
        match caps.get(2)?.as_str() {
            "d" | "D" => raw.days += value,
            "h" | "H" => raw.hours += value,
            "m" | "M" => raw.minutes += value,
            "s" | "S" => raw.seconds += value,
            _ => return None,
        }
    }
    Some(raw)
}

// ============ Public entry points ============

/// Extract raw amounts without carrying
///
/// Absent input is zero. Text is trimmed, then offered to each strategy in turn.
pub fn parse_raw(input: &DurationInput) -> Result<RawParts, DurationError> {
    match input {
        DurationInput::Empty => Ok(RawParts::default()),
        DurationInput::Number(n) => Ok(RawParts::from_seconds(*n)),
        DurationInput::Text(s) => {
            let text = s.trim();
            for strategy in Strategy::ORDER {
                if let Some(raw) = strategy.attempt(text) {
                    trace!(strategy = strategy.name(), input = text, "duration matched");
                    return Ok(raw);
                }
            }
            debug!(input = text, "no duration notation matched");
            Err(DurationError::Unrecognized(s.clone()))
        }
    }
}

/// Parse and normalize with default settings
pub fn parse(input: impl Into<DurationInput>) -> Result<Parts, DurationError> {
    parse_with(input, &DurationConfig::default())
}

/// Parse and normalize with the given settings
///
/// When the configured pattern has no seconds token the seconds are
/// dropped here, so the stored parts match what the pattern can show.
pub fn parse_with(input: impl Into<DurationInput>, config: &DurationConfig) -> Result<Parts, DurationError> {
    config.validate()?;
    let input = input.into();
    let parts = parse_raw(&input)?.carry(config.hours_per_day).map_err(|e| {
        debug!(input = %input, error = %e, "duration rejected");
        e
    })?;

    if has_seconds_token(&config.pattern) || parts.nanos == 0 {
        return Ok(parts);
    }
    debug!(pattern = %config.pattern, "pattern has no seconds token, dropping seconds");
    Ok(parts.without_seconds())
}

/// True exactly when [`parse`] succeeds
pub fn valid(input: impl Into<DurationInput>) -> bool {
    parse(input).is_ok()
}

/// True exactly when [`parse_with`] succeeds
pub fn valid_with(input: impl Into<DurationInput>, config: &DurationConfig) -> bool {
    parse_with(input, config).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str) -> Option<RawParts> {
        parse_raw(&DurationInput::from(text)).ok()
    }

    fn tuple(input: impl Into<DurationInput>, hours_per_day: u32) -> (u64, u32, u32, f64) {
        let config = DurationConfig::new().with_hours_per_day(hours_per_day);
        let p = parse_with(input, &config).unwrap();
        (p.days, p.hours, p.minutes, p.seconds())
    }

    #[test]
    fn test_strategy_order() {
        assert_eq!(Strategy::ORDER[0], Strategy::Numeric);
        assert_eq!(Strategy::ORDER[3], Strategy::Units);
        assert_eq!(Strategy::Numeric.attempt("3600"), Some(RawParts::from_seconds(3600.0)));
        assert_eq!(Strategy::Units.attempt("3600"), None);
        assert_eq!(Strategy::Colon.attempt("1h"), None);
        assert_eq!(Strategy::Iso8601.attempt("1h"), None);
    }

    #[test]
    fn test_numeric() {
        assert_eq!(tuple(3661.8, 24), (0, 1, 1, 1.8));
        assert_eq!(tuple("3600", 24), (0, 1, 0, 0.0));
        assert_eq!(tuple("+90", 24), (0, 0, 1, 30.0));
        assert_eq!(tuple(" 3661.5 ", 24), (0, 1, 1, 1.5));
    }

    #[test]
    fn test_colon() {
        let cases: &[(&str, (u64, u32, u32, f64))] = &[
            ("01:01:01", (0, 1, 1, 1.0)),
            ("00:00:00", (0, 0, 0, 0.0)),
            ("12:34:56", (0, 12, 34, 56.0)),
            ("1:01:01", (0, 1, 1, 1.0)),
            ("0:0:10", (0, 0, 0, 10.0)),
            ("00:1:10", (0, 0, 1, 10.0)),
            ("01:30", (0, 0, 1, 30.0)),
            ("1d 10:29:30", (1, 10, 29, 30.0)),
            ("1d 10:29", (1, 0, 10, 29.0)),
            ("550:250:150", (23, 2, 12, 30.0)),
            ("12:1:1 2d", (2, 12, 1, 1.0)),
            ("1D 00:00:05", (1, 0, 0, 5.0)),
            ("0:1.5:0", (0, 0, 1, 30.0)),
        ];
        for (text, expected) in cases {
            assert_eq!(tuple(*text, 24), *expected, "input {}", text);
        }
        assert_eq!(tuple("550:250:150", 12), (46, 2, 12, 30.0));
    }

    #[test]
    fn test_units() {
        let cases: &[(&str, (u64, u32, u32, f64))] = &[
            ("1d 2h 3m 4s", (1, 2, 3, 4.0)),
            ("1d 2h 3m 4.5s", (1, 2, 3, 4.5)),
            ("1d 48h 120m 60s", (3, 2, 1, 0.0)),
            ("1D 48H 120M 60S", (3, 2, 1, 0.0)),
            ("1h30m45s", (0, 1, 30, 45.0)),
            ("1h  30m  45s", (0, 1, 30, 45.0)),
            ("30s 1h", (0, 1, 0, 30.0)),
            ("1h 1h", (0, 2, 0, 0.0)),
            ("1.5h", (0, 1, 30, 0.0)),
            ("1.5d", (1, 12, 0, 0.0)),
            ("0d", (0, 0, 0, 0.0)),
        ];
        for (text, expected) in cases {
            assert_eq!(tuple(*text, 24), *expected, "input {}", text);
        }
    }

    #[test]
    fn test_units_day_is_configured_day() {
        assert_eq!(tuple("1d 2h", 8), (1, 2, 0, 0.0));
        assert_eq!(tuple("26h", 8), (3, 2, 0, 0.0));
    }

    #[test]
    fn test_iso8601() {
        let cases: &[(&str, (u64, u32, u32, f64))] = &[
            ("P2W", (14, 0, 0, 0.0)),
            ("P1.5W", (10, 12, 0, 0.0)),
            ("P5D", (5, 0, 0, 0.0)),
            ("PT5H", (0, 5, 0, 0.0)),
            ("PT1H45S", (0, 1, 0, 45.0)),
            ("P1DT30S", (1, 0, 0, 30.0)),
            ("P10DT90M", (10, 1, 30, 0.0)),
            ("PT2.5H", (0, 2, 30, 0.0)),
            ("PT45.5S", (0, 0, 0, 45.5)),
            ("P30DT48H120M", (32, 2, 0, 0.0)),
            ("pt1h30m", (0, 1, 30, 0.0)),
            ("p1dt2h3m4s", (1, 2, 3, 4.0)),
        ];
        for (text, expected) in cases {
            assert_eq!(tuple(*text, 24), *expected, "input {}", text);
        }
    }

    #[test]
    fn test_iso8601_weeks_dropped_with_other_designators() {
        assert_eq!(raw("P1W1D"), Some(RawParts { days: 1.0, ..RawParts::default() }));
        assert_eq!(raw("P2WT1H"), Some(RawParts { hours: 1.0, ..RawParts::default() }));
        assert_eq!(raw("P2W"), Some(RawParts { days: 14.0, ..RawParts::default() }));
    }

    #[test]
    fn test_iso8601_rejects() {
        for text in ["P", "PT", "P1DT", "P1Y", "P1M", "PT1H1D", "P-1D", "1DT2H"] {
            assert!(Strategy::Iso8601.attempt(text).is_none(), "input {}", text);
        }
        assert!(!valid("P1Y"));
        assert!(!valid("P1DT"));
    }

    #[test]
    fn test_valid_corpus() {
        let inputs: Vec<DurationInput> = vec![
            3600.into(), 3661.5.into(), 0.into(), 0.0.into(),
            "3600".into(), "3661.5".into(), "0".into(),
            "01:30".into(), "01:30:45".into(), "1:5".into(), "1:5:30".into(),
            "00:00".into(), "00:00:00".into(), "25:30:45".into(),
            "2h".into(), "30m".into(), "45s".into(), "0h".into(), "0m".into(), "0s".into(),
            "1h 30m".into(), "1h 30m 45s".into(), "1H 30M 45S".into(),
            "1h  30m  45s".into(), "1h30m45s".into(), "1.5h".into(), "45.5s".into(),
            "2d".into(), "0d".into(), "1d 5h".into(), "1D 5H".into(), "1.5d".into(),
            "1d 2h 30m 45s".into(), "1d 10:30:45".into(), "2d 1h 30m".into(),
            "PT1H30M".into(), "P1DT2H".into(), "P2W".into(), "P1W1D".into(), "P2WT1H".into(),
            ".5".into(), "5.".into(), "+.5".into(), ".5h".into(), "5.m".into(), "PT.5H".into(),
        ];
        for input in &inputs {
            assert!(valid(input), "expected valid: {}", input);
            assert!(parse(input).is_ok(), "expected parse: {}", input);
        }
    }

    #[test]
    fn test_invalid_corpus() {
        let inputs: Vec<DurationInput> = vec![
            (-3600).into(), (-3661.5).into(), "-3600".into(),
            "".into(), "   ".into(), "invalid".into(), "xyz123".into(),
            "30:".into(), "aa:bb".into(), ":30".into(), "1:2:3:4".into(),
            "30x".into(), "h".into(), "hms".into(),
            "null".into(), "true".into(), "P".into(), "PT".into(),
            f64::NAN.into(), f64::INFINITY.into(), "1e3".into(),
            ".".into(), ".h".into(), "1..5h".into(), "PT.H".into(),
        ];
        for input in &inputs {
            assert!(!valid(input), "expected invalid: {}", input);
            assert!(parse(input).is_err(), "expected parse failure: {}", input);
        }
    }

    #[test]
    fn test_bare_decimal_point() {
        assert_eq!(tuple(".5", 24), (0, 0, 0, 0.5));
        assert_eq!(tuple("5.", 24), (0, 0, 0, 5.0));
        assert_eq!(tuple(".5h", 24), (0, 0, 30, 0.0));
        assert_eq!(tuple("PT.5H", 24), (0, 0, 30, 0.0));
        assert_eq!(tuple("1d .5m", 24), (1, 0, 0, 30.0));
    }

    #[test]
    fn test_error_variants() {
        assert!(matches!(parse(-3600), Err(DurationError::Negative(_))));
        assert!(matches!(parse("-3600"), Err(DurationError::Negative(_))));
        assert!(matches!(parse("30x"), Err(DurationError::Unrecognized(_))));
        assert!(matches!(parse(f64::NAN), Err(DurationError::NotFinite(_))));

        let config = DurationConfig::new().with_hours_per_day(0);
        assert!(matches!(parse_with("1h", &config), Err(DurationError::InvalidHoursPerDay(0))));
        assert!(!valid_with("1h", &config));
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert!(parse(DurationInput::Empty).unwrap().is_zero());
        assert!(valid(None::<&str>));
    }

    #[test]
    fn test_pattern_without_seconds_drops_seconds() {
        let config = DurationConfig::new().with_pattern("hh:mm");
        let p = parse_with("01:01:45", &config).unwrap();
        assert_eq!((p.hours, p.minutes, p.nanos), (1, 1, 0));
    }
}
