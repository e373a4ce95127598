//! Duration formatting: token patterns, humanized text, ISO 8601
//!
//! Pattern tokens (case matters):
//! - d / dd: days, unpadded / zero-padded to 2
//! - h / hh: hours within the day
//! - H / HH: total hours, days flattened in (days × hours per day + hours)
//! - m / mm: minutes
//! - s / ss: whole seconds, then the fraction if there is one ("30.5")
//! - S / SS: whole seconds only
//!
//! Anything else is copied through. Runs longer than two letters split
//! greedily: "ddd" is "dd" followed by "d".

use crate::normalize::{Parts, NANOS_PER_SECOND};

/// One element of a parsed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Days { padded: bool },
    Hours { padded: bool, total: bool },
    Minutes { padded: bool },
    Seconds { padded: bool, whole: bool },
    Literal(String),
}

impl Token {
    fn from_letter(c: char, padded: bool) -> Option<Self> {
        match c {
            'd' => Some(Self::Days { padded }),
            'h' => Some(Self::Hours { padded, total: false }),
            'H' => Some(Self::Hours { padded, total: true }),
            'm' => Some(Self::Minutes { padded }),
            's' => Some(Self::Seconds { padded, whole: false }),
            'S' => Some(Self::Seconds { padded, whole: true }),
            _ => None,
        }
    }
}

/// Split a pattern into tokens and literal runs
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        let padded = chars.peek() == Some(&c);
        match Token::from_letter(c, padded) {
            Some(token) => {
                if padded {
                    chars.next();
                }
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(token);
            }
            None => literal.push(c),
        }
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// Whether the pattern shows seconds at all
pub fn has_seconds_token(pattern: &str) -> bool {
    pattern.chars().any(|c| c == 's' || c == 'S')
}

/// Fractional digits of the seconds, with the leading dot ("" when whole)
fn fraction_suffix(parts: &Parts) -> String {
    let frac = parts.nanos % NANOS_PER_SECOND as u64;
    if frac == 0 {
        return String::new();
    }
    let digits = format!("{:09}", frac);
    format!(".{}", digits.trim_end_matches('0'))
}

/// Seconds as the shortest exact decimal: "4", "4.5", "1.8"
pub fn format_seconds(parts: &Parts) -> String {
    format!("{}{}", parts.whole_seconds(), fraction_suffix(parts))
}

fn pad(value: impl std::fmt::Display, padded: bool) -> String {
    if padded {
        format!("{:0>2}", value.to_string())
    } else {
        value.to_string()
    }
}

/// Render parts with a token pattern
pub fn format_pattern(parts: &Parts, hours_per_day: u32, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);

    for token in tokenize(pattern) {
        match token {
            Token::Days { padded } => out.push_str(&pad(parts.days, padded)),
            Token::Hours { padded, total: false } => out.push_str(&pad(parts.hours, padded)),
            Token::Hours { padded, total: true } => {
                out.push_str(&pad(parts.total_hours(hours_per_day), padded))
            }
            Token::Minutes { padded } => out.push_str(&pad(parts.minutes, padded)),
            Token::Seconds { padded, whole } => {
                out.push_str(&pad(parts.whole_seconds(), padded));
                if !whole {
                    out.push_str(&fraction_suffix(parts));
                }
            }
            Token::Literal(text) => out.push_str(&text),
        }
    }
    out
}

/// Compact form listing non-zero units: "1d 2h 3m 4.5s", or "0s"
pub fn humanize(parts: &Parts) -> String {
    let mut segments = Vec::with_capacity(4);
    if parts.days > 0 {
        segments.push(format!("{}d", parts.days));
    }
    if parts.hours > 0 {
        segments.push(format!("{}h", parts.hours));
    }
    if parts.minutes > 0 {
        segments.push(format!("{}m", parts.minutes));
    }
    if parts.nanos > 0 {
        segments.push(format!("{}s", format_seconds(parts)));
    }

    if segments.is_empty() {
        return "0s".to_string();
    }
    segments.join(" ")
}

/// ISO 8601 duration: "P1DT2H3M4S", "P14D", "PT0S"
pub fn to_iso8601(parts: &Parts) -> String {
    if parts.is_zero() {
        return "PT0S".to_string();
    }

    let mut out = String::from("P");
    if parts.days > 0 {
        out.push_str(&format!("{}D", parts.days));
    }
    if parts.hours > 0 || parts.minutes > 0 || parts.nanos > 0 {
        out.push('T');
        if parts.hours > 0 {
            out.push_str(&format!("{}H", parts.hours));
        }
        if parts.minutes > 0 {
            out.push_str(&format!("{}M", parts.minutes));
        }
        if parts.nanos > 0 {
            out.push_str(&format!("{}S", format_seconds(parts)));
        }
    }
    out
}
