//! JSON shape of a Duration
//!
//! Serializes as
//! `{"seconds":6150,"values":{"days":0,"hours":1,"minutes":42,"seconds":30},"formatted":"01:42:30","humanized":"1h 42m 30s"}`.
//! Deserializes from a number of seconds or any parseable string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::normalize::{Parts, NANOS_PER_SECOND};
use crate::Duration;

/// Whole seconds print as integers, fractional ones as floats
fn serialize_seconds<S: Serializer>(parts: &&Parts, serializer: S) -> Result<S::Ok, S::Error> {
    if parts.has_fraction() {
        serializer.serialize_f64(parts.seconds())
    } else {
        serializer.serialize_u64(parts.whole_seconds())
    }
}

#[derive(Serialize)]
struct Values<'a> {
    days: u64,
    hours: u32,
    minutes: u32,
    #[serde(serialize_with = "serialize_seconds")]
    seconds: &'a Parts,
}

#[derive(Serialize)]
struct Record<'a> {
    seconds: u64,
    values: Values<'a>,
    formatted: String,
    humanized: String,
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let parts = self.parts();
        Record {
            seconds: u64::try_from(self.total_nanos() / NANOS_PER_SECOND).unwrap_or(u64::MAX),
            values: Values {
                days: parts.days,
                hours: parts.hours,
                minutes: parts.minutes,
                seconds: parts,
            },
            formatted: self.to_string(),
            humanized: self.humanize(),
        }
        .serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Seconds(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let result = match Repr::deserialize(deserializer)? {
            Repr::Seconds(n) => Duration::new(n),
            Repr::Text(s) => Duration::new(s),
        };
        result.map_err(serde::de::Error::custom)
    }
}

impl Duration {
    /// JSON text of the serialized form
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
