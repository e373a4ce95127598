//! Raw duration input: absent, a number of seconds, or text

use std::fmt;

/// Anything a [`crate::Duration`] can be built from
///
/// Integers and floats are seconds. Text goes through the grammar in
/// [`crate::parse`]. `None` (or [`DurationInput::Empty`]) is the zero duration.
#[derive(Debug, Clone, PartialEq)]
pub enum DurationInput {
    Empty,
    Number(f64),
    Text(String),
}

impl fmt::Display for DurationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "<empty>"),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! number_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DurationInput {
                fn from(value: $t) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

number_input!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for DurationInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DurationInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for DurationInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<&DurationInput> for DurationInput {
    fn from(value: &DurationInput) -> Self {
        value.clone()
    }
}

impl<T: Into<DurationInput>> From<Option<T>> for DurationInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }
}
