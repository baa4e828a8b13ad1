//! Typed values decoded from fixed-width `RFC_READ_TABLE` lines.

use std::fmt;

use crate::constant::FieldType;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `N` field parsed as a base-10 integer
    Int(i64),
    /// `P` field parsed as a floating-point number
    Float(f64),
    /// Any other field, untrimmed
    Text(String),
    /// A numeric field whose characters are not a number
    ///
    /// Malformed numerics never fail a decode; they degrade to this marker.
    /// This includes packed values rendered with a trailing sign such as
    /// `"  123.45-"`, which the float parser does not accept.
    NaN,
}

impl Value {
    /// Decode the characters of one field according to its type tag
    pub fn decode(field_type: FieldType, raw: &str) -> Self {
        match field_type {
            FieldType::Numeric => parse_int(raw),
            FieldType::Packed => parse_float(raw),
            FieldType::Text => Value::Text(raw.to_string()),
        }
    }

    pub fn is_nan(&self) -> bool {
        match self {
            Value::NaN => true,
            Value::Float(f) => f.is_nan(),
            Value::Int(_) | Value::Text(_) => false,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Integers are widened, so both `N` and `P` fields can be read as floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(_) | Value::NaN => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
            Value::NaN => f.write_str("NaN"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Numeric fields are blank-padded on some systems, so whitespace is trimmed first.
fn parse_int(raw: &str) -> Value {
    match raw.trim().parse::<i64>() {
        Ok(v) => Value::Int(v),
        Err(_) => {
            tracing::trace!(raw, "numeric field is not an integer");
            Value::NaN
        }
    }
}

/// Parsed with Rust's float grammar after trimming. SAP's trailing-sign form
/// (`"123.45-"`) is not part of it and degrades to [`Value::NaN`].
fn parse_float(raw: &str) -> Value {
    match raw.trim().parse::<f64>() {
        Ok(v) => Value::Float(v),
        Err(_) => {
            tracing::trace!(raw, "packed field is not a number");
            Value::NaN
        }
    }
}

/// Characters `[start, end)` of `line`, counted in chars.
///
/// Ranges past the end of the line are clamped, so a short line yields a
/// shorter (possibly empty) slice.
pub fn char_range(line: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    if line.is_ascii() {
        let len = line.len();
        return line.get(start.min(len)..end.min(len)).unwrap_or_default();
    }

    let mut indices = line.char_indices().map(|(i, _)| i).chain([line.len()]);
    let Some(from) = indices.nth(start) else {
        return "";
    };
    let to = indices
        .nth(end.saturating_sub(start).saturating_sub(1))
        .unwrap_or(line.len());
    line.get(from..to).unwrap_or_default()
}
