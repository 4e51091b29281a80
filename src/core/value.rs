//! Typed values for parameter binding and row extraction
//!
//! This module defines the scalar kinds the access layer can bind into a
//! statement and read back out of a result row. Null is a first-class
//! alternative, distinct from omitting a bind call entirely.

use serde::{Deserialize, Serialize};

/// A typed scalar value as stored by the engine
///
/// The four non-null kinds mirror the engine's storage classes that this
/// layer binds bit-for-bit: 32-bit signed integer, 64-bit signed integer,
/// IEEE-754 double, and UTF-8 text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null value
    Null,
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit floating point
    Double(f64),
    /// UTF-8 text
    Text(String),
}

impl Value {
    /// Coerce to an `i32` the way the engine's integer column accessor does
    ///
    /// Integers truncate to their low 32 bits, reals truncate toward zero,
    /// text converts via its leading numeric prefix, and null yields 0.
    pub fn as_int(&self) -> i32 {
        self.as_int64() as i32
    }

    /// Coerce to an `i64` the way the engine's 64-bit column accessor does
    pub fn as_int64(&self) -> i64 {
        match self {
            Value::Null => 0,
            Value::Int(v) => *v as i64,
            Value::Int64(v) => *v,
            Value::Double(v) => *v as i64,
            Value::Text(s) => integer_from_text(s),
        }
    }

    /// Coerce to an `f64` the way the engine's double column accessor does
    pub fn as_double(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Int(v) => *v as f64,
            Value::Int64(v) => *v as f64,
            Value::Double(v) => *v,
            Value::Text(s) => double_from_text(s),
        }
    }

    /// Coerce to text the way the engine's text column accessor does
    ///
    /// Numerics render in their canonical decimal form; null yields the
    /// empty string.
    pub fn as_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Int(v) => v.to_string(),
            Value::Int64(v) => v.to_string(),
            Value::Double(v) => v.to_string(),
            Value::Text(s) => s.clone(),
        }
    }

    /// Get the value as a string slice without conversion (text values only)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::Int64(_) => "int64",
            Value::Double(_) => "double",
            Value::Text(_) => "text",
        }
    }
}

/// Convert text to an integer using the engine's leading-prefix rule
///
/// Leading whitespace is skipped, an optional sign and the longest run of
/// digits are consumed, and anything after that is ignored. Out-of-range
/// prefixes clamp to the representable extreme, matching the engine.
fn integer_from_text(s: &str) -> i64 {
    let t = s.trim_start();
    let (negative, digits) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return 0;
    }
    match digits[..end].parse::<i64>() {
        Ok(v) => {
            if negative {
                -v
            } else {
                v
            }
        }
        Err(_) => {
            if negative {
                i64::MIN
            } else {
                i64::MAX
            }
        }
    }
}

/// Convert text to a double using the longest parseable numeric prefix
fn double_from_text(s: &str) -> f64 {
    let t = s.trim_start();
    for end in (1..=t.len()).rev() {
        if !t.is_char_boundary(end) {
            continue;
        }
        if let Ok(v) = t[..end].parse::<f64>() {
            return v;
        }
    }
    0.0
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_coercions() {
        let val = Value::Int(42);
        assert_eq!(val.as_int(), 42);
        assert_eq!(val.as_int64(), 42);
        assert_eq!(val.as_text(), "42");

        let val = Value::Text("123".to_string());
        assert_eq!(val.as_int(), 123);
        assert_eq!(val.as_double(), 123.0);

        let val = Value::Double(42.9);
        assert_eq!(val.as_int64(), 42);
    }

    #[test]
    fn test_numeric_from_text_prefix() {
        assert_eq!(Value::Text("  42abc".to_string()).as_int64(), 42);
        assert_eq!(Value::Text("-7xyz".to_string()).as_int64(), -7);
        assert_eq!(Value::Text("abc".to_string()).as_int64(), 0);
        assert_eq!(Value::Text("4.5e2 rest".to_string()).as_double(), 450.0);
        assert_eq!(Value::Text("".to_string()).as_double(), 0.0);
        assert_eq!(
            Value::Text("99999999999999999999".to_string()).as_int64(),
            i64::MAX
        );
    }

    #[test]
    fn test_null_coercions() {
        let val = Value::Null;
        assert!(val.is_null());
        assert_eq!(val.as_int(), 0);
        assert_eq!(val.as_int64(), 0);
        assert_eq!(val.as_double(), 0.0);
        assert_eq!(val.as_text(), "");
        assert_eq!(val.as_str(), None);
    }

    #[test]
    fn test_value_from_types() {
        let val: Value = 42.into();
        assert_eq!(val, Value::Int(42));

        let val: Value = 42i64.into();
        assert_eq!(val, Value::Int64(42));

        let val: Value = "hello".into();
        assert_eq!(val, Value::Text("hello".to_string()));

        let val: Value = Some(1.5).into();
        assert_eq!(val, Value::Double(1.5));

        let val: Value = Option::<i32>::None.into();
        assert_eq!(val, Value::Null);
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::Int64(1).type_name(), "int64");
        assert_eq!(Value::Double(1.0).type_name(), "double");
        assert_eq!(Value::Text("t".to_string()).type_name(), "text");
    }
}
