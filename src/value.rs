//! Dynamic values and their runtime categories.
//!
//! Validators judge values whose type is only known at runtime, so the input
//! side of the crate is the [`Value`] enum. [`Kind`] is the closed set of
//! category names a value can be tested against.
//!
//! Category membership is deliberately not one-to-one:
//!
//! - booleans are a specialization of atoms, so `true` satisfies both
//!   [`Kind::Boolean`] and [`Kind::Atom`]
//! - `Nil` is an atom-like marker and satisfies [`Kind::Atom`]
//! - strings and raw byte sequences share one underlying representation, so
//!   both satisfy [`Kind::String`] and [`Kind::Binary`]

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed datum supplied by the host framework.
///
/// Validators never mutate a `Value`; they only inspect it.
///
/// # Examples
///
/// ```
/// use vouch::value::{Kind, Value};
///
/// let v = Value::Boolean(true);
/// assert!(v.is_kind(Kind::Boolean));
/// assert!(v.is_kind(Kind::Atom)); // booleans are atoms too
/// assert!(!v.is_kind(Kind::Integer));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// The absence marker.
    Nil,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    /// An atom-like tag.
    Symbol(String),
    String(String),
    /// A raw byte sequence.
    Bytes(Vec<u8>),
    List(Vec<Value>),
    /// Ordered key/value entries.
    Map(Vec<(String, Value)>),
    Tuple(Vec<Value>),
}

impl Value {
    /// Returns true if the value belongs to the given category.
    #[must_use]
    pub fn is_kind(&self, kind: Kind) -> bool {
        matches!(
            (self, kind),
            (Value::Integer(_), Kind::Integer)
                | (Value::Float(_), Kind::Float)
                | (Value::Boolean(_), Kind::Boolean | Kind::Atom)
                | (Value::Symbol(_) | Value::Nil, Kind::Atom)
                | (Value::String(_) | Value::Bytes(_), Kind::String | Kind::Binary)
                | (Value::List(_), Kind::List)
                | (Value::Map(_), Kind::Map)
                | (Value::Tuple(_), Kind::Tuple)
        )
    }

    /// Returns true for the absence marker.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns true for an empty string, byte sequence, or collection.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::Bytes(bytes) => bytes.is_empty(),
            Value::List(items) | Value::Tuple(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }

    /// Returns true for integers and floats.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Returns the numeric value, if any, widened for non-strict comparison
    /// (`1` and `1.0` compare equal).
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the raw byte representation of a string or byte value.
    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s.as_bytes()),
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the textual tag carried by a symbol or string value.
    ///
    /// Used when a value stands in for an option keyword.
    #[must_use]
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Value::Symbol(tag) | Value::String(tag) => Some(tag),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Symbol(s) | Value::String(s) => write!(f, "{s}"),
            Value::Bytes(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            Value::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                write!(f, ")")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

// ============================================================================
// KIND
// ============================================================================

/// The closed set of runtime categories a value can be validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Float,
    Boolean,
    Atom,
    String,
    Binary,
    List,
    Map,
    Tuple,
}

impl Kind {
    /// All categories, in declaration order.
    pub const ALL: [Kind; 9] = [
        Kind::Integer,
        Kind::Float,
        Kind::Boolean,
        Kind::Atom,
        Kind::String,
        Kind::Binary,
        Kind::List,
        Kind::Map,
        Kind::Tuple,
    ];

    /// The lowercase name used in option tags and error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
            Kind::Atom => "atom",
            Kind::String => "string",
            Kind::Binary => "binary",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Tuple => "tuple",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type category: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownKind(s.to_owned()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_is_atom_and_boolean() {
        let v = Value::Boolean(true);
        assert!(v.is_kind(Kind::Boolean));
        assert!(v.is_kind(Kind::Atom));
        assert!(!v.is_kind(Kind::Integer));
    }

    #[test]
    fn test_nil_is_atom() {
        assert!(Value::Nil.is_kind(Kind::Atom));
        assert!(!Value::Nil.is_kind(Kind::Boolean));
    }

    #[test]
    fn test_string_and_bytes_share_representation() {
        let s = Value::String("abc".into());
        let b = Value::Bytes(vec![1, 2, 3]);
        for v in [&s, &b] {
            assert!(v.is_kind(Kind::String));
            assert!(v.is_kind(Kind::Binary));
        }
    }

    #[test]
    fn test_numeric_widening() {
        assert_eq!(Value::Integer(1).as_number(), Some(1.0));
        assert_eq!(Value::Float(1.0).as_number(), Some(1.0));
        assert_eq!(Value::String("1".into()).as_number(), None);
    }

    #[test]
    fn test_blankness() {
        assert!(Value::String(String::new()).is_blank());
        assert!(Value::List(vec![]).is_blank());
        assert!(Value::Map(vec![]).is_blank());
        assert!(!Value::Nil.is_blank());
        assert!(!Value::Integer(0).is_blank());
        assert!(!Value::String("x".into()).is_blank());
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(kind.name().parse::<Kind>(), Ok(kind));
        }
        assert!("number".parse::<Kind>().is_err());
    }

    #[test]
    fn test_display_renders_bare_scalars() {
        assert_eq!(Value::Integer(3).to_string(), "3");
        assert_eq!(Value::Float(3.14).to_string(), "3.14");
        assert_eq!(Value::String("x".into()).to_string(), "x");
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(
            Value::List(vec![Value::Integer(1), Value::Integer(2)]).to_string(),
            "[1, 2]"
        );
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value = serde_json::json!({
            "count": 3,
            "ratio": 0.5,
            "name": "x",
            "tags": [true, null],
        });
        let value = Value::from(json);
        let Value::Map(entries) = value else {
            panic!("expected map");
        };
        assert_eq!(entries[0], ("count".into(), Value::Integer(3)));
        assert_eq!(entries[1], ("name".into(), Value::String("x".into())));
        assert_eq!(entries[2], ("ratio".into(), Value::Float(0.5)));
        assert_eq!(
            entries[3],
            (
                "tags".into(),
                Value::List(vec![Value::Boolean(true), Value::Nil])
            )
        );
    }
}
