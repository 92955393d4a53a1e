//! Runtime category validator.

use crate::foundation::{Outcome, Validate, ValidationError};
use crate::options::Config;
use crate::value::{Kind, Value};

// ============================================================================
// TYPE VALIDATOR
// ============================================================================

/// Validates that a value belongs to a runtime category.
///
/// Membership follows the [`Value`] rules: booleans also satisfy
/// [`Kind::Atom`], and strings and raw byte sequences satisfy both
/// [`Kind::String`] and [`Kind::Binary`].
///
/// # Examples
///
/// ```
/// use vouch::prelude::*;
///
/// let v = type_of(Kind::Atom);
/// assert!(v.validate(&Value::Symbol("ok".into())).is_ok());
/// assert!(v.validate(&Value::Boolean(true)).is_ok());
///
/// let err = v.validate(&Value::Integer(1)).unwrap_err();
/// assert_eq!(err.message, "must be of type atom");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeOf {
    kind: Kind,
}

impl TypeOf {
    /// Creates a validator for the given category.
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self { kind }
    }

    /// The category being tested.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl Validate for TypeOf {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if input.is_kind(self.kind) {
            Ok(())
        } else {
            Err(
                ValidationError::new("type", format!("must be of type {}", self.kind))
                    .with_param("value", input.to_string())
                    .with_param("is", self.kind.name()),
            )
        }
    }
}

/// Creates a [`TypeOf`] validator.
#[must_use]
pub fn type_of(kind: Kind) -> TypeOf {
    TypeOf::new(kind)
}

// ============================================================================
// HOST ENTRY POINT
// ============================================================================

/// Validates a value against a declarative type configuration.
///
/// Accepts the canonical form `{is: <category>}` or a bare category tag as
/// shorthand. Total over its input domain: malformed configuration comes
/// back as an `invalid_options` failure, never a panic.
///
/// # Examples
///
/// ```
/// use vouch::options::Config;
/// use vouch::validators::type_of;
/// use vouch::value::Value;
///
/// let value = Value::String("hello".into());
/// assert!(type_of::validate(&value, &Config::from("string")).is_ok());
/// assert!(type_of::validate(&value, &Config::from("binary")).is_ok());
/// assert!(type_of::validate(&value, &Config::from("list")).is_err());
/// ```
pub fn validate(value: &Value, config: &Config) -> Outcome {
    let kind = normalize(config).map_err(|e| e.with_param("value", value.to_string()))?;
    TypeOf::new(kind).validate(value)
}

/// Expands shorthand and resolves the category tag.
fn normalize(config: &Config) -> Result<Kind, ValidationError> {
    let tag = match config {
        Config::Shorthand(scalar) => scalar.as_tag(),
        Config::Entries(entries) => match entries.as_slice() {
            [(name, argument)] if name == "is" => argument.as_tag(),
            _ => None,
        },
    };
    tag.and_then(|tag| tag.parse().ok())
        .ok_or_else(|| ValidationError::invalid_options("must provide a valid type in options"))
}

// ============================================================================
// TESTS
// ============================================================================
