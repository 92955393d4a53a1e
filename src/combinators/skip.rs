//! Absent/blank gate.
//!
//! Host frameworks commonly declare fields as optional: a missing or empty
//! value should pass without running the field's validators. That gate is a
//! cross-cutting concern, so it lives here as a single reusable wrapper
//! instead of being duplicated inside each validator.

use crate::foundation::{Validate, ValidationError};
use crate::value::Value;

/// Skips validation for absent or blank values.
///
/// Both gates start disabled; a plain `Skip` delegates every value to the
/// inner validator.
///
/// - [`allow_nil`](Skip::allow_nil): `Value::Nil` short-circuits to valid
/// - [`allow_blank`](Skip::allow_blank): empty strings, byte sequences, and
///   collections short-circuit to valid
///
/// # Examples
///
/// ```
/// use vouch::prelude::*;
///
/// let v = uuid(UuidFormat::Any).skippable().allow_nil().allow_blank();
///
/// assert!(v.validate(&Value::Nil).is_ok());
/// assert!(v.validate(&Value::String(String::new())).is_ok());
/// assert!(v.validate(&Value::String("not-a-uuid".into())).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skip<V> {
    validator: V,
    allow_nil: bool,
    allow_blank: bool,
}

impl<V> Skip<V> {
    /// Wraps a validator with both gates disabled.
    pub fn new(validator: V) -> Self {
        Self {
            validator,
            allow_nil: false,
            allow_blank: false,
        }
    }

    /// Passes the absence marker through as valid.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_nil(mut self) -> Self {
        self.allow_nil = true;
        self
    }

    /// Passes blank values through as valid.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_blank(mut self) -> Self {
        self.allow_blank = true;
        self
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.validator
    }
}

impl<V> Validate for Skip<V>
where
    V: Validate<Input = Value>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if self.allow_nil && input.is_nil() {
            return Ok(());
        }
        if self.allow_blank && input.is_blank() {
            return Ok(());
        }
        self.validator.validate(input)
    }
}

/// Wraps a validator in the absent/blank gate, both gates disabled.
pub fn skippable<V>(validator: V) -> Skip<V>
where
    V: Validate<Input = Value>,
{
    Skip::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::number;

    #[test]
    fn test_disabled_gate_delegates() {
        let v = number().is(true).skippable();
        assert!(v.validate(&Value::Nil).is_err());
    }

    #[test]
    fn test_allow_nil() {
        let v = number().is(true).skippable().allow_nil();
        assert!(v.validate(&Value::Nil).is_ok());
        assert!(v.validate(&Value::String(String::new())).is_err());
    }

    #[test]
    fn test_allow_blank() {
        let v = number().is(true).skippable().allow_blank();
        assert!(v.validate(&Value::String(String::new())).is_ok());
        assert!(v.validate(&Value::List(vec![])).is_ok());
        assert!(v.validate(&Value::Nil).is_err());
    }

    #[test]
    fn test_present_values_still_validated() {
        let v = number().is(true).skippable().allow_nil().allow_blank();
        assert!(v.validate(&Value::Integer(1)).is_ok());
        assert!(v.validate(&Value::String("x".into())).is_err());
    }
}
