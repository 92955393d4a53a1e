//! Core validation traits.
//!
//! [`Validate`] is the single contract every validator implements; it is what
//! lets a host framework treat the built-in validators and any combinator
//! stack polymorphically. [`ValidateExt`] adds the fluent composition
//! surface and is blanket-implemented.

use crate::foundation::ValidationError;
use crate::value::Value;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract all validators implement.
///
/// Validation is a pure function over `&self` and a borrowed input: no shared
/// state, no I/O, and identical inputs always produce identical outcomes.
///
/// # Examples
///
/// ```
/// use vouch::foundation::{Validate, ValidationError};
/// use vouch::value::Value;
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         if input.is_blank() {
///             Err(ValidationError::new("non_empty", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonEmpty.validate(&Value::String("x".into())).is_ok());
/// assert!(NonEmpty.validate(&Value::String(String::new())).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input.
    ///
    /// Returns `Ok(())` on success, or the failure describing the first
    /// violated constraint.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Fluent composition methods, available on every validator.
///
/// # Examples
///
/// ```
/// use vouch::prelude::*;
///
/// let positive_number = number().is(true).greater_than(0.0);
/// let gated = positive_number.skippable().allow_nil();
///
/// assert!(gated.validate(&Value::Nil).is_ok()); // gate short-circuits
/// assert!(gated.validate(&Value::Integer(-1)).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND; short-circuits on the first
    /// failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR; short-circuits on the first
    /// success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Wraps the validator in the absent/blank gate.
    ///
    /// The gate does nothing until enabled via [`Skip::allow_nil`] or
    /// [`Skip::allow_blank`].
    fn skippable(self) -> Skip<Self>
    where
        Self: Validate<Input = Value>,
    {
        Skip::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;
pub use crate::combinators::skip::Skip;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = Value;

        fn validate(&self, _input: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validate_trait() {
        assert!(AlwaysValid.validate(&Value::Nil).is_ok());
    }

    #[test]
    fn test_ext_is_blanket_implemented() {
        let v = AlwaysValid.and(AlwaysValid).or(AlwaysValid);
        assert!(v.validate(&Value::Integer(1)).is_ok());
    }
}
