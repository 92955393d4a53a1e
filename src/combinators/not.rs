//! NOT combinator.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator.
///
/// Succeeds when the inner validator fails, and fails when it succeeds.
///
/// # Examples
///
/// ```
/// use vouch::prelude::*;
///
/// let v = type_of(Kind::Atom).not();
/// assert!(v.validate(&Value::Integer(1)).is_ok());
/// assert!(v.validate(&Value::Symbol("ok".into())).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not",
                "must not satisfy the negated condition",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V: Validate>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{number, type_of};
    use crate::value::{Kind, Value};

    #[test]
    fn test_inverts_success() {
        let v = not(type_of(Kind::Integer));
        assert!(v.validate(&Value::Integer(1)).is_err());
        assert!(v.validate(&Value::Float(1.0)).is_ok());
    }

    #[test]
    fn test_double_negation() {
        let v = number().greater_than(0.0).not().not();
        assert!(v.validate(&Value::Integer(1)).is_ok());
        assert!(v.validate(&Value::Integer(-1)).is_err());
    }
}
