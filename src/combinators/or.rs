//! OR combinator.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass; evaluation short-circuits on the first
/// success. When both fail, the second validator's failure is returned.
///
/// # Examples
///
/// ```
/// use vouch::prelude::*;
///
/// let v = type_of(Kind::Integer).or(type_of(Kind::Float));
/// assert!(v.validate(&Value::Integer(1)).is_ok());
/// assert!(v.validate(&Value::Float(1.0)).is_ok());
/// assert!(v.validate(&Value::Boolean(true)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the two validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(_) => self.right.validate(input),
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::number;
    use crate::value::Value;

    #[test]
    fn test_left_pass_short_circuits() {
        let v = number().less_than(0.0).or(number().greater_than(10.0));
        assert!(v.validate(&Value::Integer(-1)).is_ok());
        assert!(v.validate(&Value::Integer(11)).is_ok());
    }

    #[test]
    fn test_both_fail_reports_right() {
        let v = or(number().less_than(0.0), number().greater_than(10.0));
        let err = v.validate(&Value::Integer(5)).unwrap_err();
        assert_eq!(err.message, "must be greater than 10");
    }
}
