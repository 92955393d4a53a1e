//! AND combinator.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass; the failure of the first failing validator is
/// returned and the second is not evaluated.
///
/// # Examples
///
/// ```
/// use vouch::prelude::*;
///
/// let v = type_of(Kind::Integer).and(number().greater_than(0.0));
/// assert!(v.validate(&Value::Integer(3)).is_ok());
/// assert!(v.validate(&Value::Integer(-3)).is_err());
/// assert!(v.validate(&Value::Float(3.0)).is_err()); // wrong category
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the two validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::number;
    use crate::value::Value;

    #[test]
    fn test_both_pass() {
        let v = and(number().greater_than(0.0), number().less_than(10.0));
        assert!(v.validate(&Value::Integer(5)).is_ok());
    }

    #[test]
    fn test_left_failure_wins() {
        let v = number().greater_than(0.0).and(number().less_than(10.0));
        let err = v.validate(&Value::Integer(-5)).unwrap_err();
        assert_eq!(err.message, "must be greater than 0");
    }

    #[test]
    fn test_right_failure() {
        let v = number().greater_than(0.0).and(number().less_than(10.0));
        let err = v.validate(&Value::Integer(50)).unwrap_err();
        assert_eq!(err.message, "must be less than 10");
    }
}
