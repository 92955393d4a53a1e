//! Numeric constraint validator.

use crate::foundation::{Outcome, Validate, ValidationError};
use crate::options::Config;
use crate::value::Value;

// ============================================================================
// NUMBER VALIDATOR
// ============================================================================

/// Validates numeric-ness and up to five relational constraints.
///
/// Configured constraints are evaluated in a fixed order — `is`, `equal_to`,
/// `greater_than`, `greater_or_equal_than`, `less_than`,
/// `less_or_equal_than` — and evaluation stops at the first failure.
/// Unconfigured constraints are skipped.
///
/// Each comparison constraint stands on its own: a non-numeric value fails
/// `greater_than` with "must be greater than ..." rather than a generic
/// not-a-number message, whether or not `is` was configured. This mirrors
/// the observed behavior of the constraint set this validator implements;
/// configure `is: true` first if the generic message is wanted.
///
/// Comparisons are non-strict across the numeric categories: `1` and `1.0`
/// are equal.
///
/// # Examples
///
/// ```
/// use vouch::prelude::*;
///
/// let v = number().is(true).greater_than(0.0).less_or_equal_than(3.14);
/// assert!(v.validate(&Value::Float(3.14)).is_ok());
///
/// let err = v.validate(&Value::Integer(0)).unwrap_err();
/// assert_eq!(err.message, "must be greater than 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Number {
    is: Option<bool>,
    equal_to: Option<f64>,
    greater_than: Option<f64>,
    greater_or_equal_than: Option<f64>,
    less_than: Option<f64>,
    less_or_equal_than: Option<f64>,
}

impl Number {
    /// Creates a validator with no constraints configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the value's numeric-ness to equal `expected`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is(mut self, expected: bool) -> Self {
        self.is = Some(expected);
        self
    }

    /// Requires the value to equal `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn equal_to(mut self, bound: f64) -> Self {
        self.equal_to = Some(bound);
        self
    }

    /// Requires the value to be strictly greater than `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than(mut self, bound: f64) -> Self {
        self.greater_than = Some(bound);
        self
    }

    /// Requires the value to be greater than or equal to `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_or_equal_than(mut self, bound: f64) -> Self {
        self.greater_or_equal_than = Some(bound);
        self
    }

    /// Requires the value to be strictly less than `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than(mut self, bound: f64) -> Self {
        self.less_than = Some(bound);
        self
    }

    /// Requires the value to be less than or equal to `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_or_equal_than(mut self, bound: f64) -> Self {
        self.less_or_equal_than = Some(bound);
        self
    }

    /// Builds a failure whose context carries the value and all six
    /// constraint arguments, absent ones rendered empty.
    fn fail(&self, input: &Value, code: &'static str, message: String) -> ValidationError {
        fn render<T: std::fmt::Display>(argument: Option<T>) -> String {
            argument.map(|a| a.to_string()).unwrap_or_default()
        }

        ValidationError::new(code, message)
            .with_param("value", input.to_string())
            .with_param("is", render(self.is))
            .with_param("equal_to", render(self.equal_to))
            .with_param("greater_than", render(self.greater_than))
            .with_param("greater_or_equal_than", render(self.greater_or_equal_than))
            .with_param("less_than", render(self.less_than))
            .with_param("less_or_equal_than", render(self.less_or_equal_than))
    }
}

impl Validate for Number {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if let Some(expected) = self.is {
            if input.is_number() != expected {
                let (code, message) = if expected {
                    ("number", "must be a number")
                } else {
                    ("not_number", "must not be a number")
                };
                return Err(self.fail(input, code, message.to_owned()));
            }
        }

        // Non-numeric values fail every configured comparison below.
        let actual = input.as_number();

        if let Some(bound) = self.equal_to {
            if actual != Some(bound) {
                return Err(self.fail(input, "equal_to", format!("must be equal to {bound}")));
            }
        }
        if let Some(bound) = self.greater_than {
            if !actual.is_some_and(|n| n > bound) {
                return Err(self.fail(
                    input,
                    "greater_than",
                    format!("must be greater than {bound}"),
                ));
            }
        }
        if let Some(bound) = self.greater_or_equal_than {
            if !actual.is_some_and(|n| n >= bound) {
                return Err(self.fail(
                    input,
                    "greater_or_equal_than",
                    format!("must be greater or equal than {bound}"),
                ));
            }
        }
        if let Some(bound) = self.less_than {
            if !actual.is_some_and(|n| n < bound) {
                return Err(self.fail(input, "less_than", format!("must be less than {bound}")));
            }
        }
        if let Some(bound) = self.less_or_equal_than {
            if !actual.is_some_and(|n| n <= bound) {
                return Err(self.fail(
                    input,
                    "less_or_equal_than",
                    format!("must be less or equal than {bound}"),
                ));
            }
        }

        Ok(())
    }
}

/// Creates a [`Number`] validator with no constraints configured.
#[must_use]
pub fn number() -> Number {
    Number::new()
}

// ============================================================================
// HOST ENTRY POINT
// ============================================================================

/// Validates a value against a declarative numeric configuration.
///
/// Accepts canonical entries naming any subset of the six constraints, or a
/// bare boolean as shorthand for `{is: <boolean>}`. A `nil` argument means
/// the constraint is absent. Total over its input domain.
///
/// # Examples
///
/// ```
/// use vouch::options::Config;
/// use vouch::validators::number;
/// use vouch::value::Value;
///
/// // Shorthand: `true` expands to `{is: true}`.
/// assert!(number::validate(&Value::Integer(7), &Config::from(true)).is_ok());
/// assert!(number::validate(&Value::String("7".into()), &Config::from(true)).is_err());
/// ```
pub fn validate(value: &Value, config: &Config) -> Outcome {
    let options = normalize(config).map_err(|e| e.with_param("value", value.to_string()))?;
    options.validate(value)
}

/// Expands shorthand and resolves constraint arguments.
fn normalize(config: &Config) -> Result<Number, ValidationError> {
    match config {
        Config::Shorthand(Value::Boolean(expected)) => Ok(Number::new().is(*expected)),
        Config::Shorthand(_) => Err(invalid()),
        Config::Entries(entries) => {
            let mut options = Number::new();
            for (name, argument) in entries {
                if argument.is_nil() {
                    continue;
                }
                options = match (name.as_str(), argument) {
                    ("is", Value::Boolean(expected)) => options.is(*expected),
                    ("equal_to", arg) => options.equal_to(number_arg(arg)?),
                    ("greater_than", arg) => options.greater_than(number_arg(arg)?),
                    ("greater_or_equal_than", arg) => {
                        options.greater_or_equal_than(number_arg(arg)?)
                    }
                    ("less_than", arg) => options.less_than(number_arg(arg)?),
                    ("less_or_equal_than", arg) => options.less_or_equal_than(number_arg(arg)?),
                    _ => return Err(invalid()),
                };
            }
            Ok(options)
        }
    }
}

fn number_arg(argument: &Value) -> Result<f64, ValidationError> {
    argument.as_number().ok_or_else(invalid)
}

fn invalid() -> ValidationError {
    ValidationError::invalid_options("must provide valid number options")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true() {
        let v = number().is(true);
        assert!(v.validate(&Value::Integer(0)).is_ok());
        assert!(v.validate(&Value::Float(0.5)).is_ok());

        let err = v.validate(&Value::String("0".into())).unwrap_err();
        assert_eq!(err.code, "number");
        assert_eq!(err.message, "must be a number");
    }

    #[test]
    fn test_is_false() {
        let v = number().is(false);
        assert!(v.validate(&Value::String("0".into())).is_ok());

        let err = v.validate(&Value::Integer(0)).unwrap_err();
        assert_eq!(err.code, "not_number");
        assert_eq!(err.message, "must not be a number");
    }

    #[test]
    fn test_equal_to_is_non_strict_across_categories() {
        let v = number().equal_to(1.0);
        assert!(v.validate(&Value::Integer(1)).is_ok());
        assert!(v.validate(&Value::Float(1.0)).is_ok());

        let err = v.validate(&Value::Integer(2)).unwrap_err();
        assert_eq!(err.message, "must be equal to 1");
    }

    #[test]
    fn test_fixed_evaluation_order() {
        // Fails at greater_than, before less_or_equal_than is considered.
        let v = number().is(true).greater_than(0.0).less_or_equal_than(3.14);
        let err = v.validate(&Value::Integer(0)).unwrap_err();
        assert_eq!(err.code, "greater_than");
        assert_eq!(err.message, "must be greater than 0");
    }

    #[test]
    fn test_is_short_circuits_comparisons() {
        let v = number().is(true).greater_than(0.0);
        let err = v.validate(&Value::String("x".into())).unwrap_err();
        assert_eq!(err.message, "must be a number");
    }

    #[test]
    fn test_comparison_fails_with_own_message_on_non_numeric() {
        let v = number().greater_than(0.0);
        let err = v.validate(&Value::String("x".into())).unwrap_err();
        assert_eq!(err.message, "must be greater than 0");
    }

    #[test]
    fn test_bounds() {
        assert!(number().greater_or_equal_than(2.0).validate(&Value::Integer(2)).is_ok());
        assert!(number().greater_or_equal_than(2.0).validate(&Value::Integer(1)).is_err());
        assert!(number().less_than(2.0).validate(&Value::Integer(1)).is_ok());
        assert!(number().less_than(2.0).validate(&Value::Integer(2)).is_err());
        assert!(number().less_or_equal_than(2.0).validate(&Value::Integer(2)).is_ok());
        assert!(number().less_or_equal_than(2.0).validate(&Value::Integer(3)).is_err());
    }

    #[test]
    fn test_context_carries_all_arguments() {
        let v = number().is(true).greater_than(0.0).less_or_equal_than(3.14);
        let err = v.validate(&Value::Integer(0)).unwrap_err();
        assert_eq!(err.param("value"), Some("0"));
        assert_eq!(err.param("is"), Some("true"));
        assert_eq!(err.param("greater_than"), Some("0"));
        assert_eq!(err.param("less_or_equal_than"), Some("3.14"));
        // Absent constraints are present but empty.
        assert_eq!(err.param("equal_to"), Some(""));
        assert_eq!(err.param("less_than"), Some(""));
    }

    #[test]
    fn test_no_constraints_accepts_anything() {
        assert!(number().validate(&Value::Nil).is_ok());
        assert!(number().validate(&Value::String("x".into())).is_ok());
    }

    #[test]
    fn test_shorthand_matches_canonical() {
        for value in [Value::Integer(1), Value::String("x".into())] {
            let canonical = Config::entries([("is", Value::Boolean(true))]);
            assert_eq!(
                validate(&value, &Config::from(true)),
                validate(&value, &canonical)
            );
        }
    }

    #[test]
    fn test_nil_argument_means_absent() {
        let config = Config::entries([
            ("is", Value::Boolean(true)),
            ("greater_than", Value::Nil),
        ]);
        assert!(validate(&Value::Integer(-5), &config).is_ok());
    }

    #[test]
    fn test_integer_and_float_arguments_accepted() {
        let config = Config::entries([
            ("greater_than", Value::Integer(0)),
            ("less_or_equal_than", Value::Float(3.14)),
        ]);
        assert!(validate(&Value::Integer(2), &config).is_ok());
        let err = validate(&Value::Integer(4), &config).unwrap_err();
        assert_eq!(err.message, "must be less or equal than 3.14");
    }

    #[test]
    fn test_unknown_constraint_is_a_config_error() {
        let config = Config::entries([("at_least", Value::Integer(1))]);
        let err = validate(&Value::Integer(1), &config).unwrap_err();
        assert_eq!(err.code, "invalid_options");
        assert_eq!(err.message, "must provide valid number options");
    }

    #[test]
    fn test_non_boolean_shorthand_is_a_config_error() {
        let err = validate(&Value::Integer(1), &Config::from("yes")).unwrap_err();
        assert_eq!(err.code, "invalid_options");
    }

    #[test]
    fn test_non_numeric_comparison_argument_is_a_config_error() {
        let config = Config::entries([("greater_than", Value::String("0".into()))]);
        assert!(validate(&Value::Integer(1), &config).is_err());
    }
}
