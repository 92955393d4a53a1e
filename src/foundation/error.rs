//! Validation failure type.
//!
//! A failure carries a machine-readable code, a standalone human-readable
//! reason, and a context of rendered field values for hosts that template
//! their own messages. String fields use `Cow<'static, str>` so the common
//! case of static codes and messages does not allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Context entries attached to a failure (typically 2-7 of them).
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 4]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// `message` is the reason: a complete message usable verbatim when the host
/// configures no template. `params` is the context: every field a message
/// template might reference, with absent constraint arguments rendered as
/// empty strings.
///
/// # Examples
///
/// ```
/// use vouch::foundation::ValidationError;
///
/// let error = ValidationError::new("equal_to", "must be equal to 3")
///     .with_param("value", "5")
///     .with_param("equal_to", "3");
/// assert_eq!(error.param("equal_to"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable code for programmatic handling, e.g. `"equal_to"`, `"uuid"`.
    pub code: Cow<'static, str>,

    /// The failure reason, rendered as a standalone message.
    pub message: Cow<'static, str>,

    /// Optional field name, set by the host framework when it dispatches
    /// per-field validations.
    pub field: Option<Cow<'static, str>>,

    /// Ordered context entries for message templating.
    pub params: Params,
}

impl ValidationError {
    /// Creates a failure with a code and reason.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Params::new(),
        }
    }

    /// Creates a configuration-error failure.
    ///
    /// Malformed options are reported through the same channel as data
    /// failures so the host's aggregation path stays uniform.
    pub fn invalid_options(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_options", message)
    }

    /// Sets the field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Appends a context entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a context entry by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the failure to a JSON structure for hosts that serialize
    /// aggregated results.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
