//! Fixed-layout identifier (UUID) validator.
//!
//! Matching is purely structural and byte-exact: a value either has the
//! fixed-length layout of a format or it does not. Hex digits are
//! `0-9a-fA-F`; case is not normalized and nothing is trimmed.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::foundation::{Outcome, Validate, ValidationError};
use crate::options::Config;
use crate::value::Value;

// ============================================================================
// FORMATS
// ============================================================================

/// The closed set of identifier formats.
///
/// `Default`, `Hex`, and `Urn` are concrete structural layouts; `Any` and
/// `NotAny` are meta-formats quantifying over the concrete three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UuidFormat {
    /// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (36 bytes).
    Default,
    /// 32 hex digits, no separators.
    Hex,
    /// `urn:uuid:` followed by a `Default` body.
    Urn,
    /// Matches if any concrete format matches.
    Any,
    /// Matches if no concrete format matches.
    NotAny,
}

/// Hyphen offsets of the canonical 8-4-4-4-12 layout.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

fn matches_canonical(raw: &[u8]) -> bool {
    raw.len() == 36
        && raw.iter().enumerate().all(|(i, byte)| {
            if HYPHENS.contains(&i) {
                *byte == b'-'
            } else {
                byte.is_ascii_hexdigit()
            }
        })
}

impl UuidFormat {
    /// The concrete formats, in the order the meta-formats try them.
    pub const CONCRETE: [UuidFormat; 3] = [UuidFormat::Default, UuidFormat::Hex, UuidFormat::Urn];

    /// The lowercase name used in option tags and error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            UuidFormat::Default => "default",
            UuidFormat::Hex => "hex",
            UuidFormat::Urn => "urn",
            UuidFormat::Any => "any",
            UuidFormat::NotAny => "not_any",
        }
    }

    /// Tests whether a raw byte sequence has this format's layout.
    ///
    /// For the meta-formats this reports whether any concrete format
    /// matches; `NotAny` inverts that at the validator level.
    #[must_use]
    pub fn matches(self, raw: &[u8]) -> bool {
        match self {
            UuidFormat::Default => matches_canonical(raw),
            UuidFormat::Hex => raw.len() == 32 && raw.iter().all(u8::is_ascii_hexdigit),
            UuidFormat::Urn => raw
                .strip_prefix(b"urn:uuid:")
                .is_some_and(matches_canonical),
            UuidFormat::Any | UuidFormat::NotAny => {
                Self::CONCRETE.iter().any(|format| format.matches(raw))
            }
        }
    }
}

impl fmt::Display for UuidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized format name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown UUID format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for UuidFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            UuidFormat::Default,
            UuidFormat::Hex,
            UuidFormat::Urn,
            UuidFormat::Any,
            UuidFormat::NotAny,
        ]
        .into_iter()
        .find(|format| format.name() == s)
        .ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}

// ============================================================================
// UUID VALIDATOR
// ============================================================================

/// Validates that a string or byte value has a UUID layout.
///
/// Values of any other kind match no format: they fail the concrete formats
/// and `any`, and pass `not_any`.
///
/// # Examples
///
/// ```
/// use vouch::prelude::*;
///
/// let canonical = Value::String("02aa7f48-3ccd-11e4-b63e-14109ff1a304".into());
///
/// assert!(uuid(UuidFormat::Default).validate(&canonical).is_ok());
/// assert!(uuid(UuidFormat::Any).validate(&canonical).is_ok());
///
/// let err = uuid(UuidFormat::Hex).validate(&canonical).unwrap_err();
/// assert_eq!(err.message, "must be a valid UUID in hex format");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uuid {
    format: UuidFormat,
}

impl Uuid {
    /// Creates a validator for the given format.
    #[must_use]
    pub fn new(format: UuidFormat) -> Self {
        Self { format }
    }

    /// The format being tested.
    #[must_use]
    pub fn format(&self) -> UuidFormat {
        self.format
    }

    fn fail(&self, input: &Value, code: &'static str, message: String) -> ValidationError {
        ValidationError::new(code, message)
            .with_param("value", input.to_string())
            .with_param("format", self.format.name())
    }
}

impl Validate for Uuid {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let raw = input.as_binary().unwrap_or_default();

        match self.format {
            UuidFormat::Any => {
                if UuidFormat::Any.matches(raw) {
                    Ok(())
                } else {
                    Err(self.fail(input, "uuid", "must be a valid UUID".to_owned()))
                }
            }
            UuidFormat::NotAny => {
                if UuidFormat::Any.matches(raw) {
                    Err(self.fail(input, "not_uuid", "must not be a UUID".to_owned()))
                } else {
                    Ok(())
                }
            }
            concrete => {
                if concrete.matches(raw) {
                    Ok(())
                } else {
                    Err(self.fail(
                        input,
                        "uuid",
                        format!("must be a valid UUID in {concrete} format"),
                    ))
                }
            }
        }
    }
}

/// Creates a [`Uuid`] validator.
#[must_use]
pub fn uuid(format: UuidFormat) -> Uuid {
    Uuid::new(format)
}

// ============================================================================
// HOST ENTRY POINT
// ============================================================================

/// Validates a value against a declarative UUID-format configuration.
///
/// Accepts the canonical form `{format: <tag>}`, a bare format tag, or a
/// boolean shorthand: `true` means `{format: any}` and `false` means
/// `{format: not_any}`. Total over its input domain.
///
/// # Examples
///
/// ```
/// use vouch::options::Config;
/// use vouch::validators::uuid;
/// use vouch::value::Value;
///
/// let hex = Value::String("02aa7f483ccd11e4b63e14109ff1a304".into());
/// assert!(uuid::validate(&hex, &Config::from(true)).is_ok());
/// assert!(uuid::validate(&hex, &Config::from("hex")).is_ok());
/// assert!(uuid::validate(&hex, &Config::from("urn")).is_err());
/// ```
pub fn validate(value: &Value, config: &Config) -> Outcome {
    let format = normalize(config).map_err(|e| e.with_param("value", value.to_string()))?;
    Uuid::new(format).validate(value)
}

/// Expands shorthand and resolves the format tag.
fn normalize(config: &Config) -> Result<UuidFormat, ValidationError> {
    let format = match config {
        Config::Shorthand(Value::Boolean(true)) => Some(UuidFormat::Any),
        Config::Shorthand(Value::Boolean(false)) => Some(UuidFormat::NotAny),
        Config::Shorthand(scalar) => scalar.as_tag().and_then(|tag| tag.parse().ok()),
        Config::Entries(entries) => match entries.as_slice() {
            [(name, argument)] if name == "format" => {
                argument.as_tag().and_then(|tag| tag.parse().ok())
            }
            _ => None,
        },
    };
    format.ok_or_else(|| {
        ValidationError::invalid_options("must provide a valid UUID format in options")
    })
}

// ============================================================================
// TESTS
// ============================================================================
