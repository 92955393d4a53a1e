//! Declarative configuration, canonical or shorthand.
//!
//! The host framework declares constraints either as an ordered mapping from
//! constraint name to argument, or as a single bare scalar that each
//! validator expands into its one-key canonical form:
//!
//! - Type validator: a bare category tag `T` means `{is: T}`
//! - Number validator: a bare boolean `B` means `{is: B}`
//! - UUID validator: `true` means `{format: any}`, `false` means
//!   `{format: not_any}`, and a bare format tag means `{format: <tag>}`
//!
//! Expansion happens inside each validator's `validate` entry point, before
//! any constraint is evaluated; shapes outside the accepted forms are
//! reported as configuration errors through the normal failure channel.

use crate::value::Value;

// ============================================================================
// CONFIG
// ============================================================================

/// One validator invocation's configuration.
///
/// Constructed fresh per call and never mutated. `Entries` preserves the
/// order in which constraints were declared.
///
/// # Examples
///
/// ```
/// use vouch::options::Config;
/// use vouch::value::Value;
///
/// // Canonical form:
/// let canonical = Config::entries([("is", Value::Symbol("string".into()))]);
///
/// // Shorthand for the same thing, as the Type validator reads it:
/// let shorthand = Config::from("string");
///
/// assert_eq!(canonical.get("is").and_then(Value::as_tag), Some("string"));
/// assert!(shorthand.get("is").is_none()); // shorthand has no entries yet
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Config {
    /// A bare scalar standing in for a one-key configuration.
    Shorthand(Value),
    /// The canonical ordered constraint mapping.
    Entries(Vec<(String, Value)>),
}

impl Config {
    /// Creates a shorthand configuration from a bare scalar.
    pub fn shorthand(value: impl Into<Value>) -> Self {
        Config::Shorthand(value.into())
    }

    /// Creates a canonical configuration from ordered entries.
    pub fn entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Config::Entries(
            entries
                .into_iter()
                .map(|(name, argument)| (name.into(), argument.into()))
                .collect(),
        )
    }

    /// Looks up a constraint argument by name in a canonical configuration.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Config::Shorthand(_) => None,
            Config::Entries(entries) => entries
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, argument)| argument),
        }
    }
}

impl From<bool> for Config {
    fn from(b: bool) -> Self {
        Config::Shorthand(Value::Boolean(b))
    }
}

/// A bare `&str` is read as an atom-like tag, not as string data.
impl From<&str> for Config {
    fn from(tag: &str) -> Self {
        Config::Shorthand(Value::Symbol(tag.to_owned()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_preserve_order() {
        let config = Config::entries([
            ("greater_than", Value::Integer(0)),
            ("is", Value::Boolean(true)),
        ]);
        let Config::Entries(entries) = &config else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].0, "greater_than");
        assert_eq!(entries[1].0, "is");
    }

    #[test]
    fn test_get() {
        let config = Config::entries([("format", Value::Symbol("hex".into()))]);
        assert_eq!(
            config.get("format"),
            Some(&Value::Symbol("hex".into()))
        );
        assert_eq!(config.get("is"), None);
    }

    #[test]
    fn test_bool_shorthand() {
        assert_eq!(Config::from(true), Config::Shorthand(Value::Boolean(true)));
    }

    #[test]
    fn test_tag_shorthand_is_a_symbol() {
        assert_eq!(
            Config::from("integer"),
            Config::Shorthand(Value::Symbol("integer".into()))
        );
    }
}
