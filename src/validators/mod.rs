//! Built-in validators.
//!
//! Each validator judges one value against one declarative option set and is
//! usable two ways:
//!
//! - **Typed**: construct the validator directly (`type_of(..)`,
//!   `number()..`, `uuid(..)`) and call
//!   [`Validate::validate`](crate::foundation::Validate::validate). Malformed
//!   configuration is unrepresentable on this path.
//! - **Dynamic**: hand the module-level `validate(value, config)` entry
//!   point a [`Config`](crate::options::Config) in canonical or shorthand
//!   form. This path is total: configuration mistakes come back as
//!   `invalid_options` failures.
//!
//! # Examples
//!
//! ```
//! use vouch::prelude::*;
//!
//! // Typed
//! let age = number().is(true).greater_or_equal_than(0.0);
//! assert!(age.validate(&Value::Integer(44)).is_ok());
//!
//! // Dynamic, as a host framework would drive it
//! let config = Config::entries([("greater_or_equal_than", Value::Integer(0))]);
//! assert!(vouch::validators::number::validate(&Value::Integer(44), &config).is_ok());
//! ```

pub mod number;
pub mod type_of;
pub mod uuid;

pub use number::{Number, number};
pub use type_of::{TypeOf, type_of};
pub use uuid::{UnknownFormat, Uuid, UuidFormat, uuid};
