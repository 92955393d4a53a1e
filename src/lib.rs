//! # vouch
//!
//! A small library of composable value validators. Each validator checks a
//! single dynamically typed [`Value`](value::Value) against a declarative
//! option set and returns a uniform [`Outcome`](foundation::Outcome):
//! valid, or invalid with a reason and a templating context.
//!
//! ## Quick Start
//!
//! ```
//! use vouch::prelude::*;
//!
//! let v = number().is(true).greater_than(0.0).less_or_equal_than(3.14);
//! assert!(v.validate(&Value::Float(3.14)).is_ok());
//!
//! let err = v.validate(&Value::Integer(0)).unwrap_err();
//! assert_eq!(err.message, "must be greater than 0");
//! ```
//!
//! ## Driving validators from declarative configuration
//!
//! Host frameworks that read field declarations at runtime use the
//! module-level entry points, which accept canonical or shorthand
//! [`Config`](options::Config) and never panic on malformed options:
//!
//! ```
//! use vouch::prelude::*;
//! use vouch::validators;
//!
//! let value = Value::String("02aa7f48-3ccd-11e4-b63e-14109ff1a304".into());
//! assert!(validators::uuid::validate(&value, &Config::from("default")).is_ok());
//! assert!(validators::type_of::validate(&value, &Config::from("string")).is_ok());
//! ```
//!
//! ## Built-in validators
//!
//! - [`TypeOf`](validators::TypeOf) — runtime category membership
//! - [`Number`](validators::Number) — numeric-ness plus up to five ordered
//!   relational constraints
//! - [`Uuid`](validators::Uuid) — fixed-layout identifier formats
//!
//! Combinators ([`and`](combinators::and), [`or`](combinators::or),
//! [`not`](combinators::not), [`skippable`](combinators::skippable)) compose
//! them; the [`Skip`](combinators::Skip) wrapper implements the conventional
//! allow-nil/allow-blank gate.

// ValidationError is the fundamental error type for all validators — boxing
// it would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod options;
pub mod prelude;
pub mod validators;
pub mod value;
