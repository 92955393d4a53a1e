//! Combinators for composing validators.
//!
//! Every combinator is itself a [`Validate`](crate::foundation::Validate)
//! implementation, so stacks compose freely:
//!
//! ```
//! use vouch::prelude::*;
//!
//! let v = type_of(Kind::Integer)
//!     .and(number().greater_than(0.0))
//!     .skippable()
//!     .allow_nil();
//!
//! assert!(v.validate(&Value::Nil).is_ok());
//! assert!(v.validate(&Value::Integer(3)).is_ok());
//! assert!(v.validate(&Value::Integer(-3)).is_err());
//! ```

pub mod and;
pub mod not;
pub mod or;
pub mod skip;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
pub use skip::{Skip, skippable};
