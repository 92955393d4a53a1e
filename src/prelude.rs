//! Prelude module for convenient imports.
//!
//! ```
//! use vouch::prelude::*;
//!
//! let v = type_of(Kind::String).and(uuid(UuidFormat::Any));
//! assert!(v.validate(&Value::String("02aa7f483ccd11e4b63e14109ff1a304".into())).is_ok());
//! ```

pub use crate::combinators::{And, Not, Or, Skip, and, not, or, skippable};
pub use crate::foundation::{Outcome, Validate, ValidateExt, ValidationError};
pub use crate::options::Config;
pub use crate::validators::{Number, TypeOf, Uuid, UuidFormat, number, type_of, uuid};
pub use crate::value::{Kind, Value};
