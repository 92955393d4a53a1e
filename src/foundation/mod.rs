//! Core validation types and traits.
//!
//! The foundation defines the shared contract between validators and the
//! host framework:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Failures**: [`ValidationError`]
//! - **Protocol**: [`Outcome`] — the uniform two-case result every
//!   validator returns
//!
//! Success carries no payload. Failure carries a reason string plus a
//! context of rendered field values, so the host can either display the
//! reason verbatim or feed the context into its own message template.

pub mod error;
pub mod traits;

pub use error::{Params, ValidationError};
pub use traits::{Validate, ValidateExt};

/// The uniform result of one validation call.
///
/// `Ok(())` is *valid*; `Err` is *invalid* with a reason and context. Both
/// validation failures and configuration errors travel this channel — the
/// entry points in [`crate::validators`] are total over their input domain
/// and never panic.
pub type Outcome = Result<(), ValidationError>;
