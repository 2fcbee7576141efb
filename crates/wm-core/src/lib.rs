//! wm-core: stable foundation for waymark.
//!
//! Contains:
//! - geo (latitude/longitude pair + range checks)
//! - workout (the two activity variants and their derived fields)
//! - validate (positivity predicate shared by form input and constructors)
//! - error (shared error types)

pub mod error;
pub mod geo;
pub mod validate;
pub mod workout;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use geo::*;
pub use validate::*;
pub use workout::*;
