//! sv-core: stable foundation for steamvessel.
//!
//! Contains:
//! - units (uom SI conversions used at the engine boundary)
//! - numeric (Real + tolerances + float helpers)
//! - constants (process-wide physical constants)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::PhysicalConstants;
pub use error::{CoreError, CoreResult};
pub use numeric::*;
