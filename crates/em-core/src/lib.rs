//! em-core: shared foundation for the emagram workspace.
//!
//! Contains:
//! - units (uom SI types + constructors, hPa/degC boundary conversions)
//! - numeric (tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EmError, EmResult};
pub use numeric::*;
pub use units::*;
