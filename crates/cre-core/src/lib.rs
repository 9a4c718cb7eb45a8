//! cre-core: shared foundation for the reactor design calculator.
//!
//! Contains:
//! - units (uom SI types, constructors, exact boundary conversions)
//! - numeric (Real + finiteness/positivity checks + relative error)
//! - constants (gas constant, reference temperature, sanity limits)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
