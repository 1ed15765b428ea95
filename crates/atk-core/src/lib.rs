//! atk-core: stable foundation for the accelerator toolkit.
//!
//! Contains:
//! - keys (unit system, handle and backend-kind dispatch enums)
//! - numeric (Real + tolerances + float helpers)
//! - units (uom SI types + constructors)
//! - error (shared error types)

pub mod error;
pub mod keys;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ConfigError, ConfigResult, FieldError, FieldResult};
pub use keys::{Handle, ModelKind, UnitSystem};
pub use numeric::*;
pub use units::*;
