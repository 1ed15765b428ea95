//! Bidirectional conversion between engineering and physics units.
//!
//! A [`UnitConv`] owns one conversion strategy plus the parts shared by
//! every strategy: engineering-unit limits, pre/post hooks and the
//! exactly-one-candidate rule. Strategies form a closed set:
//!
//! - [`NullUnitConv`]: identity both ways
//! - [`PolyUnitConv`]: polynomial forward, real roots inverse
//! - [`PchipUnitConv`]: monotone piecewise-cubic forward, zero crossings inverse
//!
//! Strategies only produce *candidates*; limits and uniqueness are enforced
//! by [`UnitConv::eng_to_phys`] and [`UnitConv::phys_to_eng`].

pub mod config;
pub mod error;
pub mod hook;
pub mod null;
pub mod pchip;
pub mod poly;
pub mod roots;
pub mod spline;
pub mod unitconv;

pub use config::{ConversionKindSpec, ConversionTable, LimitsSpec, UnitConvSpec};
pub use error::{ConversionError, ConversionResult, TableError, TableResult};
pub use hook::Hook;
pub use null::NullUnitConv;
pub use pchip::PchipUnitConv;
pub use poly::PolyUnitConv;
pub use spline::PchipSpline;
pub use unitconv::{RawConversion, Strategy, UnitConv};
