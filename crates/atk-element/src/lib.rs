//! Elements and the backends that serve their fields.
//!
//! An [`Element`] owns, per field, one [`atk_cs::Device`] and one
//! [`atk_units::UnitConv`], plus one [`Model`] per backend kind. A value
//! request picks the model, fetches a raw value in that model's native unit
//! system and converts it to the unit system the caller asked for.

pub mod element;
pub mod error;
pub mod model;

pub use element::Element;
pub use error::{ElementError, ElementResult, SimulatorError};
pub use model::{LiveModel, Model, SimModel, Simulator};
