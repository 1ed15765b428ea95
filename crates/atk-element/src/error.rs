//! Error types for element value access.

use atk_core::FieldError;
use atk_units::ConversionError;
use thiserror::Error;

pub type ElementResult<T> = Result<T, ElementError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ElementError {
    #[error("Field error: {0}")]
    Field(#[from] FieldError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulatorError),
}

/// Failure reported by a simulation backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulatorError {
    #[error("field '{field}' is not simulated")]
    UnknownField { field: String },

    #[error("{field} {handle} is read-only in simulation")]
    ReadOnly {
        field: String,
        handle: atk_core::Handle,
    },

    #[error("backend error: {message}")]
    Backend { message: String },
}
