use thiserror::Error;

use crate::keys::{Handle, ModelKind};

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type FieldResult<T> = Result<T, FieldError>;

/// Bad configuration data, detected before any conversion or I/O happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Length mismatch: {what} ({left} vs {right})")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("Too few points for {what}: got {len}, need at least {min}")]
    TooFewPoints {
        what: &'static str,
        len: usize,
        min: usize,
    },

    #[error("{what} must be strictly increasing (index {index})")]
    NotStrictlyIncreasing { what: &'static str, index: usize },

    #[error("{what} must be monotonically increasing or decreasing")]
    NonMonotonic { what: &'static str },

    #[error("Duplicate {what} id {id}")]
    DuplicateId { what: &'static str, id: u32 },
}

/// Errors addressing a field, handle or backend that cannot be served.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Element {element}: no field named '{field}'")]
    UnknownField { element: String, field: String },

    #[error("Invalid handle '{token}', expected setpoint or readback")]
    InvalidHandle { token: String },

    #[error("Invalid unit system '{token}', expected engineering or physics")]
    InvalidUnitSystem { token: String },

    #[error("Invalid model kind '{token}', expected live or simulation")]
    InvalidModelKind { token: String },

    #[error("Element {element}: no {kind} model registered")]
    ModelNotRegistered { element: String, kind: ModelKind },

    #[error("Device {prefix} is disabled, cannot access {handle}")]
    DeviceDisabled { prefix: String, handle: Handle },

    #[error("Device {prefix} has no {handle} endpoint")]
    NoEndpoint { prefix: String, handle: Handle },
}
