//! Error types for unit conversion.

use atk_core::{ConfigError, UnitSystem};
use thiserror::Error;

pub type ConversionResult<T> = Result<T, ConversionError>;

/// A conversion that could not produce exactly one in-range value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    #[error("UnitConv {id}: input {value} less than lower conversion limit ({limit})")]
    BelowLowerLimit { id: u32, value: f64, limit: f64 },

    #[error("UnitConv {id}: input {value} greater than upper conversion limit ({limit})")]
    AboveUpperLimit { id: u32, value: f64, limit: f64 },

    /// No candidate survived. `candidates` lists what the strategy produced
    /// before limit filtering.
    #[error(
        "UnitConv {id}: no corresponding {target} value for {value} \
         (candidates {candidates:?}, limits ({lower:?}, {upper:?}))"
    )]
    NoCandidate {
        id: u32,
        value: f64,
        target: UnitSystem,
        candidates: Vec<f64>,
        lower: Option<f64>,
        upper: Option<f64>,
    },

    #[error("UnitConv {id}: multiple corresponding {target} values for {value}: {candidates:?}")]
    Ambiguous {
        id: u32,
        value: f64,
        target: UnitSystem,
        candidates: Vec<f64>,
    },
}

pub type TableResult<T> = Result<T, TableError>;

/// Failure loading or building a conversion table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("UnitConv {id}: {source}")]
    Entry {
        id: u32,
        #[source]
        source: ConfigError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
