//! Error types for control-system access.

use atk_core::ConfigError;
use thiserror::Error;

use crate::channel::ChannelError;

pub type CsResult<T> = Result<T, CsError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CsError {
    /// Malformed batch arguments, rejected before any I/O.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A batch write failed for at least one endpoint. Reported once for
    /// the whole batch.
    #[error("Cannot write {count} value(s): {source}")]
    BatchWrite {
        count: usize,
        #[source]
        source: ChannelError,
    },
}
