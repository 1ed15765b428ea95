//! Control-system settings.

use std::time::Duration;

use atk_core::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Default bound on every channel operation, in seconds.
pub const DEFAULT_TIMEOUT_S: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CsConfig {
    /// Timeout for each get/put, in seconds.
    #[serde(default = "default_timeout_s")]
    pub timeout_s: f64,
}

fn default_timeout_s() -> f64 {
    DEFAULT_TIMEOUT_S
}

impl Default for CsConfig {
    fn default() -> Self {
        Self {
            timeout_s: DEFAULT_TIMEOUT_S,
        }
    }
}

impl CsConfig {
    pub fn new(timeout_s: f64) -> ConfigResult<Self> {
        let cfg = Self { timeout_s };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.timeout_s.is_finite() || self.timeout_s <= 0.0 {
            return Err(ConfigError::InvalidArg {
                what: "timeout_s must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_s)
    }
}
