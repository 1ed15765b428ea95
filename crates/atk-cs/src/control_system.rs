//! The control-system contract consumed by devices.

use tracing::{error, warn};

use atk_core::ConfigError;

use crate::channel::Channel;
use crate::config::CsConfig;
use crate::error::{CsError, CsResult};

/// Read/write access to named endpoints.
///
/// Single-endpoint operations never fail: an unreachable read yields `None`
/// and an unreachable write is logged and dropped. Batch reads substitute
/// `None` per unreachable endpoint; batch writes fail as a whole.
pub trait ControlSystem: Send + Sync {
    fn get_single(&self, pv: &str) -> Option<f64>;

    /// One entry per requested endpoint, in request order.
    fn get_multiple(&self, pvs: &[&str]) -> Vec<Option<f64>>;

    fn set_single(&self, pv: &str, value: f64);

    /// # Errors
    ///
    /// [`CsError::Config`] if `pvs` and `values` differ in length (checked
    /// before any I/O); [`CsError::BatchWrite`] if the channel rejects the
    /// batch.
    fn set_multiple(&self, pvs: &[&str], values: &[f64]) -> CsResult<()>;
}

/// [`ControlSystem`] over a [`Channel`], with a bounded timeout per call.
#[derive(Debug)]
pub struct ChannelControlSystem<C> {
    channel: C,
    config: CsConfig,
}

impl<C: Channel> ChannelControlSystem<C> {
    pub fn new(channel: C, config: CsConfig) -> Self {
        Self { channel, config }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn config(&self) -> &CsConfig {
        &self.config
    }
}

impl<C: Channel> ControlSystem for ChannelControlSystem<C> {
    fn get_single(&self, pv: &str) -> Option<f64> {
        match self.channel.get(&[pv], self.config.timeout()).pop() {
            Some(Ok(v)) => Some(v),
            Some(Err(e)) => {
                warn!(pv, error = %e, "read failed");
                None
            }
            None => {
                warn!(pv, "channel returned no result");
                None
            }
        }
    }

    fn get_multiple(&self, pvs: &[&str]) -> Vec<Option<f64>> {
        let mut results = self.channel.get(pvs, self.config.timeout()).into_iter();
        pvs.iter()
            .map(|pv| match results.next() {
                Some(Ok(v)) => Some(v),
                Some(Err(e)) => {
                    warn!(pv, error = %e, "read failed");
                    None
                }
                None => {
                    warn!(pv, "channel returned no result");
                    None
                }
            })
            .collect()
    }

    fn set_single(&self, pv: &str, value: f64) {
        if let Err(e) = self.channel.put(&[pv], &[value], self.config.timeout()) {
            warn!(pv, value, error = %e, "write failed, ignoring");
        }
    }

    fn set_multiple(&self, pvs: &[&str], values: &[f64]) -> CsResult<()> {
        if pvs.len() != values.len() {
            return Err(ConfigError::LengthMismatch {
                what: "endpoints and values",
                left: pvs.len(),
                right: values.len(),
            }
            .into());
        }
        self.channel
            .put(pvs, values, self.config.timeout())
            .map_err(|source| {
                error!(count = pvs.len(), error = %source, "batch write failed");
                CsError::BatchWrite {
                    count: pvs.len(),
                    source,
                }
            })
    }
}
