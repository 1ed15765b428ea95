//! Raw batched transport to control-system endpoints.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use thiserror::Error;

/// Why a channel could not serve an endpoint.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChannelError {
    #[error("cannot connect to {pv}")]
    Disconnected { pv: String },

    #[error("timed out after {timeout:?} on {pv}")]
    Timeout { pv: String, timeout: Duration },
}

/// A transport that reads and writes many endpoints per call.
///
/// `get` returns one result per requested endpoint, in request order.
/// `put` is all-or-nothing from the caller's point of view: any failing
/// endpoint fails the call.
pub trait Channel: Send + Sync {
    fn get(&self, pvs: &[&str], timeout: Duration) -> Vec<Result<f64, ChannelError>>;

    fn put(&self, pvs: &[&str], values: &[f64], timeout: Duration) -> Result<(), ChannelError>;
}

/// Process-local channel holding endpoint values in memory.
///
/// Endpoints must be created with [`InMemoryChannel::insert`] before use and
/// can be made unreachable with [`InMemoryChannel::disconnect`].
#[derive(Debug, Default)]
pub struct InMemoryChannel {
    values: RwLock<HashMap<String, f64>>,
    disconnected: RwLock<HashSet<String>>,
}

impl InMemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let chan = Self::new();
        for (pv, v) in values {
            chan.insert(pv, v);
        }
        chan
    }

    pub fn insert(&self, pv: impl Into<String>, value: f64) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(pv.into(), value);
    }

    /// Current value, bypassing reachability.
    pub fn value(&self, pv: &str) -> Option<f64> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pv)
            .copied()
    }

    pub fn disconnect(&self, pv: impl Into<String>) {
        self.disconnected
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(pv.into());
    }

    pub fn reconnect(&self, pv: &str) {
        self.disconnected
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(pv);
    }

    fn reachable(&self, pv: &str) -> Result<(), ChannelError> {
        let known = self
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(pv);
        let cut = self
            .disconnected
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(pv);
        if known && !cut {
            Ok(())
        } else {
            Err(ChannelError::Disconnected { pv: pv.to_string() })
        }
    }
}

impl Channel for InMemoryChannel {
    fn get(&self, pvs: &[&str], _timeout: Duration) -> Vec<Result<f64, ChannelError>> {
        pvs.iter()
            .map(|pv| {
                self.reachable(pv)?;
                self.value(pv)
                    .ok_or_else(|| ChannelError::Disconnected { pv: pv.to_string() })
            })
            .collect()
    }

    fn put(&self, pvs: &[&str], values: &[f64], _timeout: Duration) -> Result<(), ChannelError> {
        for pv in pvs {
            self.reachable(pv)?;
        }
        let mut store = self.values.write().unwrap_or_else(PoisonError::into_inner);
        for (pv, v) in pvs.iter().zip(values) {
            store.insert((*pv).to_string(), *v);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Duration = Duration::from_secs(1);

    #[test]
    fn get_reports_per_endpoint() {
        let chan = InMemoryChannel::with_values([("A", 1.0), ("B", 2.0)]);
        chan.disconnect("B");
        let out = chan.get(&["A", "B", "C"], T);
        assert_eq!(out[0], Ok(1.0));
        assert_eq!(out[1], Err(ChannelError::Disconnected { pv: "B".into() }));
        assert!(out[2].is_err());
    }

    #[test]
    fn put_is_all_or_nothing() {
        let chan = InMemoryChannel::with_values([("A", 1.0), ("B", 2.0)]);
        chan.disconnect("B");
        assert!(chan.put(&["A", "B"], &[10.0, 20.0], T).is_err());
        assert_eq!(chan.value("A"), Some(1.0));

        chan.reconnect("B");
        chan.put(&["A", "B"], &[10.0, 20.0], T).unwrap();
        assert_eq!(chan.value("B"), Some(20.0));
    }
}
