//! One field's endpoints on the control system.

use std::fmt;
use std::sync::Arc;

use atk_core::{FieldError, FieldResult, Handle};

use crate::control_system::ControlSystem;

/// Binds a field to its readback and setpoint endpoints.
///
/// A disabled device refuses every value access before touching the
/// control system. Endpoint names remain queryable.
#[derive(Clone)]
pub struct Device {
    prefix: String,
    cs: Arc<dyn ControlSystem>,
    enabled: bool,
    rb_pv: Option<String>,
    sp_pv: Option<String>,
}

impl Device {
    /// An enabled device with no endpoints yet.
    pub fn new(prefix: impl Into<String>, cs: Arc<dyn ControlSystem>) -> Self {
        Self {
            prefix: prefix.into(),
            cs,
            enabled: true,
            rb_pv: None,
            sp_pv: None,
        }
    }

    pub fn with_readback(mut self, pv: impl Into<String>) -> Self {
        self.rb_pv = Some(pv.into());
        self
    }

    pub fn with_setpoint(mut self, pv: impl Into<String>) -> Self {
        self.sp_pv = Some(pv.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn get_pv_name(&self, handle: Handle) -> FieldResult<&str> {
        let pv = match handle {
            Handle::Readback => self.rb_pv.as_deref(),
            Handle::Setpoint => self.sp_pv.as_deref(),
        };
        pv.ok_or_else(|| FieldError::NoEndpoint {
            prefix: self.prefix.clone(),
            handle,
        })
    }

    fn ensure_enabled(&self, handle: Handle) -> FieldResult<()> {
        if self.enabled {
            Ok(())
        } else {
            Err(FieldError::DeviceDisabled {
                prefix: self.prefix.clone(),
                handle,
            })
        }
    }

    /// Read the endpoint behind `handle`. `Ok(None)` means the endpoint
    /// could not be reached.
    pub fn get_value(&self, handle: Handle) -> FieldResult<Option<f64>> {
        self.ensure_enabled(handle)?;
        let pv = self.get_pv_name(handle)?;
        Ok(self.cs.get_single(pv))
    }

    /// Write the setpoint endpoint. An unreachable endpoint is logged by the
    /// control system and otherwise ignored.
    pub fn set_value(&self, value: f64) -> FieldResult<()> {
        self.ensure_enabled(Handle::Setpoint)?;
        let pv = self.get_pv_name(Handle::Setpoint)?;
        self.cs.set_single(pv, value);
        Ok(())
    }
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("prefix", &self.prefix)
            .field("enabled", &self.enabled)
            .field("rb_pv", &self.rb_pv)
            .field("sp_pv", &self.sp_pv)
            .finish_non_exhaustive()
    }
}
