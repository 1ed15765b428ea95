//! Backends that supply raw field values.

use atk_core::{Handle, UnitSystem};
use atk_cs::Device;

use crate::error::{ElementResult, SimulatorError};

/// Supplies raw values for an element's fields in one native unit system.
///
/// The element resolves the field's [`Device`] before calling in; models
/// that do not talk to hardware ignore it.
pub trait Model {
    /// Unit system of the values this model reads and writes.
    fn units(&self) -> UnitSystem;

    /// `Ok(None)` means the value exists but could not be fetched.
    fn get_value(&self, field: &str, handle: Handle, device: &Device) -> ElementResult<Option<f64>>;

    fn set_value(
        &mut self,
        field: &str,
        handle: Handle,
        value: f64,
        device: &Device,
    ) -> ElementResult<()>;
}

/// Values straight from the control system, in engineering units.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveModel;

impl Model for LiveModel {
    fn units(&self) -> UnitSystem {
        UnitSystem::Eng
    }

    fn get_value(&self, _field: &str, handle: Handle, device: &Device) -> ElementResult<Option<f64>> {
        Ok(device.get_value(handle)?)
    }

    fn set_value(
        &mut self,
        _field: &str,
        _handle: Handle,
        value: f64,
        device: &Device,
    ) -> ElementResult<()> {
        // Devices only write their setpoint.
        Ok(device.set_value(value)?)
    }
}

/// The narrow surface a physics simulation exposes to elements.
pub trait Simulator {
    fn get_value(&self, field: &str, handle: Handle) -> Result<f64, SimulatorError>;

    fn set_value(&mut self, field: &str, handle: Handle, value: f64) -> Result<(), SimulatorError>;
}

/// Adapts a [`Simulator`] to [`Model`] with a declared unit system.
#[derive(Debug, Clone)]
pub struct SimModel<S> {
    sim: S,
    units: UnitSystem,
}

impl<S: Simulator> SimModel<S> {
    pub fn new(sim: S, units: UnitSystem) -> Self {
        Self { sim, units }
    }

    pub fn simulator(&self) -> &S {
        &self.sim
    }
}

impl<S: Simulator> Model for SimModel<S> {
    fn units(&self) -> UnitSystem {
        self.units
    }

    fn get_value(&self, field: &str, handle: Handle, _device: &Device) -> ElementResult<Option<f64>> {
        Ok(Some(self.sim.get_value(field, handle)?))
    }

    fn set_value(
        &mut self,
        field: &str,
        handle: Handle,
        value: f64,
        _device: &Device,
    ) -> ElementResult<()> {
        Ok(self.sim.set_value(field, handle, value)?)
    }
}
