//! Element value-access orchestration.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

use atk_core::{FieldError, FieldResult, Handle, Length, ModelKind, UnitSystem, to_m};
use atk_cs::Device;
use atk_units::UnitConv;

use crate::error::ElementResult;
use crate::model::Model;

/// A lattice element and its addressable fields.
pub struct Element {
    name: String,
    length: Length,
    element_type: String,
    families: BTreeSet<String>,
    devices: BTreeMap<String, Device>,
    unitconvs: BTreeMap<String, UnitConv>,
    models: BTreeMap<ModelKind, Box<dyn Model>>,
}

impl Element {
    pub fn new(name: impl Into<String>, length: Length, element_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length,
            element_type: element_type.into(),
            families: BTreeSet::new(),
            devices: BTreeMap::new(),
            unitconvs: BTreeMap::new(),
            models: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    pub fn families(&self) -> &BTreeSet<String> {
        &self.families
    }

    pub fn add_to_family(&mut self, family: impl Into<String>) {
        self.families.insert(family.into());
    }

    pub fn is_in_family(&self, family: &str) -> bool {
        self.families.contains(family)
    }

    /// Register the backend serving `kind`, replacing any previous one.
    pub fn set_model(&mut self, kind: ModelKind, model: impl Model + 'static) {
        self.models.insert(kind, Box::new(model));
    }

    pub fn model_kinds(&self) -> impl Iterator<Item = ModelKind> + '_ {
        self.models.keys().copied()
    }

    /// Register `field` with its device and conversion.
    pub fn add_device(&mut self, field: impl Into<String>, device: Device, uc: UnitConv) {
        let field = field.into();
        self.devices.insert(field.clone(), device);
        self.unitconvs.insert(field, uc);
    }

    pub fn get_fields(&self) -> BTreeSet<&str> {
        self.devices.keys().map(String::as_str).collect()
    }

    fn unknown_field(&self, field: &str) -> FieldError {
        FieldError::UnknownField {
            element: self.name.clone(),
            field: field.to_string(),
        }
    }

    pub fn get_device(&self, field: &str) -> FieldResult<&Device> {
        self.devices.get(field).ok_or_else(|| self.unknown_field(field))
    }

    pub fn get_unitconv(&self, field: &str) -> FieldResult<&UnitConv> {
        self.unitconvs
            .get(field)
            .ok_or_else(|| self.unknown_field(field))
    }

    pub fn get_pv_name(&self, field: &str, handle: Handle) -> FieldResult<&str> {
        self.get_device(field)?.get_pv_name(handle)
    }

    fn model_not_registered(&self, kind: ModelKind) -> FieldError {
        FieldError::ModelNotRegistered {
            element: self.name.clone(),
            kind,
        }
    }

    /// Read `field` through the `kind` backend, expressed in `units`.
    ///
    /// `Ok(None)` means the backend could not reach the value; nothing is
    /// converted in that case.
    pub fn get_value(
        &self,
        field: &str,
        handle: Handle,
        units: UnitSystem,
        kind: ModelKind,
    ) -> ElementResult<Option<f64>> {
        let device = self.get_device(field)?;
        let uc = self.get_unitconv(field)?;
        let model = self
            .models
            .get(&kind)
            .ok_or_else(|| self.model_not_registered(kind))?;

        let Some(raw) = model.get_value(field, handle, device)? else {
            debug!(element = %self.name, field, %handle, %kind, "value unavailable");
            return Ok(None);
        };
        let value = uc.convert(raw, model.units(), units)?;
        debug!(
            element = %self.name, field, %handle, %kind, raw, %units, value,
            "get value"
        );
        Ok(Some(value))
    }

    /// Write `value`, given in `units`, to the setpoint of `field` through
    /// the `kind` backend.
    pub fn set_value(
        &mut self,
        field: &str,
        value: f64,
        units: UnitSystem,
        kind: ModelKind,
    ) -> ElementResult<()> {
        let device = self
            .devices
            .get(field)
            .ok_or_else(|| self.unknown_field(field))?;
        let uc = self
            .unitconvs
            .get(field)
            .ok_or_else(|| self.unknown_field(field))?;
        let Some(model) = self.models.get_mut(&kind) else {
            return Err(FieldError::ModelNotRegistered {
                element: self.name.clone(),
                kind,
            }
            .into());
        };

        let raw = uc.convert(value, units, model.units())?;
        debug!(
            element = %self.name, field, %kind, value, %units, raw,
            "set value"
        );
        model.set_value(field, Handle::Setpoint, raw, device)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Element {}, length {} m, families {}>",
            self.name,
            to_m(self.length),
            self.families
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("length_m", &to_m(self.length))
            .field("element_type", &self.element_type)
            .field("families", &self.families)
            .field("devices", &self.devices)
            .field("unitconvs", &self.unitconvs)
            .field("models", &self.models.keys().collect::<Vec<_>>())
            .finish()
    }
}
