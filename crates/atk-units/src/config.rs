//! Serializable conversion tables.
//!
//! ```yaml
//! conversions:
//!   - id: 1
//!     kind: poly
//!     coefficients: [2.0, 0.0]
//!     eng_units: A
//!     phys_units: m^-2
//!   - id: 2
//!     kind: pchip
//!     x: [0.0, 10.0, 20.0]
//!     y: [0.0, 1.2, 2.1]
//!     limits: { lower: 0.0, upper: 15.0 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use atk_core::ConfigError;
use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::null::NullUnitConv;
use crate::pchip::PchipUnitConv;
use crate::poly::PolyUnitConv;
use crate::unitconv::UnitConv;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConversionKindSpec {
    /// `kind: identity`; a bare `null` would read as a YAML null.
    #[serde(rename = "identity")]
    Null,
    Poly { coefficients: Vec<f64> },
    Pchip { x: Vec<f64>, y: Vec<f64> },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitsSpec {
    #[serde(default)]
    pub lower: Option<f64>,
    #[serde(default)]
    pub upper: Option<f64>,
}

/// One row of a conversion table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConvSpec {
    pub id: u32,
    #[serde(flatten)]
    pub kind: ConversionKindSpec,
    #[serde(default)]
    pub eng_units: String,
    #[serde(default)]
    pub phys_units: String,
    /// Overrides the strategy's default limits when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<LimitsSpec>,
}

impl UnitConvSpec {
    pub fn build(&self) -> Result<UnitConv, ConfigError> {
        let uc = match &self.kind {
            ConversionKindSpec::Null => {
                if self.id != NullUnitConv::ID {
                    return Err(ConfigError::InvalidArg {
                        what: "null conversions must use id 0",
                    });
                }
                UnitConv::null()
            }
            ConversionKindSpec::Poly { coefficients } => {
                UnitConv::new(self.id, PolyUnitConv::new(coefficients.clone())?)
            }
            ConversionKindSpec::Pchip { x, y } => UnitConv::new(self.id, PchipUnitConv::new(x, y)?),
        };
        let uc = uc.with_units(self.eng_units.clone(), self.phys_units.clone());
        Ok(match self.limits {
            Some(l) => uc.with_limits(l.lower, l.upper),
            None => uc,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionTable {
    #[serde(default)]
    pub conversions: Vec<UnitConvSpec>,
}

impl ConversionTable {
    pub fn from_yaml_str(content: &str) -> TableResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load_yaml(path: &Path) -> TableResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn load_json(path: &Path) -> TableResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load by extension: `.json` is JSON, anything else YAML.
    pub fn load(path: &Path) -> TableResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_json(path),
            _ => Self::load_yaml(path),
        }
    }

    pub fn to_yaml_string(&self) -> TableResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build every conversion, keyed by id. Stops at the first bad entry.
    pub fn build(&self) -> TableResult<BTreeMap<u32, UnitConv>> {
        let mut out = BTreeMap::new();
        for spec in &self.conversions {
            if out.contains_key(&spec.id) {
                return Err(ConfigError::DuplicateId {
                    what: "conversion",
                    id: spec.id,
                }
                .into());
            }
            let uc = spec
                .build()
                .map_err(|source| TableError::Entry { id: spec.id, source })?;
            out.insert(spec.id, uc);
        }
        Ok(out)
    }

    /// Build every conversion independently and report each outcome.
    pub fn check(&self) -> Vec<(u32, Result<(), ConfigError>)> {
        self.conversions
            .iter()
            .map(|spec| (spec.id, spec.build().map(|_| ())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
conversions:
  - id: 0
    kind: identity
  - id: 1
    kind: poly
    coefficients: [2.0, 0.0]
    eng_units: A
    phys_units: T
  - id: 2
    kind: pchip
    x: [0.0, 10.0, 20.0]
    y: [0.0, 1.2, 2.1]
    limits: { lower: 0.0, upper: 15.0 }
"#;

    #[test]
    fn yaml_table_builds() {
        let table = ConversionTable::from_yaml_str(TABLE).unwrap();
        let convs = table.build().unwrap();
        assert_eq!(convs.len(), 3);

        let poly = &convs[&1];
        assert_eq!(poly.eng_units(), "A");
        assert_eq!(poly.eng_to_phys(3.0).unwrap(), 6.0);

        let pchip = &convs[&2];
        assert_eq!(pchip.limits(), (Some(0.0), Some(15.0)));
        assert!(pchip.eng_to_phys(16.0).is_err());
    }

    #[test]
    fn json_table_builds() {
        let json = r#"{"conversions":[{"id":4,"kind":"poly","coefficients":[1.0,0.5]}]}"#;
        let convs = ConversionTable::from_json_str(json).unwrap().build().unwrap();
        assert_eq!(convs[&4].eng_to_phys(1.0).unwrap(), 1.5);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let spec = UnitConvSpec {
            id: 3,
            kind: ConversionKindSpec::Poly {
                coefficients: vec![1.0, 0.0],
            },
            eng_units: String::new(),
            phys_units: String::new(),
            limits: None,
        };
        let table = ConversionTable {
            conversions: vec![spec.clone(), spec],
        };
        assert!(matches!(
            table.build(),
            Err(TableError::Config(ConfigError::DuplicateId { id: 3, .. }))
        ));
    }

    #[test]
    fn bad_entry_reported_with_id() {
        let yaml = "conversions:\n  - id: 9\n    kind: pchip\n    x: [1.0, 2.0, 3.0]\n    y: [1.0, 3.0, 2.0]\n";
        let table = ConversionTable::from_yaml_str(yaml).unwrap();
        match table.build() {
            Err(TableError::Entry { id, source }) => {
                assert_eq!(id, 9);
                assert_eq!(source, ConfigError::NonMonotonic { what: "pchip y" });
            }
            other => panic!("unexpected {other:?}"),
        }
        let report = table.check();
        assert_eq!(report.len(), 1);
        assert!(report[0].1.is_err());
    }

    #[test]
    fn null_with_nonzero_id_rejected() {
        let yaml = "conversions:\n  - id: 5\n    kind: identity\n";
        let table = ConversionTable::from_yaml_str(yaml).unwrap();
        assert!(table.build().is_err());
    }

    #[test]
    fn yaml_round_trip() {
        let table = ConversionTable::from_yaml_str(TABLE).unwrap();
        let again = ConversionTable::from_yaml_str(&table.to_yaml_string().unwrap()).unwrap();
        assert_eq!(table, again);
    }
}
