//! Polynomial conversion.

use atk_core::{ConfigError, ConfigResult, ensure_all_finite};

use crate::roots::{eval_poly, real_roots};
use crate::unitconv::RawConversion;

/// `phys = p(eng)` for a polynomial `p` given highest degree first.
///
/// The inverse yields every distinct real root of `p(x) - phys`; picking
/// one of them is left to the limits of the owning [`crate::UnitConv`].
#[derive(Debug, Clone, PartialEq)]
pub struct PolyUnitConv {
    coefficients: Vec<f64>,
}

impl PolyUnitConv {
    pub fn new(coefficients: impl Into<Vec<f64>>) -> ConfigResult<Self> {
        let coefficients = coefficients.into();
        if coefficients.is_empty() {
            return Err(ConfigError::InvalidArg {
                what: "polynomial needs at least one coefficient",
            });
        }
        ensure_all_finite(&coefficients, "polynomial coefficient")?;
        Ok(Self { coefficients })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }
}

impl RawConversion for PolyUnitConv {
    fn raw_eng_to_phys(&self, eng_value: f64) -> Vec<f64> {
        vec![eval_poly(&self.coefficients, eng_value)]
    }

    fn raw_phys_to_eng(&self, phys_value: f64) -> Vec<f64> {
        let mut shifted = self.coefficients.clone();
        if let Some(constant) = shifted.last_mut() {
            *constant -= phys_value;
        }
        real_roots(&shifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_evaluates_polynomial() {
        let p = PolyUnitConv::new([2.0, 0.0]).unwrap();
        assert_eq!(p.raw_eng_to_phys(40.0), vec![80.0]);
        assert_eq!(p.degree(), 1);
    }

    #[test]
    fn inverse_returns_all_real_roots() {
        let p = PolyUnitConv::new([1.0, 0.0, 0.0]).unwrap();
        assert_eq!(p.raw_phys_to_eng(9.0), vec![-3.0, 3.0]);
        assert!(p.raw_phys_to_eng(-1.0).is_empty());
    }

    #[test]
    fn rejects_empty_and_non_finite() {
        assert!(PolyUnitConv::new(Vec::new()).is_err());
        assert!(PolyUnitConv::new([1.0, f64::INFINITY]).is_err());
    }
}
