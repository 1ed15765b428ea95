//! Monotone interpolated conversion.

use atk_core::{ConfigError, ConfigResult};

use crate::spline::PchipSpline;
use crate::unitconv::RawConversion;

/// `phys = pchip(eng)` through knots `(x, y)`.
///
/// `x` must be strictly increasing and `y` strictly monotonic (either
/// direction), so the curve is invertible on `[x[0], x[n-1]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PchipUnitConv {
    spline: PchipSpline,
}

impl PchipUnitConv {
    /// # Errors
    ///
    /// [`ConfigError::NotStrictlyIncreasing`] for bad `x`,
    /// [`ConfigError::NonMonotonic`] for bad `y`, plus the shape errors of
    /// [`PchipSpline::new`].
    pub fn new(x: &[f64], y: &[f64]) -> ConfigResult<Self> {
        let spline = PchipSpline::new(x, y)?;
        let increasing = y.windows(2).all(|w| w[1] > w[0]);
        let decreasing = y.windows(2).all(|w| w[1] < w[0]);
        if !(increasing || decreasing) {
            return Err(ConfigError::NonMonotonic { what: "pchip y" });
        }
        Ok(Self { spline })
    }

    pub fn x(&self) -> &[f64] {
        self.spline.x()
    }

    pub fn y(&self) -> &[f64] {
        self.spline.y()
    }

    /// Knot range, used as conversion limits unless overridden.
    pub fn domain(&self) -> (f64, f64) {
        let x = self.spline.x();
        (x[0], x[x.len() - 1])
    }
}

impl RawConversion for PchipUnitConv {
    fn raw_eng_to_phys(&self, eng_value: f64) -> Vec<f64> {
        vec![self.spline.eval(eng_value)]
    }

    fn raw_phys_to_eng(&self, phys_value: f64) -> Vec<f64> {
        self.spline.solve(phys_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_monotonic_y_rejected() {
        let err = PchipUnitConv::new(&[1.0, 2.0, 3.0], &[1.0, 3.0, 2.0]).unwrap_err();
        assert_eq!(err, ConfigError::NonMonotonic { what: "pchip y" });
    }

    #[test]
    fn flat_segment_is_not_monotonic() {
        assert!(PchipUnitConv::new(&[1.0, 2.0, 3.0], &[1.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn x_checked_before_y() {
        let err = PchipUnitConv::new(&[1.0, 3.0, 2.0], &[1.0, 3.0, 2.0]).unwrap_err();
        assert!(matches!(err, ConfigError::NotStrictlyIncreasing { .. }));
    }

    #[test]
    fn decreasing_y_accepted() {
        let p = PchipUnitConv::new(&[0.0, 1.0, 2.0], &[10.0, 5.0, 1.0]).unwrap();
        assert_eq!(p.domain(), (0.0, 2.0));
        assert_eq!(p.raw_eng_to_phys(1.0), vec![5.0]);
    }
}
