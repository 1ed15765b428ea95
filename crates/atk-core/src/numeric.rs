use crate::ConfigError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute/relative tolerance pair.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Two real roots closer than this are the same root.
///
/// Eigenvalue-based root finding smears a double root into a pair that
/// differs at roughly `sqrt(eps)` of its magnitude, hence the loose bound.
pub const ROOT_DEDUP_TOL: Tolerances = Tolerances {
    abs: 1e-6,
    rel: 1e-6,
};

/// A root whose imaginary part is within this bound (relative to the
/// magnitude of its real part) counts as real.
pub const ROOT_IMAG_TOL: Tolerances = Tolerances {
    abs: 1e-6,
    rel: 1e-6,
};

/// Leading polynomial coefficients smaller than this fraction of the
/// largest coefficient are treated as zero when computing roots.
pub const LEADING_COEFF_EPS: Real = 1e-14;

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Whether `im` is negligible next to `re`.
pub fn negligible_imag(re: Real, im: Real, tol: Tolerances) -> bool {
    im.abs() <= tol.abs.max(tol.rel * re.abs())
}

/// Sort and drop values that are `nearly_equal` to their predecessor.
pub fn dedup_sorted(mut values: Vec<Real>, tol: Tolerances) -> Vec<Real> {
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup_by(|b, a| nearly_equal(*a, *b, tol));
    values
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ConfigError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ConfigError::NonFinite { what, value: v })
    }
}

pub fn ensure_all_finite(vs: &[Real], what: &'static str) -> Result<(), ConfigError> {
    for &v in vs {
        ensure_finite(v, what)?;
    }
    Ok(())
}
