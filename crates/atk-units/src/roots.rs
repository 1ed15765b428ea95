//! Real roots of dense polynomials.
//!
//! Coefficients are ordered highest degree first. Degrees one and two are
//! solved in closed form; higher degrees use the eigenvalues of the
//! companion matrix.

use atk_core::{
    LEADING_COEFF_EPS, ROOT_DEDUP_TOL, ROOT_IMAG_TOL, Real, dedup_sorted, negligible_imag,
};
use nalgebra::DMatrix;

/// Evaluate a polynomial (highest degree first) with Horner's scheme.
pub fn eval_poly(coeffs: &[Real], x: Real) -> Real {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Drop leading coefficients that are negligible next to the largest
/// non-constant one. The constant term is left out of the scale so that a
/// large offset cannot erase the terms that carry the roots.
fn trim_leading(coeffs: &[Real]) -> &[Real] {
    let non_constant = &coeffs[..coeffs.len().saturating_sub(1)];
    let scale = non_constant.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    let cutoff = scale * LEADING_COEFF_EPS;
    let start = coeffs
        .iter()
        .position(|c| c.abs() > cutoff)
        .unwrap_or(coeffs.len());
    &coeffs[start..]
}

/// All distinct real roots, ascending.
///
/// Roots with a non-negligible imaginary part are discarded and
/// numerically-equal roots are merged (see [`ROOT_IMAG_TOL`] and
/// [`ROOT_DEDUP_TOL`]). A constant polynomial has no roots, even when it is
/// identically zero.
pub fn real_roots(coeffs: &[Real]) -> Vec<Real> {
    let p = trim_leading(coeffs);
    let roots = match p.len() {
        0 | 1 => Vec::new(),
        2 => vec![-p[1] / p[0]],
        3 => quadratic_roots(p[0], p[1], p[2]),
        _ => companion_roots(p),
    };
    dedup_sorted(roots, ROOT_DEDUP_TOL)
}

fn quadratic_roots(a: Real, b: Real, c: Real) -> Vec<Real> {
    let mut disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        // A double root perturbed by rounding lands slightly negative.
        let re = -b / (2.0 * a);
        let im = (-disc).sqrt() / (2.0 * a.abs());
        if !negligible_imag(re, im, ROOT_IMAG_TOL) {
            return Vec::new();
        }
        disc = 0.0;
    }
    let sign = if b < 0.0 { -1.0 } else { 1.0 };
    let q = -0.5 * (b + sign * disc.sqrt());
    if q == 0.0 {
        vec![0.0]
    } else {
        vec![q / a, c / q]
    }
}

fn companion_roots(p: &[Real]) -> Vec<Real> {
    let n = p.len() - 1;
    let lead = p[0];
    let mut companion = DMatrix::<Real>::zeros(n, n);
    for j in 0..n {
        companion[(0, j)] = -p[j + 1] / lead;
    }
    for i in 1..n {
        companion[(i, i - 1)] = 1.0;
    }
    companion
        .complex_eigenvalues()
        .iter()
        .filter(|z| z.re.is_finite() && negligible_imag(z.re, z.im, ROOT_IMAG_TOL))
        .map(|z| polish(p, z.re))
        .collect()
}

/// A few guarded Newton steps; a step is kept only if it shrinks |p(x)|.
fn polish(p: &[Real], mut x: Real) -> Real {
    let n = p.len() - 1;
    let dp: Vec<Real> = p[..n]
        .iter()
        .enumerate()
        .map(|(i, &c)| c * (n - i) as Real)
        .collect();
    let mut fx = eval_poly(p, x);
    for _ in 0..3 {
        let slope = eval_poly(&dp, x);
        if fx == 0.0 || slope == 0.0 {
            break;
        }
        let candidate = x - fx / slope;
        let fc = eval_poly(p, candidate);
        if fc.abs() >= fx.abs() {
            break;
        }
        x = candidate;
        fx = fc;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_roots(actual: &[Real], expected: &[Real]) {
        assert_eq!(actual.len(), expected.len(), "roots {actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "root {a} vs {e}");
        }
    }

    #[test]
    fn horner_matches_expansion() {
        // 2x^2 - 3x + 1 at x = 2
        assert_eq!(eval_poly(&[2.0, -3.0, 1.0], 2.0), 3.0);
        assert_eq!(eval_poly(&[], 2.0), 0.0);
    }

    #[test]
    fn linear_root_is_exact() {
        assert_eq!(real_roots(&[2.0, -4.7]), vec![2.35]);
    }

    #[test]
    fn large_constant_does_not_trim_leading_term() {
        assert_eq!(real_roots(&[2.0, -4.0e20]), vec![2.0e20]);
    }

    #[test]
    fn constant_has_no_roots() {
        assert!(real_roots(&[5.0]).is_empty());
        assert!(real_roots(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn quadratic_two_roots() {
        assert_roots(&real_roots(&[1.0, 0.0, -4.0]), &[-2.0, 2.0]);
    }

    #[test]
    fn quadratic_complex_roots_discarded() {
        assert!(real_roots(&[1.0, 0.0, 4.0]).is_empty());
    }

    #[test]
    fn quadratic_near_double_root_with_small_imag_part_discarded() {
        // x^2 - 2x + 1.000001 has roots 1 +- 0.001i.
        assert!(real_roots(&[1.0, -2.0, 1.000001]).is_empty());
    }

    #[test]
    fn quadratic_rounded_double_root_kept() {
        // Imaginary part 1e-7, inside the tolerance.
        let roots = real_roots(&[1.0, -2.0, 1.0 + 1e-14]);
        assert_eq!(roots.len(), 1, "roots {roots:?}");
        assert!((roots[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn quadratic_double_root_merged() {
        assert_roots(&real_roots(&[1.0, -2.0, 1.0]), &[1.0]);
    }

    #[test]
    fn leading_zero_reduces_degree() {
        assert_roots(&real_roots(&[0.0, 0.0, 3.0, -6.0]), &[2.0]);
    }

    #[test]
    fn cubic_three_real_roots() {
        // (x + 1)(x - 1)(x - 3) = x^3 - 3x^2 - x + 3
        assert_roots(&real_roots(&[1.0, -3.0, -1.0, 3.0]), &[-1.0, 1.0, 3.0]);
    }

    #[test]
    fn cubic_one_real_two_complex() {
        // (x - 2)(x^2 + 1) = x^3 - 2x^2 + x - 2
        assert_roots(&real_roots(&[1.0, -2.0, 1.0, -2.0]), &[2.0]);
    }

    #[test]
    fn quartic_repeated_root_deduplicated() {
        // (x - 1)^2 (x + 2)(x - 5)
        // = (x^2 - 2x + 1)(x^2 - 3x - 10)
        // = x^4 - 5x^3 - 3x^2 + 17x - 10
        let roots = real_roots(&[1.0, -5.0, -3.0, 17.0, -10.0]);
        assert_eq!(roots.len(), 3, "roots {roots:?}");
        assert!((roots[0] + 2.0).abs() < 1e-9);
        assert!((roots[1] - 1.0).abs() < 1e-6);
        assert!((roots[2] - 5.0).abs() < 1e-9);
    }
}
