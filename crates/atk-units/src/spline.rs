//! Monotone piecewise-cubic Hermite interpolation (PCHIP).
//!
//! Knot derivatives follow Fritsch-Carlson: a weighted harmonic mean of the
//! neighbouring secant slopes at interior knots (zero at local extrema), and
//! a one-sided three-point estimate at the ends, clipped to preserve shape.
//! Outside `[x[0], x[n-1]]` the end pieces are extended.

use atk_core::{ConfigError, ConfigResult, ROOT_DEDUP_TOL, Real, dedup_sorted, ensure_all_finite};

use crate::roots::real_roots;

/// Relative slack when deciding whether a piece root lies on its interval.
const INTERVAL_SLACK: Real = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct PchipSpline {
    x: Vec<Real>,
    y: Vec<Real>,
    d: Vec<Real>,
}

impl PchipSpline {
    /// Build the interpolant through `(x, y)`.
    ///
    /// # Errors
    ///
    /// Fails if the slices differ in length, hold fewer than two points,
    /// contain non-finite values, or `x` is not strictly increasing.
    pub fn new(x: &[Real], y: &[Real]) -> ConfigResult<Self> {
        if x.len() != y.len() {
            return Err(ConfigError::LengthMismatch {
                what: "pchip x and y",
                left: x.len(),
                right: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(ConfigError::TooFewPoints {
                what: "pchip",
                len: x.len(),
                min: 2,
            });
        }
        ensure_all_finite(x, "pchip x")?;
        ensure_all_finite(y, "pchip y")?;
        if let Some(index) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ConfigError::NotStrictlyIncreasing {
                what: "pchip x",
                index: index + 1,
            });
        }

        let d = derivatives(x, y);
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            d,
        })
    }

    pub fn x(&self) -> &[Real] {
        &self.x
    }

    pub fn y(&self) -> &[Real] {
        &self.y
    }

    /// Knot derivatives.
    pub fn slopes(&self) -> &[Real] {
        &self.d
    }

    /// Index of the piece used to evaluate `v`.
    fn piece_index(&self, v: Real) -> usize {
        let last = self.x.len() - 2;
        self.x
            .partition_point(|&xi| xi <= v)
            .saturating_sub(1)
            .min(last)
    }

    /// Local cubic of piece `i` in `t = v - x[i]`, highest degree first.
    fn piece(&self, i: usize) -> [Real; 4] {
        let h = self.x[i + 1] - self.x[i];
        let m = (self.y[i + 1] - self.y[i]) / h;
        let (d0, d1) = (self.d[i], self.d[i + 1]);
        let c2 = (3.0 * m - 2.0 * d0 - d1) / h;
        let c3 = (d0 + d1 - 2.0 * m) / (h * h);
        [c3, c2, d0, self.y[i]]
    }

    pub fn eval(&self, v: Real) -> Real {
        let i = self.piece_index(v);
        let [c3, c2, c1, c0] = self.piece(i);
        let t = v - self.x[i];
        c0 + t * (c1 + t * (c2 + t * c3))
    }

    /// Real zero crossings of the interpolant through `(x, y - level)`,
    /// ascending and deduplicated.
    ///
    /// The derivative estimates are invariant under a vertical shift, so the
    /// shifted interpolant is this one with each piece lowered by `level`.
    pub fn solve(&self, level: Real) -> Vec<Real> {
        let pieces = self.x.len() - 1;
        let mut crossings = Vec::new();
        for i in 0..pieces {
            let h = self.x[i + 1] - self.x[i];
            let slack = INTERVAL_SLACK * h;
            let lo = if i == 0 { Real::NEG_INFINITY } else { -slack };
            let hi = if i + 1 == pieces {
                Real::INFINITY
            } else {
                h + slack
            };
            let [c3, c2, c1, c0] = self.piece(i);
            crossings.extend(
                real_roots(&[c3, c2, c1, c0 - level])
                    .into_iter()
                    .filter(|t| *t >= lo && *t <= hi)
                    .map(|t| {
                        // Snap crossings that land on a knot within rounding.
                        if t.abs() <= slack {
                            self.x[i]
                        } else if (t - h).abs() <= slack {
                            self.x[i + 1]
                        } else {
                            self.x[i] + t
                        }
                    }),
            );
        }
        dedup_sorted(crossings, ROOT_DEDUP_TOL)
    }
}

fn derivatives(x: &[Real], y: &[Real]) -> Vec<Real> {
    let n = x.len();
    let h: Vec<Real> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let m: Vec<Real> = y
        .windows(2)
        .zip(&h)
        .map(|(w, hk)| (w[1] - w[0]) / hk)
        .collect();

    if n == 2 {
        return vec![m[0], m[0]];
    }

    let mut d = vec![0.0; n];
    for k in 1..n - 1 {
        let (m0, m1) = (m[k - 1], m[k]);
        if m0 * m1 <= 0.0 {
            continue;
        }
        let w1 = 2.0 * h[k] + h[k - 1];
        let w2 = h[k] + 2.0 * h[k - 1];
        d[k] = (w1 + w2) / (w1 / m0 + w2 / m1);
    }
    d[0] = edge_slope(h[0], h[1], m[0], m[1]);
    d[n - 1] = edge_slope(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);
    d
}

/// Three-point end derivative, clipped so the end piece stays shape-preserving.
fn edge_slope(h0: Real, h1: Real, m0: Real, m1: Real) -> Real {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if d.signum() != m0.signum() || d == 0.0 || m0 == 0.0 {
        0.0
    } else if m0.signum() != m1.signum() && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}
