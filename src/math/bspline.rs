//! Interpolating cubic B-spline.
//!
//! This reproduces the classic FITPACK `splrep`/`splev` behaviour for `k = 3`
//! without weights, where the default smoothing factor is `s = 0` and the
//! result is therefore an exact interpolant:
//!
//! - knots: `[x0; 4] ++ x[2..m-2] ++ [x_{m-1}; 4]` (equivalent to a
//!   not-a-knot cubic spline)
//! - coefficients: solution of the square collocation system `B c = y`
//! - evaluation outside `[x0, x_{m-1}]` continues the end polynomial pieces
//!
//! The collocation matrix is tiny (one row per control point), so we solve it
//! densely with an LU decomposition.

use nalgebra::{DMatrix, DVector};

use crate::error::ExtinctionError;

/// Spline degree. Fixed at cubic.
pub const DEGREE: usize = 3;

const ORDER: usize = DEGREE + 1;

#[derive(Debug, Clone)]
pub struct CubicBSpline {
    knots: Vec<f64>,
    coeffs: Vec<f64>,
}

impl CubicBSpline {
    /// Fit the interpolating spline through `(x_i, y_i)`.
    ///
    /// `x` must be finite and strictly increasing with at least four points.
    pub fn interpolate(x: &[f64], y: &[f64]) -> Result<Self, ExtinctionError> {
        let m = x.len();
        if m != y.len() {
            return Err(ExtinctionError::invalid(format!(
                "Spline needs equal-length inputs: {} x values vs {} y values.",
                m,
                y.len()
            )));
        }
        if m < ORDER {
            return Err(ExtinctionError::invalid(format!(
                "A cubic spline needs at least {ORDER} control points, got {m}."
            )));
        }
        if let Some(i) = x.iter().chain(y.iter()).position(|v| !v.is_finite()) {
            return Err(ExtinctionError::invalid(format!(
                "Non-finite spline control value at position {i}."
            )));
        }
        if let Some(i) = (1..m).find(|&i| x[i] <= x[i - 1]) {
            return Err(ExtinctionError::invalid(format!(
                "Spline x values must be strictly increasing (x[{}]={} <= x[{}]={}).",
                i,
                x[i],
                i - 1,
                x[i - 1]
            )));
        }

        let knots = interpolation_knots(x);
        let mut spline = Self {
            knots,
            coeffs: vec![0.0; m],
        };

        let mut b = DMatrix::<f64>::zeros(m, m);
        for (i, &xi) in x.iter().enumerate() {
            let l = spline.span(xi);
            let basis = spline.basis(l, xi);
            for (r, &v) in basis.iter().enumerate() {
                b[(i, l - DEGREE + r)] = v;
            }
        }
        let rhs = DVector::from_column_slice(y);

        let coeffs = b.lu().solve(&rhs).ok_or_else(|| {
            ExtinctionError::numerical("Spline collocation system is singular.")
        })?;
        if coeffs.iter().any(|c| !c.is_finite()) {
            return Err(ExtinctionError::numerical(
                "Spline fit produced non-finite coefficients.",
            ));
        }

        spline.coeffs = coeffs.iter().copied().collect();
        tracing::trace!(control_points = m, knots = spline.knots.len(), "fitted cubic spline");
        Ok(spline)
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluate the spline at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let l = self.span(x);
        let basis = self.basis(l, x);
        basis
            .iter()
            .enumerate()
            .map(|(r, &v)| v * self.coeffs[l - DEGREE + r])
            .sum()
    }

    /// Evaluate at every point in `xs`, failing on non-finite output.
    pub fn evaluate_all(&self, xs: &[f64]) -> Result<Vec<f64>, ExtinctionError> {
        xs.iter()
            .map(|&x| {
                let v = self.evaluate(x);
                if v.is_finite() {
                    Ok(v)
                } else {
                    Err(ExtinctionError::numerical(format!(
                        "Spline evaluation at x={x} is not finite."
                    )))
                }
            })
            .collect()
    }

    /// Index `l` of the knot interval `[t_l, t_{l+1})` used for `x`.
    ///
    /// Clamped to the valid range so that points outside the data range use the
    /// first/last polynomial piece.
    fn span(&self, x: f64) -> usize {
        let last = self.coeffs.len() - 1;
        let idx = self.knots.partition_point(|&t| t <= x);
        idx.saturating_sub(1).clamp(DEGREE, last)
    }

    /// Non-zero basis functions `B_{l-3}, ..., B_l` at `x` (Cox–de Boor).
    fn basis(&self, l: usize, x: f64) -> [f64; ORDER] {
        let t = &self.knots;
        let mut n = [0.0; ORDER];
        let mut left = [0.0; ORDER];
        let mut right = [0.0; ORDER];
        n[0] = 1.0;

        for j in 1..=DEGREE {
            left[j] = x - t[l + 1 - j];
            right[j] = t[l + j] - x;
            let mut saved = 0.0;
            for r in 0..j {
                let temp = n[r] / (right[r + 1] + left[j - r]);
                n[r] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }
            n[j] = saved;
        }
        n
    }
}

/// Knot vector for an interpolating cubic: clamped ends, interior knots at the
/// data points excluding the two nearest each end.
fn interpolation_knots(x: &[f64]) -> Vec<f64> {
    let m = x.len();
    let first = x[0];
    let last = x[m - 1];

    let mut knots = Vec::with_capacity(m + ORDER);
    knots.extend(std::iter::repeat_n(first, ORDER));
    knots.extend_from_slice(&x[2..m - 2]);
    knots.extend(std::iter::repeat_n(last, ORDER));
    knots
}
