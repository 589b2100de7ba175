//! Closed-form ultraviolet extinction.
//!
//! ```text
//! y(x) = c1 + c2*x + c3*x^2 / ((x^2 - x0^2)^2 + (x*γ)^2) + c4*F(x) + Rv
//! F(x) = 0.5392*(max(x,c5) - c5)^2 + 0.05644*(max(x,c5) - c5)^3
//! c1   = 2.030 - 3.007*c2
//! ```
//!
//! `y` is `A(λ)/E(B-V)`; normalization by Rv happens at assembly.

use crate::domain::{CurveSegment, LawParameters, UvCoefficients};
use crate::math::polyval;

/// `c1 = C1_INTERCEPT - C1_SLOPE * c2`.
pub const C1_INTERCEPT: f64 = 2.030;
pub const C1_SLOPE: f64 = 3.007;

const FUV_QUADRATIC: f64 = 0.5392;
const FUV_CUBIC: f64 = 0.05644;

/// UV coefficients resolved for one Rv.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvTerms {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
    pub x0: f64,
    pub gamma: f64,
    pub rv: f64,
}

impl UvTerms {
    pub fn resolve(coeffs: &UvCoefficients, rv: f64) -> Self {
        let c2 = polyval(&coeffs.c2, rv);
        Self {
            c1: C1_INTERCEPT - C1_SLOPE * c2,
            c2,
            c3: coeffs.c3,
            c4: coeffs.c4,
            c5: coeffs.c5,
            x0: coeffs.x0,
            gamma: coeffs.gamma,
            rv,
        }
    }

    /// Evaluate `y(x)` exactly as written; the only clamp is `max(x, c5)`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let x2 = x * x;
        let bump = self.c3 * x2 / ((x2 - self.x0 * self.x0).powi(2) + (x * self.gamma).powi(2));
        let d = x.max(self.c5) - self.c5;
        let fuv = FUV_QUADRATIC * d * d + FUV_CUBIC * d * d * d;
        self.c1 + self.c2 * x + bump + self.c4 * fuv + self.rv
    }
}

/// Output of the UV stage.
#[derive(Debug, Clone, PartialEq)]
pub struct UvEvaluation {
    /// The two boundary points used to pin the spline.
    pub boundary: CurveSegment,
    /// Values at the UV inputs, in the order given.
    pub values: Vec<f64>,
}

/// Evaluate the UV formula at the law's two boundary coordinates and at `uv_x`.
pub fn evaluate_uv(params: &LawParameters, rv: f64, uv_x: &[f64]) -> UvEvaluation {
    let terms = UvTerms::resolve(&params.uv, rv);

    let mut boundary = CurveSegment::with_capacity(2);
    for x in params.uv_boundary_x() {
        boundary.push(x, terms.evaluate(x));
    }

    let values = uv_x.iter().map(|&x| terms.evaluate(x)).collect();
    tracing::trace!(c1 = terms.c1, c2 = terms.c2, n = uv_x.len(), "evaluated UV formula");

    UvEvaluation { boundary, values }
}
