//! Optical/NIR anchor curve.

use crate::domain::{CurveSegment, LawParameters, inverse_micron};

/// Anchor curve values for one Rv.
///
/// The first point is always the zero-frequency anchor `(0, 0)`; the rest follow
/// the law's table in increasing inverse-micron order. Each anchor is evaluated
/// on its own rule.
pub fn build_anchor_curve(params: &LawParameters, rv: f64) -> CurveSegment {
    let mut curve = CurveSegment::with_capacity(params.anchors.len() + 1);
    curve.push(0.0, 0.0);
    for anchor in &params.anchors {
        curve.push(inverse_micron(anchor.wavelength), anchor.rule.evaluate(rv));
    }
    curve
}
