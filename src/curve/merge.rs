//! Spline fit through the anchors and UV boundary, plus final assembly.

use crate::curve::wavelength::WavelengthPartition;
use crate::domain::CurveSegment;
use crate::error::ExtinctionError;
use crate::math::CubicBSpline;

/// Fit the interpolating cubic spline through `anchors` followed by the UV
/// boundary points.
///
/// The boundary coordinates lie blueward of every anchor, so the concatenation
/// is already sorted.
pub fn fit_control_spline(
    anchors: &CurveSegment,
    uv_boundary: &CurveSegment,
) -> Result<CubicBSpline, ExtinctionError> {
    let control = anchors.clone().chain(uv_boundary);
    tracing::debug!(control_points = control.len(), "fitting optical/NIR spline");
    CubicBSpline::interpolate(&control.x, &control.y)
}

/// Optical/NIR curve values at `optical_x`.
///
/// With no optical/NIR inputs the spline is never built.
pub fn evaluate_optical(
    anchors: &CurveSegment,
    uv_boundary: &CurveSegment,
    optical_x: &[f64],
) -> Result<Vec<f64>, ExtinctionError> {
    if optical_x.is_empty() {
        return Ok(Vec::new());
    }
    let spline = fit_control_spline(anchors, uv_boundary)?;
    spline.evaluate_all(optical_x)
}

/// Scatter the UV and optical/NIR values back into input order.
pub fn scatter(partition: &WavelengthPartition, uv_values: &[f64], optical_values: &[f64]) -> Vec<f64> {
    debug_assert_eq!(partition.uv.len(), uv_values.len());
    debug_assert_eq!(partition.optical.len(), optical_values.len());

    let mut curve = vec![0.0; partition.len()];
    for (&i, &v) in partition.uv.iter().zip(uv_values) {
        curve[i] = v;
    }
    for (&i, &v) in partition.optical.iter().zip(optical_values) {
        curve[i] = v;
    }
    curve
}

/// `A(λ)/A(ref) = curve / Rv`.
pub fn normalize(curve: &[f64], rv: f64) -> Vec<f64> {
    curve.iter().map(|v| v / rv).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::anchors::build_anchor_curve;
    use crate::curve::uv::evaluate_uv;
    use crate::curve::wavelength::map_wavelengths;
    use crate::domain::LawVariant;

    #[test]
    fn spline_meets_uv_boundary_exactly() {
        for variant in LawVariant::ALL {
            let params = variant.parameters();
            let anchors = build_anchor_curve(&params, 3.1);
            let uv = evaluate_uv(&params, 3.1, &[]);
            let spline = fit_control_spline(&anchors, &uv.boundary).unwrap();

            for (&x, &y) in uv.boundary.x.iter().zip(&uv.boundary.y) {
                assert!((spline.evaluate(x) - y).abs() < 1e-9);
            }
            for (&x, &y) in anchors.x.iter().zip(&anchors.y) {
                assert!((spline.evaluate(x) - y).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn no_optical_inputs_skips_spline() {
        // Two control points cannot carry a cubic spline; skipping must not fail.
        let mut anchors = CurveSegment::default();
        anchors.push(0.0, 0.0);
        let mut boundary = CurveSegment::default();
        boundary.push(3.7, 6.0);

        assert!(fit_control_spline(&anchors, &boundary).is_err());
        let out = evaluate_optical(&anchors, &boundary, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn scatter_restores_input_order() {
        let partition = map_wavelengths(&[5000.0, 1500.0, 10000.0, 2000.0], 10_000.0 / 2700.0).unwrap();
        let curve = scatter(&partition, &[10.0, 20.0], &[1.0, 2.0]);
        assert_eq!(curve, vec![1.0, 10.0, 2.0, 20.0]);
        assert_eq!(normalize(&curve, 2.0), vec![0.5, 5.0, 1.0, 10.0]);
    }
}
