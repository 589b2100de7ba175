//! Shared curve pipeline used by every law.
//!
//! Keeping this in one place avoids duplicating the core workflow per law:
//! wavelength mapping -> UV formula -> anchor curve -> spline merge -> normalize
//!
//! Laws differ only in their `LawParameters`.

use std::ops::RangeInclusive;

use rayon::prelude::*;

use crate::curve::{build_anchor_curve, evaluate_optical, evaluate_uv, map_wavelengths, normalize, scatter};
use crate::domain::{ExtinctionCurve, LawParameters, LawVariant};
use crate::error::ExtinctionError;
use crate::math::log_space;

/// Rv values the law tables were calibrated over. Values outside are still
/// evaluated, with a warning.
pub const RV_TYPICAL_RANGE: RangeInclusive<f64> = 2.0..=6.0;

/// A validated extinction law, ready to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtinctionLaw {
    params: LawParameters,
}

impl ExtinctionLaw {
    /// Wrap custom parameters after checking their invariants.
    pub fn new(params: LawParameters) -> Result<Self, ExtinctionError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn from_variant(variant: LawVariant) -> Self {
        Self {
            params: variant.parameters(),
        }
    }

    pub fn params(&self) -> &LawParameters {
        &self.params
    }

    /// `A(λ)/A(ref)` for each wavelength (Å), in input order.
    pub fn extinction(&self, waves: &[f64], rv: f64) -> Result<Vec<f64>, ExtinctionError> {
        Ok(self.curve(waves, rv)?.normalized)
    }

    /// Evaluate the full curve, keeping the intermediate `A(λ)/E(B-V)` values.
    pub fn curve(&self, waves: &[f64], rv: f64) -> Result<ExtinctionCurve, ExtinctionError> {
        check_rv(rv)?;
        let partition = map_wavelengths(waves, self.params.uv_cutoff_x())?;
        tracing::debug!(
            law = %self.params.name,
            rv,
            n_uv = partition.uv.len(),
            n_optical = partition.optical.len(),
            "evaluating extinction curve"
        );

        let uv = evaluate_uv(&self.params, rv, &partition.uv_x());
        let anchors = build_anchor_curve(&self.params, rv);
        let optical = evaluate_optical(&anchors, &uv.boundary, &partition.optical_x())?;

        let a_over_ebv = scatter(&partition, &uv.values, &optical);
        let normalized = normalize(&a_over_ebv, rv);
        if let Some(i) = normalized.iter().position(|v| !v.is_finite()) {
            return Err(ExtinctionError::numerical(format!(
                "Non-finite extinction at {} Å.",
                partition.samples[i].wavelength
            )));
        }

        Ok(ExtinctionCurve {
            law: self.params.name.clone(),
            reference: self.params.reference.clone(),
            rv,
            wavelengths: partition.samples.iter().map(|s| s.wavelength).collect(),
            inverse_microns: partition.samples.iter().map(|s| s.x).collect(),
            a_over_ebv,
            normalized,
        })
    }

    /// Tabulate the curve on `steps` log-spaced wavelengths in `[min, max]` Å.
    pub fn sample_grid(
        &self,
        min: f64,
        max: f64,
        steps: usize,
        rv: f64,
    ) -> Result<ExtinctionCurve, ExtinctionError> {
        let waves = log_space(min, max, steps)?;
        self.curve(&waves, rv)
    }

    /// Evaluate one wavelength grid for many Rv values in parallel.
    ///
    /// Results are returned in `rvs` order; the first failing Rv aborts the batch.
    pub fn extinction_for_each_rv(
        &self,
        waves: &[f64],
        rvs: &[f64],
    ) -> Result<Vec<Vec<f64>>, ExtinctionError> {
        rvs.par_iter().map(|&rv| self.extinction(waves, rv)).collect()
    }
}

/// `A(λ)/A(ref)` for a built-in law.
pub fn extinction(variant: LawVariant, waves: &[f64], rv: f64) -> Result<Vec<f64>, ExtinctionError> {
    ExtinctionLaw::from_variant(variant).extinction(waves, rv)
}

fn check_rv(rv: f64) -> Result<(), ExtinctionError> {
    if !rv.is_finite() || rv == 0.0 {
        return Err(ExtinctionError::invalid(format!(
            "Rv must be finite and non-zero, got {rv}."
        )));
    }
    if !RV_TYPICAL_RANGE.contains(&rv) {
        tracing::warn!(
            rv,
            min = *RV_TYPICAL_RANGE.start(),
            max = *RV_TYPICAL_RANGE.end(),
            "Rv outside the calibrated range; anchor polynomials are extrapolated"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EXAMPLE_WAVES: [f64; 5] = [1500.0, 2700.0, 5495.0, 10000.0, 26500.0];

    #[test]
    fn example_scenario_fitzpatrick() {
        let out = extinction(LawVariant::R136Fitzpatrick, &EXAMPLE_WAVES, 3.1).unwrap();
        let expected = [
            3.0275416846760077,
            2.011082274704205,
            0.9790440627061328,
            0.37661830795150014,
            0.08538387096774193,
        ];

        assert_eq!(out.len(), 5);
        for (v, e) in out.iter().zip(expected.iter()) {
            assert!(v.is_finite());
            assert!((v - e).abs() < 1e-6, "got {v}, expected {e}");
        }
        for w in out.windows(2) {
            assert!(w[1] < w[0], "curve should fall from UV to far-IR: {out:?}");
        }
        assert!(out[4] < 0.1, "far-IR extinction should be small, got {}", out[4]);
    }

    #[test]
    fn example_scenario_maiz_apellaniz() {
        let out = extinction(LawVariant::R136MaizApellaniz, &EXAMPLE_WAVES, 3.1).unwrap();
        let expected = [
            3.2344403300858047,
            2.0513112950148384,
            0.9999354838709678,
            0.404,
            0.08411290322580645,
        ];
        for (v, e) in out.iter().zip(expected.iter()) {
            assert!((v - e).abs() < 1e-6, "got {v}, expected {e}");
        }
    }

    #[test]
    fn reference_band_scaling() {
        // R5495 law: 5495 Å is an anchor, so the spline reproduces it.
        for rv in [2.5, 3.1, 4.0, 5.5] {
            let v = extinction(LawVariant::R136MaizApellaniz, &[5495.0], rv).unwrap()[0];
            let expected = (rv - 0.0002) / rv;
            assert!(((v - expected) / expected).abs() < 1e-3, "rv={rv}: {v} vs {expected}");
        }

        // Rv law: 5470 Å is the V-band anchor.
        for rv in [2.5, 3.1, 4.0, 5.5] {
            let v = extinction(LawVariant::R136Fitzpatrick, &[5470.0], rv).unwrap()[0];
            let expected = (-5.13540e-02 + 1.00216 * rv - 7.35778e-05 * rv * rv) / rv;
            assert!(((v - expected) / expected).abs() < 1e-3, "rv={rv}: {v} vs {expected}");
        }
    }

    #[test]
    fn continuous_across_uv_cutoff() {
        for variant in LawVariant::ALL {
            let law = ExtinctionLaw::from_variant(variant);
            for rv in [2.0, 3.1, 4.2, 5.5] {
                let out = law.extinction(&[2699.9, 2700.0, 2700.1], rv).unwrap();
                assert!(
                    (out[0] - out[2]).abs() < 1e-2,
                    "{} rv={rv}: jump at UV cutoff {out:?}",
                    variant.display_name()
                );
                assert!((out[1] - out[2]).abs() < 1e-2);
            }
        }
    }

    #[test]
    fn all_uv_and_all_optical_inputs() {
        for variant in LawVariant::ALL {
            let law = ExtinctionLaw::from_variant(variant);

            let uv = law.curve(&[1200.0, 1800.0, 2500.0], 3.1).unwrap();
            assert_eq!(uv.len(), 3);
            assert!(uv.normalized.iter().all(|v| v.is_finite() && *v > 1.0));

            let optical = law.curve(&[3000.0, 5000.0, 9000.0, 22000.0], 3.1).unwrap();
            assert_eq!(optical.len(), 4);
            assert!(optical.normalized.iter().all(|v| v.is_finite() && *v > 0.0));
        }
    }

    #[test]
    fn all_uv_input_never_builds_spline() {
        // Without table anchors the spline cannot be built, yet pure-UV input
        // still evaluates.
        let mut params = LawVariant::R136Fitzpatrick.parameters();
        params.anchors.clear();
        let law = ExtinctionLaw { params };

        let out = law.extinction(&[1300.0, 2200.0], 3.1).unwrap();
        assert_eq!(out.len(), 2);
        let err = law.extinction(&[5000.0], 3.1).unwrap_err();
        assert!(err.is_invalid_input(), "{err}");
    }

    #[test]
    fn single_element_input() {
        let out = extinction(LawVariant::R136MaizApellaniz, &[4405.0], 3.1).unwrap();
        assert_eq!(out.len(), 1);
        assert!((out[0] - (1.0004 + 3.1) / 3.1).abs() < 1e-9);
    }

    #[test]
    fn deterministic_output() {
        let law = ExtinctionLaw::from_variant(LawVariant::R136Fitzpatrick);
        let waves = [1234.5, 3456.7, 8000.0, 2700.0, 19000.0];
        let a = law.extinction(&waves, 3.7).unwrap();
        let b = law.extinction(&waves, 3.7).unwrap();
        let a_bits: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
        let b_bits: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
        assert_eq!(a_bits, b_bits);
    }

    #[test]
    fn order_matches_elementwise_evaluation() {
        let mut rng = StdRng::seed_from_u64(42);
        for variant in LawVariant::ALL {
            let law = ExtinctionLaw::from_variant(variant);
            let waves: Vec<f64> = (0..64).map(|_| rng.gen_range(1000.0..30000.0)).collect();
            let rv = rng.gen_range(2.0..6.0);

            let batch = law.extinction(&waves, rv).unwrap();
            assert_eq!(batch.len(), waves.len());
            for (i, &w) in waves.iter().enumerate() {
                let single = law.extinction(&[w], rv).unwrap()[0];
                assert_eq!(single.to_bits(), batch[i].to_bits(), "mismatch at {w} Å");
            }
        }
    }

    #[test]
    fn rejects_invalid_input() {
        let law = ExtinctionLaw::from_variant(LawVariant::R136Fitzpatrick);
        assert!(law.extinction(&[], 3.1).unwrap_err().is_invalid_input());
        assert!(law.extinction(&[5000.0, 0.0], 3.1).unwrap_err().is_invalid_input());
        assert!(law.extinction(&[-5000.0], 3.1).unwrap_err().is_invalid_input());
        assert!(law.extinction(&[5000.0], 0.0).unwrap_err().is_invalid_input());
        assert!(law.extinction(&[5000.0], f64::NAN).unwrap_err().is_invalid_input());
        assert!(law.extinction(&[5000.0], f64::INFINITY).unwrap_err().is_invalid_input());
    }

    #[test]
    fn out_of_range_rv_is_accepted() {
        let out = extinction(LawVariant::R136Fitzpatrick, &EXAMPLE_WAVES, 8.0).unwrap();
        assert!(out.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn curve_keeps_unnormalized_values() {
        let law = ExtinctionLaw::from_variant(LawVariant::R136Fitzpatrick);
        let curve = law.curve(&EXAMPLE_WAVES, 3.1).unwrap();
        assert_eq!(curve.reference, "A(V)");
        for (a, n) in curve.a_over_ebv.iter().zip(&curve.normalized) {
            assert!((a / 3.1 - n).abs() < 1e-12);
        }
        // E(λ-V)/E(B-V) at the UV cutoff: 6.2344 - 3.1.
        let excess = curve.color_excess_ratio();
        assert!((excess[1] - (6.234355051583036 - 3.1)).abs() < 1e-9);
    }

    #[test]
    fn sample_grid_spans_range() {
        let law = ExtinctionLaw::from_variant(LawVariant::R136MaizApellaniz);
        let curve = law.sample_grid(1000.0, 30000.0, 50, 3.1).unwrap();
        assert_eq!(curve.len(), 50);
        assert!((curve.wavelengths[0] - 1000.0).abs() < 1e-9);
        assert_eq!(curve.wavelengths[49], 30000.0);
        assert!(law.sample_grid(1000.0, 30000.0, 1, 3.1).is_err());
    }

    #[test]
    fn batch_over_rv_matches_individual_calls() {
        let law = ExtinctionLaw::from_variant(LawVariant::R136Fitzpatrick);
        let rvs = [2.2, 3.1, 4.0, 5.0, 5.9];
        let batch = law.extinction_for_each_rv(&EXAMPLE_WAVES, &rvs).unwrap();
        assert_eq!(batch.len(), rvs.len());
        for (row, &rv) in batch.iter().zip(&rvs) {
            assert_eq!(row, &law.extinction(&EXAMPLE_WAVES, rv).unwrap());
        }

        let err = law.extinction_for_each_rv(&EXAMPLE_WAVES, &[3.1, 0.0]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn custom_law_from_json() {
        let text = LawVariant::R136MaizApellaniz.parameters().to_json().unwrap();
        let params = LawParameters::from_json(&text).unwrap();
        let law = ExtinctionLaw::new(params).unwrap();
        let builtin = extinction(LawVariant::R136MaizApellaniz, &EXAMPLE_WAVES, 3.1).unwrap();
        let custom = law.extinction(&EXAMPLE_WAVES, 3.1).unwrap();
        for (a, b) in builtin.iter().zip(&custom) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
