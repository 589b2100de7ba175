//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during curve construction
//! - loaded from JSON to describe custom laws
//! - exported to downstream tools alongside computed curves

use serde::{Deserialize, Serialize};

use crate::error::ExtinctionError;
use crate::math::polyval;

/// Converts Angstrom to inverse microns: `x = 10000 / λ`.
pub const ANGSTROM_PER_MICRON: f64 = 10_000.0;

/// Rv at which the fixed near-IR ratios are tabulated.
pub const FIXED_RATIO_RV: f64 = 3.1;

/// Inverse-micron coordinate of a wavelength given in Angstrom.
pub fn inverse_micron(wavelength: f64) -> f64 {
    ANGSTROM_PER_MICRON / wavelength
}

/// Built-in law presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawVariant {
    /// R136 UV curve with Fitzpatrick (1999) optical/NIR anchors, normalized to A(V).
    R136Fitzpatrick,
    /// R136 UV curve with Maíz Apellániz et al. (2014) optical/NIR shape,
    /// parameterized by R5495 and normalized to A(5495).
    R136MaizApellaniz,
}

impl LawVariant {
    pub const ALL: [LawVariant; 2] = [LawVariant::R136Fitzpatrick, LawVariant::R136MaizApellaniz];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            LawVariant::R136Fitzpatrick => "R136 (Fitzpatrick 1999 optical/NIR)",
            LawVariant::R136MaizApellaniz => "R136 (Maiz Apellaniz 2014 optical/NIR)",
        }
    }
}

/// How an anchor's curve value depends on Rv.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorRule {
    /// `value = ratio * Rv / 3.1`.
    FixedRatio(f64),
    /// `value = Σ a_k Rv^k`, coefficients low-to-high.
    Polynomial(Vec<f64>),
}

impl AnchorRule {
    pub fn evaluate(&self, rv: f64) -> f64 {
        match self {
            AnchorRule::FixedRatio(ratio) => ratio * rv / FIXED_RATIO_RV,
            AnchorRule::Polynomial(coeffs) => polyval(coeffs, rv),
        }
    }

    fn coefficients(&self) -> &[f64] {
        match self {
            AnchorRule::FixedRatio(ratio) => std::slice::from_ref(ratio),
            AnchorRule::Polynomial(coeffs) => coeffs,
        }
    }
}

/// A fixed optical/NIR wavelength with a tabulated Rv-dependent value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Wavelength in Angstrom.
    pub wavelength: f64,
    pub rule: AnchorRule,
}

impl Anchor {
    pub fn ratio(wavelength: f64, ratio: f64) -> Self {
        Self {
            wavelength,
            rule: AnchorRule::FixedRatio(ratio),
        }
    }

    pub fn polynomial(wavelength: f64, coeffs: &[f64]) -> Self {
        Self {
            wavelength,
            rule: AnchorRule::Polynomial(coeffs.to_vec()),
        }
    }
}

/// Coefficients of the closed-form UV formula.
///
/// `c1` is not stored: it is always `2.030 - 3.007 * c2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UvCoefficients {
    /// Linear slope as a polynomial in Rv (low-to-high). A single entry means
    /// the slope does not depend on Rv.
    pub c2: Vec<f64>,
    /// Bump strength.
    pub c3: f64,
    /// Far-UV curvature strength.
    pub c4: f64,
    /// Far-UV curvature onset (μm⁻¹).
    pub c5: f64,
    /// Bump center (μm⁻¹).
    pub x0: f64,
    /// Bump width (μm⁻¹).
    pub gamma: f64,
}

/// Everything that distinguishes one extinction law from another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawParameters {
    pub name: String,
    /// The band the output is normalized to, e.g. `A(V)`.
    pub reference: String,
    pub uv: UvCoefficients,
    /// Wavelengths at or below this (Å) use the UV formula.
    pub uv_cutoff: f64,
    /// UV wavelengths (Å) whose formula values pin the spline's blue end.
    pub uv_boundary: [f64; 2],
    /// Optical/NIR anchors, ordered red to blue. The zero-frequency anchor
    /// `(x = 0, value = 0)` is implied and must not be listed.
    pub anchors: Vec<Anchor>,
}

impl LawParameters {
    /// Load a custom law from JSON text and validate it.
    pub fn from_json(text: &str) -> Result<Self, ExtinctionError> {
        let params: LawParameters = serde_json::from_str(text)
            .map_err(|e| ExtinctionError::invalid(format!("Invalid law JSON: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String, ExtinctionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExtinctionError::invalid(format!("Failed to serialize law: {e}")))
    }

    /// UV cutoff in inverse microns.
    pub fn uv_cutoff_x(&self) -> f64 {
        inverse_micron(self.uv_cutoff)
    }

    /// UV boundary coordinates in inverse microns.
    pub fn uv_boundary_x(&self) -> [f64; 2] {
        [
            inverse_micron(self.uv_boundary[0]),
            inverse_micron(self.uv_boundary[1]),
        ]
    }

    /// Number of spline control points: zero anchor + table + two UV points.
    pub fn control_point_count(&self) -> usize {
        self.anchors.len() + 3
    }

    /// Check the invariants the curve construction relies on.
    pub fn validate(&self) -> Result<(), ExtinctionError> {
        let uv = &self.uv;
        if uv.c2.is_empty() {
            return Err(ExtinctionError::invalid(format!(
                "Law '{}': c2 polynomial has no coefficients.",
                self.name
            )));
        }
        let scalars = [uv.c3, uv.c4, uv.c5, uv.x0, uv.gamma];
        if uv.c2.iter().chain(scalars.iter()).any(|v| !v.is_finite()) {
            return Err(ExtinctionError::invalid(format!(
                "Law '{}': UV coefficients must be finite.",
                self.name
            )));
        }

        let cutoff_ok = self.uv_cutoff.is_finite() && self.uv_cutoff > 0.0;
        let boundary_ok = self.uv_boundary.iter().all(|w| w.is_finite() && *w > 0.0);
        if !(cutoff_ok && boundary_ok) {
            return Err(ExtinctionError::invalid(format!(
                "Law '{}': UV cutoff and boundary wavelengths must be finite and > 0.",
                self.name
            )));
        }
        let [b0, b1] = self.uv_boundary_x();
        if b1 <= b0 {
            return Err(ExtinctionError::invalid(format!(
                "Law '{}': UV boundary wavelengths must decrease ({} Å then {} Å).",
                self.name, self.uv_boundary[0], self.uv_boundary[1]
            )));
        }

        if self.control_point_count() < crate::math::DEGREE + 1 {
            return Err(ExtinctionError::invalid(format!(
                "Law '{}': needs at least {} anchors for a cubic spline, got {}.",
                self.name,
                crate::math::DEGREE + 1 - 3,
                self.anchors.len()
            )));
        }

        let mut prev_x = 0.0;
        for (i, anchor) in self.anchors.iter().enumerate() {
            if !(anchor.wavelength.is_finite() && anchor.wavelength > 0.0) {
                return Err(ExtinctionError::invalid(format!(
                    "Law '{}': anchor {i} wavelength {} must be finite and > 0.",
                    self.name, anchor.wavelength
                )));
            }
            let coeffs = anchor.rule.coefficients();
            if coeffs.is_empty() || coeffs.iter().any(|c| !c.is_finite()) {
                return Err(ExtinctionError::invalid(format!(
                    "Law '{}': anchor {i} at {} Å needs finite, non-empty coefficients.",
                    self.name, anchor.wavelength
                )));
            }
            let x = inverse_micron(anchor.wavelength);
            if x <= prev_x {
                return Err(ExtinctionError::invalid(format!(
                    "Law '{}': anchor {i} at {} Å is out of order (anchors run red to blue).",
                    self.name, anchor.wavelength
                )));
            }
            prev_x = x;
        }
        if prev_x >= b0 {
            return Err(ExtinctionError::invalid(format!(
                "Law '{}': bluest anchor must lie redward of the UV boundary at {} Å.",
                self.name, self.uv_boundary[0]
            )));
        }

        Ok(())
    }
}

/// One input wavelength with its derived coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthSample {
    /// Angstrom.
    pub wavelength: f64,
    /// Inverse microns.
    pub x: f64,
    pub is_uv: bool,
}

/// Ordered `(x, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSegment {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CurveSegment {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Append `other` after `self`.
    pub fn chain(mut self, other: &CurveSegment) -> Self {
        self.x.extend_from_slice(&other.x);
        self.y.extend_from_slice(&other.y);
        self
    }
}

/// A fully evaluated extinction curve.
///
/// `a_over_ebv` is the un-normalized curve `A(λ)/E(B-V) = k(λ-V) + Rv`;
/// `normalized` is `A(λ)/A(ref) = a_over_ebv / Rv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtinctionCurve {
    pub law: String,
    pub reference: String,
    pub rv: f64,
    pub wavelengths: Vec<f64>,
    pub inverse_microns: Vec<f64>,
    pub a_over_ebv: Vec<f64>,
    pub normalized: Vec<f64>,
}

impl ExtinctionCurve {
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// `E(λ-V)/E(B-V) = A(λ)/E(B-V) - Rv`.
    pub fn color_excess_ratio(&self) -> Vec<f64> {
        self.a_over_ebv.iter().map(|v| v - self.rv).collect()
    }

    /// Absolute extinction `A(λ)` in magnitudes for a given `A(ref)`.
    pub fn attenuation(&self, a_ref: f64) -> Vec<f64> {
        self.normalized.iter().map(|v| v * a_ref).collect()
    }
}
