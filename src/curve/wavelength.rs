//! Wavelength mapping and UV / optical-NIR partitioning.

use crate::domain::{WavelengthSample, inverse_micron};
use crate::error::ExtinctionError;

/// Input wavelengths split into the two curve regimes.
///
/// `uv` and `optical` hold indices into `samples`, each in input order, so the
/// evaluated segments can be scattered straight back.
#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthPartition {
    pub samples: Vec<WavelengthSample>,
    pub uv: Vec<usize>,
    pub optical: Vec<usize>,
}

impl WavelengthPartition {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn uv_x(&self) -> Vec<f64> {
        self.uv.iter().map(|&i| self.samples[i].x).collect()
    }

    pub fn optical_x(&self) -> Vec<f64> {
        self.optical.iter().map(|&i| self.samples[i].x).collect()
    }
}

/// Convert wavelengths (Å) to inverse microns and partition at `cutoff_x`.
///
/// Points with `x >= cutoff_x` are UV. Empty input and non-positive or
/// non-finite wavelengths are rejected.
pub fn map_wavelengths(waves: &[f64], cutoff_x: f64) -> Result<WavelengthPartition, ExtinctionError> {
    if waves.is_empty() {
        return Err(ExtinctionError::invalid("No wavelengths supplied."));
    }
    if let Some((i, w)) = waves
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w > 0.0))
    {
        return Err(ExtinctionError::invalid(format!(
            "Wavelength at index {i} is {w} Å (must be finite and > 0)."
        )));
    }

    let mut samples = Vec::with_capacity(waves.len());
    let mut uv = Vec::new();
    let mut optical = Vec::new();

    for (i, &wavelength) in waves.iter().enumerate() {
        let x = inverse_micron(wavelength);
        let is_uv = x >= cutoff_x;
        if is_uv {
            uv.push(i);
        } else {
            optical.push(i);
        }
        samples.push(WavelengthSample { wavelength, x, is_uv });
    }

    Ok(WavelengthPartition {
        samples,
        uv,
        optical,
    })
}
