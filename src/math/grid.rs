//! Wavelength grid generation.
//!
//! Extinction curves are usually tabulated on log-spaced wavelengths so that
//! the UV (where the curve changes quickly) gets as many samples per octave as
//! the near-IR.

use crate::error::ExtinctionError;

/// Generate `steps` log-spaced points between `min` and `max` (inclusive).
pub fn log_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, ExtinctionError> {
    if !(min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0 && max > min) {
        return Err(ExtinctionError::invalid(format!(
            "Invalid wavelength range: min={min}, max={max} (must be finite, >0, and max>min)."
        )));
    }
    if steps < 2 {
        return Err(ExtinctionError::invalid("Grid steps must be >= 2."));
    }

    let ln_min = min.ln();
    let ln_max = max.ln();
    let step = (ln_max - ln_min) / (steps as f64 - 1.0);

    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push((ln_min + step * i as f64).exp());
    }
    // Pin the end point; exp(ln(max)) can be off by an ulp.
    out[steps - 1] = max;
    Ok(out)
}
