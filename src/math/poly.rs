//! Polynomial evaluation.
//!
//! Coefficients are stored **low-to-high** degree:
//!
//! ```text
//! [a0, a1, a2, ...]  ->  a0 + a1*x + a2*x^2 + ...
//! ```
//!
//! This is the reverse of the "highest power first" convention some numeric
//! libraries use, and matches how the law tables are written down.

/// Evaluate `Σ a_k x^k` with Horner's scheme.
///
/// An empty coefficient list evaluates to `0.0`.
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &a| acc * x + a)
}
