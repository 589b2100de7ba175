use thiserror::Error;

/// Errors surfaced by extinction-curve evaluation.
///
/// Every error aborts the call; no partial curve is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtinctionError {
    /// Rejected before any computation: bad wavelengths, bad Rv, or a law table
    /// that violates its invariants.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The spline through the control points could not be solved or produced
    /// non-finite values.
    #[error("numerical failure: {0}")]
    NumericalFailure(String),
}

impl ExtinctionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn numerical(message: impl Into<String>) -> Self {
        Self::NumericalFailure(message.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
