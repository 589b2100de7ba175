//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - law configuration (`LawVariant`, `LawParameters`, `Anchor`, `UvCoefficients`)
//! - per-call intermediate values (`WavelengthSample`, `CurveSegment`)
//! - the evaluated result (`ExtinctionCurve`)

pub mod types;

pub use types::*;
