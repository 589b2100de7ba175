//! `rv-extinction` library crate.
//!
//! Rv-dependent interstellar extinction curves tailored to the R136 cluster in
//! the Large Magellanic Cloud. Each law combines a closed-form UV curve with a
//! cubic spline through Rv-dependent optical/NIR anchors, and returns
//! `A(λ)/A(ref)` for wavelengths given in Angstrom.
//!
//! ```no_run
//! use rv_extinction::{LawVariant, extinction};
//!
//! let waves = [1500.0, 2700.0, 5495.0, 10000.0, 26500.0];
//! let a_over_av = extinction(LawVariant::R136Fitzpatrick, &waves, 3.1)?;
//! # Ok::<(), rv_extinction::ExtinctionError>(())
//! ```

pub mod curve;
pub mod domain;
pub mod error;
pub mod laws;
pub mod math;
pub mod pipeline;
pub mod report;

pub use domain::{Anchor, AnchorRule, ExtinctionCurve, LawParameters, LawVariant, UvCoefficients};
pub use error::ExtinctionError;
pub use pipeline::{ExtinctionLaw, RV_TYPICAL_RANGE, extinction};
