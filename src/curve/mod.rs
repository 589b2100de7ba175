//! Curve construction stages.
//!
//! Every law runs the same four stages:
//!
//! - `wavelength`: Å -> μm⁻¹ and UV / optical-NIR partition
//! - `uv`: closed-form UV formula (inputs + two boundary points)
//! - `anchors`: Rv-dependent optical/NIR anchor values
//! - `merge`: spline through anchors + boundary, scatter, normalize

pub mod anchors;
pub mod merge;
pub mod uv;
pub mod wavelength;

pub use anchors::*;
pub use merge::*;
pub use uv::*;
pub use wavelength::*;
