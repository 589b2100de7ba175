//! Numerical utilities: polynomial evaluation, the interpolating cubic
//! B-spline, and wavelength grids.

pub mod bspline;
pub mod grid;
pub mod poly;

pub use bspline::*;
pub use grid::*;
pub use poly::*;
