//! Extinction law presets.
//!
//! A law is pure data (`LawParameters`); the curve construction in `curve` is
//! shared by every law.

pub mod presets;
