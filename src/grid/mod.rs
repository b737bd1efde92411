/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Sampled wavefunction volumes
//!
//! A [`GridVolume`] holds a complex field over a uniform radial or Cartesian
//! grid. [`interpolate`] resamples an evaluated volume onto a new resolution
//! without re-evaluating the wavefunction.

pub mod errors;
pub mod interpolation;
pub mod volume;

pub use errors::{GridError, Result};
pub use interpolation::{interpolate, RegularGridInterpolator};
pub use volume::GridVolume;
