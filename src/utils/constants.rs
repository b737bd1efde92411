/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants used in orbital calculations

/// Reduced Bohr radius in Angstroms
pub const REDUCED_BOHR_RADIUS: f64 = 5.29177210544e-1;

/// Upper end of the azimuthal angle domain θ
pub const AZIMUTHAL_MAX: f64 = 2.0 * std::f64::consts::PI;

/// Upper end of the polar angle domain φ
pub const POLAR_MAX: f64 = std::f64::consts::PI;
