/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions for orbital calculations
//!
//! This module provides the constants, special functions and mesh helpers
//! shared by the coordinate, wavefunction and grid modules.

pub mod constants;
pub mod errors;
pub mod math;
pub mod mesh;

pub use errors::{Result, UtilsError};
pub use mesh::{linspace, meshgrid, Indexing};
