/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Coordinate systems, grid resolutions and coordinate transforms
//!
//! Two coordinate systems are supported. The radial system uses (r, θ, φ)
//! with θ the azimuthal angle in [0, 2π] and φ the polar angle in [0, π];
//! the Cartesian system uses (x, y, z).

pub mod errors;
pub mod system;
pub mod transform;

pub use errors::{CoordinateError, Result};
pub use system::{Axis, CoordinateSystem, Resolution};
pub use transform::{
    cartesian_to_radial, cartesian_to_radial_array, radial_to_cartesian,
    radial_to_cartesian_array,
};
