/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Density analysis
//!
//! Turns evaluated volumes into the products consumed by renderers:
//! NaN-clipped densities, point clouds, and scalar volumes with an absolute
//! level for an external marching-cubes routine.

pub mod errors;
pub mod isosurface;
pub mod point_cloud;
pub mod summary;
pub mod threshold;

pub use errors::{AnalysisError, Result};
pub use isosurface::{
    extract_isosurface, isosurface_input, Isosurface, IsosurfaceExtractor, IsosurfaceInput,
    IsosurfaceSource,
};
pub use point_cloud::{point_cloud, CloudPoint};
pub use summary::VolumeSummary;
pub use threshold::{absolute_threshold_from_relative, clip_below, clip_density};
