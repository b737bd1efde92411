/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Clipped density as a Cartesian point cloud for scatter rendering

use super::errors::Result;
use super::threshold::clip_density;
use crate::grid::GridVolume;
use serde::{Deserialize, Serialize};

/// One retained grid cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub density: f64,
}

/// Cells whose density reaches the relative threshold, in Cartesian space
///
/// Cells clipped to NaN, and cells whose density is NaN, are dropped.
pub fn point_cloud(volume: &GridVolume, relative_threshold: f64) -> Result<Vec<CloudPoint>> {
    let clipped = clip_density(volume, relative_threshold)?;
    let [x, y, z] = volume.cartesian_mesh()?;

    Ok(clipped
        .iter()
        .zip(x.iter())
        .zip(y.iter())
        .zip(z.iter())
        .filter(|(((density, _), _), _)| !density.is_nan())
        .map(|(((&density, &x), &y), &z)| CloudPoint { x, y, z, density })
        .collect())
}
