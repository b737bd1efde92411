/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Isosurface preparation
//!
//! Triangulation itself is delegated to an [`IsosurfaceExtractor`], typically
//! a marching-cubes implementation. This module prepares its input (a real
//! scalar volume and an absolute level taken from that same volume) and checks
//! the mesh that comes back.

use super::errors::{AnalysisError, Result};
use super::threshold::absolute_threshold_from_relative;
use crate::grid::GridVolume;
use log::debug;
use ndarray::{Array3, ArrayView3};
use serde::{Deserialize, Serialize};

/// Which real scalar field the isosurface is taken over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsosurfaceSource {
    /// Normalized electron density |ψ|²
    #[default]
    Density,
    /// Magnitude |ψ| of the raw field
    Amplitude,
}

/// A scalar volume and the level to contour it at
#[derive(Debug, Clone)]
pub struct IsosurfaceInput {
    pub values: Array3<f64>,
    pub level: f64,
}

/// Triangle mesh returned by an extractor
///
/// Vertices are in grid index space. `normals` and `values` are per vertex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Isosurface {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<[usize; 3]>,
    pub normals: Vec<[f64; 3]>,
    pub values: Vec<f64>,
}

impl Isosurface {
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Check that the per-vertex arrays agree and every face index is valid
    pub fn validate(&self) -> Result<()> {
        let n = self.vertices.len();

        if self.normals.len() != n || self.values.len() != n {
            return Err(AnalysisError::Isosurface(format!(
                "{} vertices but {} normals and {} values",
                n,
                self.normals.len(),
                self.values.len()
            )));
        }

        if let Some(face) = self.faces.iter().find(|f| f.iter().any(|&i| i >= n)) {
            return Err(AnalysisError::Isosurface(format!(
                "face {:?} refers to a vertex beyond {}",
                face, n
            )));
        }

        Ok(())
    }
}

/// External triangulation routine
pub trait IsosurfaceExtractor {
    /// Contour `values` at `level`
    fn extract(&self, values: ArrayView3<'_, f64>, level: f64) -> Result<Isosurface>;
}

/// Scalar volume and absolute level for a relative threshold
pub fn isosurface_input(
    volume: &GridVolume,
    relative_threshold: f64,
    source: IsosurfaceSource,
) -> Result<IsosurfaceInput> {
    let values = match source {
        IsosurfaceSource::Density => volume.density()?,
        IsosurfaceSource::Amplitude => volume.amplitude(),
    };
    let level = absolute_threshold_from_relative(&values, relative_threshold)?;

    Ok(IsosurfaceInput { values, level })
}

/// Prepare the input, run the extractor and check its output
pub fn extract_isosurface<E>(
    volume: &GridVolume,
    relative_threshold: f64,
    source: IsosurfaceSource,
    extractor: &E,
) -> Result<Isosurface>
where
    E: IsosurfaceExtractor + ?Sized,
{
    let input = isosurface_input(volume, relative_threshold, source)?;
    debug!("Extracting {:?} isosurface at level {:e}", source, input.level);

    let surface = extractor.extract(input.values.view(), input.level)?;
    surface.validate()?;

    Ok(surface)
}
