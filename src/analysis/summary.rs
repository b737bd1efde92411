/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Serializable statistics for an evaluated volume

use super::errors::{AnalysisError, Result};
use super::threshold::{absolute_threshold_from_relative, clip_below};
use crate::coordinates::CoordinateSystem;
use crate::grid::GridVolume;
use crate::utils::math::{nan_max, nan_min, nan_sum};
use crate::wavefunction::QuantumNumbers;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSummary {
    pub system: CoordinateSystem,
    pub shape: [usize; 3],
    pub r_max: f64,
    pub quantum_numbers: Option<QuantumNumbers>,
    pub orbital: Option<String>,
    /// Σ|ψ| over the non-NaN cells
    pub amplitude_sum: f64,
    pub density_min: f64,
    pub density_max: f64,
    pub relative_threshold: f64,
    pub absolute_threshold: f64,
    /// Cells at or above the absolute threshold
    pub retained_cells: usize,
    pub total_cells: usize,
}

impl VolumeSummary {
    pub fn from_volume(volume: &GridVolume, relative_threshold: f64) -> Result<Self> {
        let density = volume.density()?;
        let absolute_threshold = absolute_threshold_from_relative(&density, relative_threshold)?;

        let density_min = nan_min(density.iter().copied()).ok_or(AnalysisError::EmptyField)?;
        let density_max = nan_max(density.iter().copied()).ok_or(AnalysisError::EmptyField)?;
        let retained_cells = clip_below(&density, absolute_threshold)
            .iter()
            .filter(|d| !d.is_nan())
            .count();

        let quantum_numbers = volume.quantum_numbers();

        Ok(Self {
            system: volume.system(),
            shape: volume.shape(),
            r_max: volume.r_max(),
            quantum_numbers,
            orbital: quantum_numbers.map(|qn| qn.orbital_label()),
            amplitude_sum: nan_sum(volume.field().iter().map(|v| v.norm())),
            density_min,
            density_max,
            relative_threshold,
            absolute_threshold,
            retained_cells,
            total_cells: volume.len(),
        })
    }
}
