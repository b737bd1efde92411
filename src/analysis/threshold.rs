/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Relative thresholds and density clipping

use super::errors::{AnalysisError, Result};
use crate::grid::GridVolume;
use crate::utils::math::{nan_max, nan_min};
use ndarray::{Array, Array3, ArrayBase, Data, Dimension};

/// Convert a relative threshold into an absolute one
///
/// Returns `relative_threshold * (max - min)` over the non-NaN values. Note
/// that the minimum is not added back.
pub fn absolute_threshold_from_relative<S, D>(
    values: &ArrayBase<S, D>,
    relative_threshold: f64,
) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if !(relative_threshold > 0.0 && relative_threshold < 1.0) {
        return Err(AnalysisError::ThresholdOutOfRange(relative_threshold));
    }

    let max = nan_max(values.iter().copied()).ok_or(AnalysisError::EmptyField)?;
    let min = nan_min(values.iter().copied()).ok_or(AnalysisError::EmptyField)?;

    Ok(relative_threshold * (max - min))
}

/// Replace every value below `level` with NaN
pub fn clip_below<S, D>(values: &ArrayBase<S, D>, level: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.mapv(|v| if v < level { f64::NAN } else { v })
}

/// Electron density with every cell below the relative threshold set to NaN
///
/// The absolute threshold is taken from the density's own range.
pub fn clip_density(volume: &GridVolume, relative_threshold: f64) -> Result<Array3<f64>> {
    let density = volume.density()?;
    let level = absolute_threshold_from_relative(&density, relative_threshold)?;
    Ok(clip_below(&density, level))
}
