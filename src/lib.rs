/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # orbitals-rs
//!
//! Hydrogenic atomic orbitals sampled on 3D grids.
//!
//! A wavefunction ψ_{nlm} is evaluated on a radial (r, θ, φ) or Cartesian
//! (x, y, z) grid, normalized, optionally resampled onto a finer grid by
//! trilinear interpolation, and reduced to a thresholded density that can be
//! exported as a point cloud or handed to an isosurface extractor.

pub mod analysis;
pub mod cli;
pub mod coordinates;
pub mod grid;
pub mod input;
pub mod utils;
pub mod wavefunction;

use analysis::{CloudPoint, VolumeSummary};
use grid::GridVolume;
use input::OrbitalConfig;
use log::info;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Evaluation pipeline for one configured orbital
#[derive(Debug, Clone)]
pub struct Orbital {
    config: OrbitalConfig,
}

impl Orbital {
    /// Create a pipeline, validating the configuration up front
    pub fn new(config: OrbitalConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OrbitalConfig {
        &self.config
    }

    /// Evaluate the orbital, then resample it if an upsampled resolution is set
    pub fn volume(&self) -> anyhow::Result<GridVolume> {
        let quantum_numbers = self.config.validate()?;

        let volume = GridVolume::new_atomic_wavefunction(
            self.config.system,
            self.config.resolution.clone(),
            self.config.r_max,
            quantum_numbers,
        )?;

        match &self.config.upsample {
            Some(resolution) => {
                info!("Upsampling to {}", resolution);
                Ok(volume.interpolate(resolution)?)
            }
            None => Ok(volume),
        }
    }

    pub fn summary(&self) -> anyhow::Result<VolumeSummary> {
        let volume = self.volume()?;
        Ok(VolumeSummary::from_volume(
            &volume,
            self.config.relative_threshold,
        )?)
    }

    pub fn point_cloud(&self) -> anyhow::Result<Vec<CloudPoint>> {
        let volume = self.volume()?;
        Ok(analysis::point_cloud(
            &volume,
            self.config.relative_threshold,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coordinates::{CoordinateSystem, Resolution};

    #[test]
    fn test_orbital_pipeline() {
        let config = OrbitalConfig {
            resolution: Resolution::radial(6, 6, 6),
            upsample: Some(Resolution::radial(9, 9, 9)),
            ..Default::default()
        };
        let orbital = Orbital::new(config).unwrap();

        let volume = orbital.volume().unwrap();
        assert_eq!(volume.shape(), [9, 9, 9]);
        assert_eq!(volume.system(), CoordinateSystem::Radial);
        assert_eq!(volume.quantum_numbers().unwrap().orbital_label(), "1s");

        let summary = orbital.summary().unwrap();
        assert_eq!(summary.total_cells, 729);
        assert!(summary.retained_cells > 0);
        assert!(summary.retained_cells < summary.total_cells);
    }

    #[test]
    fn test_invalid_orbital() {
        let config = OrbitalConfig {
            n: 0,
            ..Default::default()
        };
        assert!(Orbital::new(config).is_err());
    }
}
