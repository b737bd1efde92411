/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration for a single orbital volume

use super::errors::{InputError, Result};
use crate::coordinates::{CoordinateSystem, Resolution};
use crate::wavefunction::QuantumNumbers;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything needed to evaluate, resample and analyze one orbital
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalConfig {
    /// Coordinate system of the evaluated grid
    pub system: CoordinateSystem,
    /// Samples per axis; must name the axes of `system`
    pub resolution: Resolution,
    /// Radial extent of the grid
    pub r_max: f64,
    /// Principal quantum number
    pub n: i32,
    /// Azimuthal quantum number
    pub l: i32,
    /// Magnetic quantum number
    pub m: i32,
    /// Spin projection, checked but not used in evaluation
    pub spin: Option<f64>,
    /// Resolution to interpolate onto after evaluation
    pub upsample: Option<Resolution>,
    /// Fraction of the density range kept by thresholding
    pub relative_threshold: f64,
}

impl Default for OrbitalConfig {
    fn default() -> Self {
        Self {
            system: CoordinateSystem::Radial,
            resolution: Resolution::uniform(CoordinateSystem::Radial, 20),
            r_max: 1.0,
            n: 1,
            l: 0,
            m: 0,
            spin: None,
            upsample: None,
            relative_threshold: 0.5,
        }
    }
}

impl OrbitalConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration and return its quantum numbers
    pub fn validate(&self) -> Result<QuantumNumbers> {
        let quantum_numbers = self.quantum_numbers()?;

        self.system.validate_resolution(&self.resolution)?;
        if let Some(upsample) = &self.upsample {
            self.system.validate_resolution(upsample)?;
        }

        if !(self.r_max.is_finite() && self.r_max > 0.0) {
            return Err(InputError::InvalidConfig(format!(
                "r_max must be positive, got {}",
                self.r_max
            )));
        }

        if !(self.relative_threshold > 0.0 && self.relative_threshold < 1.0) {
            return Err(InputError::InvalidConfig(format!(
                "relative_threshold must lie strictly between 0 and 1, got {}",
                self.relative_threshold
            )));
        }

        Ok(quantum_numbers)
    }

    pub fn quantum_numbers(&self) -> Result<QuantumNumbers> {
        let quantum_numbers = match self.spin {
            Some(s) => QuantumNumbers::with_spin(self.n, self.l, self.m, s)?,
            None => QuantumNumbers::new(self.n, self.l, self.m)?,
        };
        Ok(quantum_numbers)
    }
}
