/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Axes, coordinate systems and per-axis grid resolutions

use super::errors::{CoordinateError, Result};
use crate::utils::constants::{AZIMUTHAL_MAX, POLAR_MAX};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A named grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Radius
    R,
    /// Azimuthal angle
    Theta,
    /// Polar angle
    Phi,
    X,
    Y,
    Z,
}

impl Axis {
    /// Lowercase axis name
    pub fn name(&self) -> &'static str {
        match self {
            Axis::R => "r",
            Axis::Theta => "theta",
            Axis::Phi => "phi",
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Closed interval sampled along this axis for a grid of extent `r_max`
    pub fn domain(&self, r_max: f64) -> (f64, f64) {
        match self {
            Axis::R => (0.0, r_max),
            Axis::Theta => (0.0, AZIMUTHAL_MAX),
            Axis::Phi => (0.0, POLAR_MAX),
            Axis::X | Axis::Y | Axis::Z => (-r_max, r_max),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" => Ok(Axis::R),
            "theta" => Ok(Axis::Theta),
            "phi" => Ok(Axis::Phi),
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(CoordinateError::UnknownAxis(other.to_string())),
        }
    }
}

/// The coordinate system a grid is laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// Spherical-radial coordinates (r, θ, φ)
    #[default]
    Radial,
    /// Cartesian coordinates (x, y, z)
    Cartesian,
}

impl CoordinateSystem {
    /// Axes in the fixed dimension order of the grid's field
    pub fn axes(&self) -> [Axis; 3] {
        match self {
            CoordinateSystem::Radial => [Axis::R, Axis::Theta, Axis::Phi],
            CoordinateSystem::Cartesian => [Axis::X, Axis::Y, Axis::Z],
        }
    }

    /// Check that `resolution` names exactly this system's axes with positive
    /// sample counts, returning the counts in dimension order
    pub fn validate_resolution(&self, resolution: &Resolution) -> Result<[usize; 3]> {
        let axes = self.axes();

        let keys_match =
            resolution.len() == axes.len() && axes.iter().all(|a| resolution.get(*a).is_some());
        if !keys_match {
            return Err(CoordinateError::ResolutionMismatch {
                system: *self,
                expected: axes
                    .iter()
                    .map(Axis::name)
                    .collect::<Vec<_>>()
                    .join(", "),
                found: resolution.axis_names(),
            });
        }

        let mut shape = [0usize; 3];
        for (dim, axis) in axes.iter().enumerate() {
            let count = resolution.get(*axis).unwrap_or(0);
            if count == 0 {
                return Err(CoordinateError::ZeroResolution(*axis));
            }
            shape[dim] = count;
        }

        Ok(shape)
    }

    /// Infer the coordinate system whose axes `resolution` names
    pub fn from_resolution(resolution: &Resolution) -> Result<Self> {
        [CoordinateSystem::Radial, CoordinateSystem::Cartesian]
            .into_iter()
            .find(|system| {
                let axes = system.axes();
                resolution.len() == axes.len() && axes.iter().all(|a| resolution.get(*a).is_some())
            })
            .ok_or_else(|| CoordinateError::UnknownSystem(resolution.axis_names()))
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateSystem::Radial => f.write_str("radial"),
            CoordinateSystem::Cartesian => f.write_str("cartesian"),
        }
    }
}

impl FromStr for CoordinateSystem {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radial" | "spherical" => Ok(CoordinateSystem::Radial),
            "cartesian" => Ok(CoordinateSystem::Cartesian),
            other => Err(CoordinateError::UnknownSystem(other.to_string())),
        }
    }
}

/// Sample count per named axis
///
/// Parses from and displays as `"r=10,theta=12,phi=8"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resolution(BTreeMap<Axis, usize>);

impl Resolution {
    /// An empty resolution
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolution for a radial grid
    pub fn radial(r: usize, theta: usize, phi: usize) -> Self {
        Self::new()
            .with(Axis::R, r)
            .with(Axis::Theta, theta)
            .with(Axis::Phi, phi)
    }

    /// Resolution for a Cartesian grid
    pub fn cartesian(x: usize, y: usize, z: usize) -> Self {
        Self::new().with(Axis::X, x).with(Axis::Y, y).with(Axis::Z, z)
    }

    /// The same sample count on every axis of `system`
    pub fn uniform(system: CoordinateSystem, count: usize) -> Self {
        system.axes().into_iter().map(|axis| (axis, count)).collect()
    }

    /// Parse either a single count (uniform over `system`) or an explicit
    /// `axis=count` list
    pub fn parse_for(system: CoordinateSystem, s: &str) -> Result<Self> {
        match s.trim().parse::<usize>() {
            Ok(count) => Ok(Self::uniform(system, count)),
            Err(_) => s.parse(),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, axis: Axis, count: usize) -> Self {
        self.0.insert(axis, count);
        self
    }

    /// Set the count for an axis, returning the previous one
    pub fn insert(&mut self, axis: Axis, count: usize) -> Option<usize> {
        self.0.insert(axis, count)
    }

    /// Sample count for an axis
    pub fn get(&self, axis: Axis) -> Option<usize> {
        self.0.get(&axis).copied()
    }

    /// Axes named by this resolution
    pub fn axes(&self) -> impl Iterator<Item = Axis> + '_ {
        self.0.keys().copied()
    }

    /// Iterate over (axis, count) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Axis, usize)> + '_ {
        self.0.iter().map(|(axis, count)| (*axis, *count))
    }

    /// Whether both resolutions name exactly the same axes
    pub fn same_axes(&self, other: &Resolution) -> bool {
        self.axes().eq(other.axes())
    }

    /// Comma-separated axis names
    pub fn axis_names(&self) -> String {
        self.axes().map(|a| a.name()).collect::<Vec<_>>().join(", ")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Axis, usize)> for Resolution {
    fn from_iter<I: IntoIterator<Item = (Axis, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(axis, count)| format!("{}={}", axis, count))
            .collect();
        f.write_str(&parts.join(","))
    }
}

impl FromStr for Resolution {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self> {
        let mut resolution = Resolution::new();

        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (axis, count) = part.split_once('=').ok_or_else(|| {
                CoordinateError::ParseError(format!("expected axis=count, got '{}'", part))
            })?;

            let axis: Axis = axis.parse()?;
            let count = count.trim().parse::<usize>().map_err(|e| {
                CoordinateError::ParseError(format!("invalid count for axis {}: {}", axis, e))
            })?;

            if resolution.insert(axis, count).is_some() {
                return Err(CoordinateError::ParseError(format!(
                    "axis {} given more than once",
                    axis
                )));
            }
        }

        if resolution.is_empty() {
            return Err(CoordinateError::ParseError("empty resolution".to_string()));
        }

        Ok(resolution)
    }
}
