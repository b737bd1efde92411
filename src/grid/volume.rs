/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Wavefunction volume over a radial or Cartesian grid

use super::errors::{GridError, Result};
use crate::coordinates::{
    cartesian_to_radial_array, radial_to_cartesian_array, CoordinateSystem, Resolution,
};
use crate::utils::math::nan_sum;
use crate::utils::mesh::{linspace, meshgrid, Indexing};
use crate::wavefunction::{unscaled_wavefunction_grid, QuantumNumbers};
use log::{debug, info};
use ndarray::{Array1, Array3};
use num_complex::Complex64;

/// A complex field sampled on a uniform 3D grid
///
/// The field's dimensions follow [`CoordinateSystem::axes`]: (r, θ, φ) for
/// radial volumes and (x, y, z) for Cartesian ones. Radial axes span
/// r ∈ [0, r_max], θ ∈ [0, 2π], φ ∈ [0, π]; Cartesian axes span
/// [-r_max, r_max].
#[derive(Debug, Clone)]
pub struct GridVolume {
    system: CoordinateSystem,
    resolution: Resolution,
    r_max: f64,
    axes: [Array1<f64>; 3],
    field: Array3<Complex64>,
    quantum_numbers: Option<QuantumNumbers>,
}

impl GridVolume {
    /// Create an un-evaluated volume
    ///
    /// The resolution must name exactly the axes of `system`; this is
    /// checked before anything is allocated. The field starts as uniform
    /// ones, normalized to sum to one.
    pub fn new(system: CoordinateSystem, resolution: Resolution, r_max: f64) -> Result<Self> {
        let shape = system.validate_resolution(&resolution)?;

        if !(r_max.is_finite() && r_max > 0.0) {
            return Err(GridError::InvalidExtent(r_max));
        }

        let names = system.axes();
        let axes = std::array::from_fn(|dim| {
            let (start, end) = names[dim].domain(r_max);
            linspace(start, end, shape[dim])
        });

        let field = Array3::from_elem((shape[0], shape[1], shape[2]), Complex64::new(1.0, 0.0));

        let mut volume = Self {
            system,
            resolution,
            r_max,
            axes,
            field,
            quantum_numbers: None,
        };
        volume.normalize()?;

        Ok(volume)
    }

    /// Create an un-evaluated radial volume
    pub fn radial(resolution: Resolution, r_max: f64) -> Result<Self> {
        Self::new(CoordinateSystem::Radial, resolution, r_max)
    }

    /// Create an un-evaluated Cartesian volume
    pub fn cartesian(resolution: Resolution, r_max: f64) -> Result<Self> {
        Self::new(CoordinateSystem::Cartesian, resolution, r_max)
    }

    /// Create a volume and fill it with the hydrogenic wavefunction for
    /// `quantum_numbers`
    pub fn new_atomic_wavefunction(
        system: CoordinateSystem,
        resolution: Resolution,
        r_max: f64,
        quantum_numbers: QuantumNumbers,
    ) -> Result<Self> {
        let mut volume = Self::new(system, resolution, r_max)?;
        volume.evaluate(quantum_numbers)?;
        Ok(volume)
    }

    /// Overwrite the field with the hydrogenic wavefunction, normalize it and
    /// tag the volume with the quantum numbers
    pub fn evaluate(&mut self, quantum_numbers: QuantumNumbers) -> Result<()> {
        quantum_numbers.validate()?;

        info!(
            "Evaluating {} orbital {} on a {} grid of shape {:?}",
            quantum_numbers.orbital_label(),
            quantum_numbers,
            self.system,
            self.shape()
        );

        // The constant prefactor is divided out by normalize and underflows for large n
        let [r, theta, phi] = self.radial_mesh()?;
        self.field =
            unscaled_wavefunction_grid(&quantum_numbers, r.view(), theta.view(), phi.view())?;
        self.normalize()?;
        self.quantum_numbers = Some(quantum_numbers);

        Ok(())
    }

    /// Divide the field by the sum of its magnitudes
    ///
    /// NaN cells are skipped in the sum and stay NaN.
    pub fn normalize(&mut self) -> Result<()> {
        let total = nan_sum(self.field.iter().map(|v| v.norm()));

        if !(total.is_finite() && total > 0.0) {
            return Err(GridError::DegenerateField(format!(
                "sum of |field| is {}",
                total
            )));
        }

        self.field.mapv_inplace(|v| v / total);
        debug!("Normalized field by {:e}", total);

        Ok(())
    }

    /// Electron density |ψ|², normalized so that its own sum is one
    pub fn density(&self) -> Result<Array3<f64>> {
        let mut density = self.field.mapv(|v| v.norm_sqr());
        let total = nan_sum(density.iter().copied());

        if !(total.is_finite() && total > 0.0) {
            return Err(GridError::DegenerateField(format!(
                "sum of density is {}",
                total
            )));
        }

        density.mapv_inplace(|d| d / total);
        Ok(density)
    }

    /// Magnitude |ψ| of the field
    pub fn amplitude(&self) -> Array3<f64> {
        self.field.mapv(|v| v.norm())
    }

    /// Dense coordinate arrays in matrix indexing, aligned with the field
    ///
    /// `mesh[k][[i, j, l]]` is the coordinate of axis k at field cell
    /// (i, j, l).
    pub fn meshgrid_coords(&self) -> [Array3<f64>; 3] {
        let [a0, a1, a2] = &self.axes;
        meshgrid([a0, a1, a2], Indexing::Ij)
    }

    /// Mesh expressed as (r, θ, φ), converting Cartesian grids
    pub fn radial_mesh(&self) -> Result<[Array3<f64>; 3]> {
        let mesh = self.meshgrid_coords();
        match self.system {
            CoordinateSystem::Radial => Ok(mesh),
            CoordinateSystem::Cartesian => {
                let [x, y, z] = &mesh;
                let (r, theta, phi) = cartesian_to_radial_array(x.view(), y.view(), z.view())?;
                Ok([r, theta, phi])
            }
        }
    }

    /// Mesh expressed as (x, y, z), converting radial grids
    pub fn cartesian_mesh(&self) -> Result<[Array3<f64>; 3]> {
        let mesh = self.meshgrid_coords();
        match self.system {
            CoordinateSystem::Cartesian => Ok(mesh),
            CoordinateSystem::Radial => {
                let [r, theta, phi] = &mesh;
                let (x, y, z) = radial_to_cartesian_array(r.view(), theta.view(), phi.view())?;
                Ok([x, y, z])
            }
        }
    }

    /// Check a resolution against this volume's coordinate system
    pub fn validate_resolution(&self, resolution: &Resolution) -> Result<[usize; 3]> {
        Ok(self.system.validate_resolution(resolution)?)
    }

    /// Replace the field, which must match the grid shape
    pub fn set_field(&mut self, field: Array3<Complex64>) -> Result<()> {
        let expected = self.shape();
        if field.shape() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                found: field.shape().to_vec(),
            });
        }

        self.field = field;
        Ok(())
    }

    /// Tag the volume with the state its field represents
    pub fn set_quantum_numbers(&mut self, quantum_numbers: Option<QuantumNumbers>) {
        self.quantum_numbers = quantum_numbers;
    }

    pub fn system(&self) -> CoordinateSystem {
        self.system
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    /// Sample coordinates of each axis, in dimension order
    pub fn axes(&self) -> &[Array1<f64>; 3] {
        &self.axes
    }

    pub fn field(&self) -> &Array3<Complex64> {
        &self.field
    }

    pub fn quantum_numbers(&self) -> Option<QuantumNumbers> {
        self.quantum_numbers
    }

    /// Number of samples along each dimension
    pub fn shape(&self) -> [usize; 3] {
        let (n0, n1, n2) = self.field.dim();
        [n0, n1, n2]
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field.is_empty()
    }
}
