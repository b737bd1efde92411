/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Multilinear resampling of grid volumes
//!
//! Evaluating the wavefunction at high resolution is expensive, so a coarse
//! volume is evaluated once and interpolated onto the finer grid.

use super::errors::{GridError, Result};
use super::volume::GridVolume;
use crate::coordinates::Resolution;
use log::debug;
use ndarray::{Array3, ArrayView1, ArrayView3};
use num_complex::Complex64;
use rayon::prelude::*;

/// Relative slack allowed when a query lands just outside an axis
const BOUNDS_TOLERANCE: f64 = 1e-9;

/// Trilinear interpolator over a rectilinear grid
///
/// Each axis must be strictly increasing. A single-sample axis only accepts
/// queries at its one coordinate.
pub struct RegularGridInterpolator<'a> {
    axes: [ArrayView1<'a, f64>; 3],
    values: ArrayView3<'a, Complex64>,
}

impl<'a> RegularGridInterpolator<'a> {
    pub fn new(axes: [ArrayView1<'a, f64>; 3], values: ArrayView3<'a, Complex64>) -> Result<Self> {
        for (dimension, axis) in axes.iter().enumerate() {
            if axis.len() != values.shape()[dimension] {
                return Err(GridError::InvalidAxis {
                    dimension,
                    reason: format!(
                        "{} coordinates for {} values",
                        axis.len(),
                        values.shape()[dimension]
                    ),
                });
            }

            if axis.is_empty() {
                return Err(GridError::InvalidAxis {
                    dimension,
                    reason: "no coordinates".to_string(),
                });
            }

            if axis.windows(2).into_iter().any(|w| !(w[1] > w[0])) {
                return Err(GridError::InvalidAxis {
                    dimension,
                    reason: "coordinates are not strictly increasing".to_string(),
                });
            }
        }

        Ok(Self { axes, values })
    }

    /// Interpolator over a volume's own axes and field
    pub fn from_volume(volume: &'a GridVolume) -> Result<Self> {
        let [a0, a1, a2] = volume.axes();
        Self::new([a0.view(), a1.view(), a2.view()], volume.field().view())
    }

    /// Interpolated value at `point`, given in dimension order
    pub fn sample(&self, point: [f64; 3]) -> Result<Complex64> {
        let mut brackets = [(0usize, 0.0f64); 3];
        for (dimension, bracket) in brackets.iter_mut().enumerate() {
            *bracket = self.locate(dimension, point[dimension])?;
        }

        let mut result = Complex64::new(0.0, 0.0);
        for corner in 0..8 {
            let mut weight = 1.0;
            let mut index = [0usize; 3];

            for (dimension, &(lower, t)) in brackets.iter().enumerate() {
                if (corner >> dimension) & 1 == 1 {
                    weight *= t;
                    index[dimension] = lower + 1;
                } else {
                    weight *= 1.0 - t;
                    index[dimension] = lower;
                }
            }

            // Zero weights never touch the neighbour, so exact nodes stay exact
            if weight == 0.0 {
                continue;
            }

            result += self.values[index] * weight;
        }

        Ok(result)
    }

    /// Lower bracketing index and fractional position along one axis
    fn locate(&self, dimension: usize, value: f64) -> Result<(usize, f64)> {
        let axis = &self.axes[dimension];
        let n = axis.len();
        let (min, max) = (axis[0], axis[n - 1]);
        let tolerance = BOUNDS_TOLERANCE * (max - min).abs().max(1.0);

        if value.is_nan() || value < min - tolerance || value > max + tolerance {
            return Err(GridError::OutOfBounds {
                dimension,
                value,
                min,
                max,
            });
        }

        if n == 1 {
            return Ok((0, 0.0));
        }

        let value = value.clamp(min, max);

        let mut lower = 0;
        let mut upper = n - 1;
        while upper - lower > 1 {
            let mid = (lower + upper) / 2;
            if axis[mid] <= value {
                lower = mid;
            } else {
                upper = mid;
            }
        }

        let t = (value - axis[lower]) / (axis[upper] - axis[lower]);
        Ok((lower, t))
    }
}

/// Resample a volume onto `new_resolution`
///
/// The result has the same coordinate system, extent and quantum-number tag
/// as `source`; only the sampling density changes. The wavefunction is not
/// re-evaluated and the interpolated field is not renormalized.
pub fn interpolate(source: &GridVolume, new_resolution: &Resolution) -> Result<GridVolume> {
    if !source.resolution().same_axes(new_resolution) {
        return Err(GridError::KeyMismatch {
            expected: source.resolution().axis_names(),
            found: new_resolution.axis_names(),
        });
    }

    let interpolator = RegularGridInterpolator::from_volume(source)?;

    let mut target = GridVolume::new(source.system(), new_resolution.clone(), source.r_max())?;
    target.set_quantum_numbers(source.quantum_numbers());

    let [c0, c1, c2] = target.meshgrid_coords();
    let points: Vec<[f64; 3]> = c0
        .iter()
        .zip(c1.iter())
        .zip(c2.iter())
        .map(|((&a, &b), &c)| [a, b, c])
        .collect();

    let values = points
        .into_par_iter()
        .map(|point| interpolator.sample(point))
        .collect::<Result<Vec<Complex64>>>()?;

    target.set_field(Array3::from_shape_vec(c0.raw_dim(), values)?)?;

    debug!(
        "Interpolated {} volume from {:?} to {:?}",
        source.system(),
        source.shape(),
        target.shape()
    );

    Ok(target)
}

impl GridVolume {
    /// Resample this volume onto `new_resolution`; see [`interpolate`]
    pub fn interpolate(&self, new_resolution: &Resolution) -> Result<GridVolume> {
        interpolate(self, new_resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array1;

    fn linear_field() -> (Array1<f64>, Array1<f64>, Array1<f64>, Array3<Complex64>) {
        let a0 = Array1::from(vec![0.0, 1.0, 3.0]);
        let a1 = Array1::from(vec![-1.0, 1.0]);
        let a2 = Array1::from(vec![0.0, 0.5, 1.0, 2.0]);
        let values = Array3::from_shape_fn((3, 2, 4), |(i, j, k)| {
            Complex64::new(2.0 * a0[i] + 3.0 * a1[j] - a2[k], a0[i] * 0.5)
        });
        (a0, a1, a2, values)
    }

    #[test]
    fn test_linear_function_is_reproduced() {
        let (a0, a1, a2, values) = linear_field();
        let interpolator =
            RegularGridInterpolator::new([a0.view(), a1.view(), a2.view()], values.view())
                .unwrap();

        for point in [[0.5, 0.0, 0.25], [2.9, -0.3, 1.7], [3.0, 1.0, 2.0], [0.0, -1.0, 0.0]] {
            let value = interpolator.sample(point).unwrap();
            assert_relative_eq!(
                value.re,
                2.0 * point[0] + 3.0 * point[1] - point[2],
                epsilon = 1e-12
            );
            assert_relative_eq!(value.im, point[0] * 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let (a0, a1, a2, values) = linear_field();
        let interpolator =
            RegularGridInterpolator::new([a0.view(), a1.view(), a2.view()], values.view())
                .unwrap();

        assert!(matches!(
            interpolator.sample([3.5, 0.0, 0.0]),
            Err(GridError::OutOfBounds { dimension: 0, .. })
        ));
        assert!(interpolator.sample([1.0, f64::NAN, 0.0]).is_err());

        // within tolerance is clamped
        assert!(interpolator.sample([3.0 + 1e-12, 0.0, 0.0]).is_ok());
    }

    #[test]
    fn test_invalid_axes() {
        let (a0, a1, _, values) = linear_field();
        let descending = Array1::from(vec![2.0, 1.0, 0.5, 0.0]);
        assert!(matches!(
            RegularGridInterpolator::new([a0.view(), a1.view(), descending.view()], values.view()),
            Err(GridError::InvalidAxis { dimension: 2, .. })
        ));

        let short = Array1::from(vec![0.0, 1.0]);
        assert!(RegularGridInterpolator::new([a0.view(), a1.view(), short.view()], values.view())
            .is_err());
    }

    #[test]
    fn test_single_sample_axis() {
        let a0 = Array1::from(vec![0.0, 1.0]);
        let a1 = Array1::from(vec![0.0, 1.0]);
        let a2 = Array1::from(vec![-1.0]);
        let values =
            Array3::from_shape_fn((2, 2, 1), |(i, j, _)| Complex64::new((i + 2 * j) as f64, 0.0));
        let interpolator =
            RegularGridInterpolator::new([a0.view(), a1.view(), a2.view()], values.view())
                .unwrap();

        let value = interpolator.sample([0.5, 0.5, -1.0]).unwrap();
        assert_relative_eq!(value.re, 1.5, epsilon = 1e-12);
        assert!(interpolator.sample([0.5, 0.5, 0.0]).is_err());
    }
}
