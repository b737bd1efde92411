/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Conversions between Cartesian and spherical-radial coordinates
//!
//! θ is the azimuthal angle measured from +x in the xy-plane and φ is the
//! polar angle measured from +z. At the origin φ = arccos(0/0) is NaN; it is
//! returned as such and left for NaN-aware consumers.

use super::errors::{CoordinateError, Result};
use ndarray::{Array, ArrayView, Dimension, Zip};

/// Convert a Cartesian point to (r, θ, φ)
pub fn cartesian_to_radial(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let r = (x * x + y * y + z * z).sqrt();
    let theta = y.atan2(x);
    let phi = (z / r).acos();
    (r, theta, phi)
}

/// Convert (r, θ, φ) to a Cartesian point
pub fn radial_to_cartesian(r: f64, theta: f64, phi: f64) -> (f64, f64, f64) {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    (r * sin_phi * cos_theta, r * sin_phi * sin_theta, r * cos_phi)
}

fn check_shapes<D: Dimension>(
    a: &ArrayView<'_, f64, D>,
    b: &ArrayView<'_, f64, D>,
    c: &ArrayView<'_, f64, D>,
) -> Result<()> {
    for other in [b.shape(), c.shape()] {
        if other != a.shape() {
            return Err(CoordinateError::ShapeMismatch(
                a.shape().to_vec(),
                other.to_vec(),
            ));
        }
    }
    Ok(())
}

type Triple<D> = (Array<f64, D>, Array<f64, D>, Array<f64, D>);

/// Elementwise [`cartesian_to_radial`] over equal-shaped arrays
pub fn cartesian_to_radial_array<D: Dimension>(
    x: ArrayView<'_, f64, D>,
    y: ArrayView<'_, f64, D>,
    z: ArrayView<'_, f64, D>,
) -> Result<Triple<D>> {
    check_shapes(&x, &y, &z)?;

    let mut r = Array::zeros(x.raw_dim());
    let mut theta = Array::zeros(x.raw_dim());
    let mut phi = Array::zeros(x.raw_dim());

    Zip::from(&mut r)
        .and(&mut theta)
        .and(&mut phi)
        .and(&x)
        .and(&y)
        .and(&z)
        .for_each(|r, theta, phi, &x, &y, &z| {
            (*r, *theta, *phi) = cartesian_to_radial(x, y, z);
        });

    Ok((r, theta, phi))
}

/// Elementwise [`radial_to_cartesian`] over equal-shaped arrays
pub fn radial_to_cartesian_array<D: Dimension>(
    r: ArrayView<'_, f64, D>,
    theta: ArrayView<'_, f64, D>,
    phi: ArrayView<'_, f64, D>,
) -> Result<Triple<D>> {
    check_shapes(&r, &theta, &phi)?;

    let mut x = Array::zeros(r.raw_dim());
    let mut y = Array::zeros(r.raw_dim());
    let mut z = Array::zeros(r.raw_dim());

    Zip::from(&mut x)
        .and(&mut y)
        .and(&mut z)
        .and(&r)
        .and(&theta)
        .and(&phi)
        .for_each(|x, y, z, &r, &theta, &phi| {
            (*x, *y, *z) = radial_to_cartesian(r, theta, phi);
        });

    Ok((x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_unit_vectors() {
        let (r, theta, phi) = cartesian_to_radial(1.0, 0.0, 0.0);
        assert_relative_eq!(r, 1.0);
        assert_relative_eq!(theta, 0.0);
        assert_relative_eq!(phi, FRAC_PI_2);

        let (r, theta, phi) = cartesian_to_radial(0.0, 1.0, 0.0);
        assert_relative_eq!(r, 1.0);
        assert_relative_eq!(theta, FRAC_PI_2);
        assert_relative_eq!(phi, FRAC_PI_2);

        let (r, _, phi) = cartesian_to_radial(0.0, 0.0, 1.0);
        assert_relative_eq!(r, 1.0);
        assert_relative_eq!(phi, 0.0);
    }

    #[test]
    fn test_origin_is_singular() {
        let (r, theta, phi) = cartesian_to_radial(0.0, 0.0, 0.0);
        assert_eq!(r, 0.0);
        assert_eq!(theta, 0.0);
        assert!(phi.is_nan());
    }

    #[test]
    fn test_array_conversion() {
        let x = array![[1.0, 0.0], [0.3, -2.0]];
        let y = array![[0.0, 1.0], [-0.7, 0.5]];
        let z = array![[0.0, 0.0], [1.1, 0.25]];

        let (r, theta, phi) = cartesian_to_radial_array(x.view(), y.view(), z.view()).unwrap();
        assert_eq!(r.shape(), &[2, 2]);

        let (x2, y2, z2) =
            radial_to_cartesian_array(r.view(), theta.view(), phi.view()).unwrap();
        for ((a, b), (c, d)) in x.iter().zip(x2.iter()).zip(z.iter().zip(z2.iter())) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
            assert_relative_eq!(*c, *d, epsilon = 1e-12);
        }
        for (a, b) in y.iter().zip(y2.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }

        let short = array![[1.0, 2.0]];
        assert!(cartesian_to_radial_array(x.view(), y.view(), short.view()).is_err());
    }

    #[test]
    fn test_views_with_distinct_lifetimes() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let mismatch = {
            let y = array![[0.0, 1.0], [1.0, 0.0]];
            let z = array![0.5, 0.5, 0.5, 0.5].into_shape_with_order((4, 1)).unwrap();
            cartesian_to_radial_array(x.view(), y.view(), z.view())
        };

        match mismatch {
            Err(CoordinateError::ShapeMismatch(expected, found)) => {
                assert_eq!(expected, vec![2, 2]);
                assert_eq!(found, vec![4, 1]);
            }
            other => panic!("expected a shape mismatch, got {:?}", other),
        }
    }
}
