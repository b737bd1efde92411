/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Uniform axes and dense coordinate meshes

use ndarray::{Array1, Array3};

/// Index ordering of a dense coordinate mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indexing {
    /// Cartesian ("xy") indexing: the first two output dimensions are
    /// swapped, so the mesh has shape (n1, n0, n2)
    Xy,
    /// Matrix ("ij") indexing: the mesh has shape (n0, n1, n2) and
    /// `mesh[k][[i, j, l]]` is the coordinate of axis k at cell (i, j, l)
    #[default]
    Ij,
}

/// `n` evenly spaced samples over the closed interval [start, end]
///
/// The last sample is exactly `end`. A single sample holds `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    if n == 1 {
        return Array1::from_elem(1, start);
    }

    let step = (end - start) / (n.saturating_sub(1)) as f64;
    Array1::from_shape_fn(n, |i| if i + 1 == n { end } else { start + step * i as f64 })
}

/// Dense coordinate arrays for three axis vectors
pub fn meshgrid(axes: [&Array1<f64>; 3], indexing: Indexing) -> [Array3<f64>; 3] {
    let [a0, a1, a2] = axes;
    let (n0, n1, n2) = (a0.len(), a1.len(), a2.len());

    match indexing {
        Indexing::Ij => {
            let shape = (n0, n1, n2);
            [
                Array3::from_shape_fn(shape, |(i, _, _)| a0[i]),
                Array3::from_shape_fn(shape, |(_, j, _)| a1[j]),
                Array3::from_shape_fn(shape, |(_, _, k)| a2[k]),
            ]
        }
        Indexing::Xy => {
            let shape = (n1, n0, n2);
            [
                Array3::from_shape_fn(shape, |(_, i, _)| a0[i]),
                Array3::from_shape_fn(shape, |(j, _, _)| a1[j]),
                Array3::from_shape_fn(shape, |(_, _, k)| a2[k]),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        let axis = linspace(0.0, 1.0, 5);
        assert_eq!(axis.len(), 5);
        assert_relative_eq!(axis[1], 0.25);
        assert_eq!(axis[4], 1.0);

        let single = linspace(-2.0, 2.0, 1);
        assert_eq!(single.to_vec(), vec![-2.0]);

        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_meshgrid_two_by_three() {
        let a0 = Array1::from(vec![0.0, 1.0]);
        let a1 = Array1::from(vec![10.0, 20.0, 30.0]);
        let a2 = Array1::from(vec![5.0]);

        let ij = meshgrid([&a0, &a1, &a2], Indexing::Ij);
        assert_eq!(ij[0].shape(), &[2, 3, 1]);
        assert_eq!(ij[0][[1, 2, 0]], 1.0);
        assert_eq!(ij[1][[1, 2, 0]], 30.0);
        assert_eq!(ij[2][[1, 2, 0]], 5.0);

        // xy indexing transposes the first two dimensions
        let xy = meshgrid([&a0, &a1, &a2], Indexing::Xy);
        assert_eq!(xy[0].shape(), &[3, 2, 1]);
        assert_eq!(xy[0][[2, 1, 0]], 1.0);
        assert_eq!(xy[1][[2, 1, 0]], 30.0);
        assert_eq!(xy[1][[0, 1, 0]], 10.0);
    }
}
