/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Closed-form hydrogenic wavefunction
//!
//! ψ_{nlm}(r, θ, φ) = N_{nl} · e^{-ρ/2} ρ^l L_{n-l-1}^{(2l+1)}(ρ) · Y_l^m(φ, θ)
//! with ρ = 2r / (n a₀*). θ is the azimuthal angle and φ the polar angle, so
//! the spherical harmonic receives φ as its polar argument.

use super::errors::{Result, WavefunctionError};
use super::quantum_numbers::{validate, QuantumNumbers};
use crate::coordinates::CoordinateError;
use crate::utils::constants::REDUCED_BOHR_RADIUS;
use crate::utils::math::{generalized_laguerre, ln_factorial, spherical_harmonic};
use ndarray::{Array3, ArrayView3};
use num_complex::Complex64;
use rayon::prelude::*;

/// Natural logarithm of the normalization prefactor
///
/// ln N_{nl} = ½ [3 ln(2 / (3 n a₀*)) + ln (n-l-1)! - ln (2n(n+1))!]
pub fn ln_prefactor(n: i32, l: i32) -> Result<f64> {
    validate(n, l, 0, None)?;
    Ok(ln_prefactor_unchecked(n as u64, l as u64))
}

/// Normalization prefactor
///
/// N_{nl} = sqrt[(2 / (3 n a₀*))³ · (n-l-1)! / (2n(n+1))!]
///
/// Underflows to zero from n = 13; use [`ln_prefactor`] for large n.
pub fn prefactor(n: i32, l: i32) -> Result<f64> {
    Ok(ln_prefactor(n, l)?.exp())
}

/// Radial term e^{-ρ/2} ρ^l L_{n-l-1}^{(2l+1)}(ρ), with ρ = 2r / (n a₀*)
pub fn radial_term(n: i32, l: i32, r: f64) -> Result<f64> {
    validate(n, l, 0, None)?;
    Ok(scaled_radial_term(n as u32, l as u32, r, 0.0))
}

/// Angular term Y_l^m with θ azimuthal and φ polar
pub fn angular_term(l: i32, m: i32, theta: f64, phi: f64) -> Result<Complex64> {
    Ok(spherical_harmonic(l, m, phi, theta)?)
}

/// Hydrogenic wavefunction amplitude at a single point
///
/// The quantum numbers are validated on every call. The prefactor is folded
/// into the exponent of the radial term. For large n the amplitude itself
/// lies below the `f64` range and evaluates to zero.
pub fn wavefunction(n: i32, l: i32, m: i32, r: f64, theta: f64, phi: f64) -> Result<Complex64> {
    validate(n, l, m, None)?;
    let (nu, lu) = (n as u32, l as u32);
    let ln_norm = ln_prefactor_unchecked(nu as u64, lu as u64);
    Ok(scaled_radial_term(nu, lu, r, ln_norm) * angular_term(l, m, theta, phi)?)
}

/// Hydrogenic wavefunction over equal-shaped coordinate grids
///
/// The quantum numbers are validated once and the cells are evaluated in
/// parallel. Cells with a NaN angle (the Cartesian origin) evaluate to NaN.
pub fn wavefunction_grid(
    quantum_numbers: &QuantumNumbers,
    r: ArrayView3<'_, f64>,
    theta: ArrayView3<'_, f64>,
    phi: ArrayView3<'_, f64>,
) -> Result<Array3<Complex64>> {
    quantum_numbers.validate()?;
    let ln_norm = ln_prefactor_unchecked(quantum_numbers.n() as u64, quantum_numbers.l() as u64);
    evaluate_grid(quantum_numbers, r, theta, phi, ln_norm)
}

/// [`wavefunction_grid`] without the normalization prefactor
///
/// Differs from ψ by the constant N_{nl} only, and stays representable for
/// any n where N_{nl} itself underflows. Identical to ψ once the field is
/// normalized.
pub fn unscaled_wavefunction_grid(
    quantum_numbers: &QuantumNumbers,
    r: ArrayView3<'_, f64>,
    theta: ArrayView3<'_, f64>,
    phi: ArrayView3<'_, f64>,
) -> Result<Array3<Complex64>> {
    quantum_numbers.validate()?;
    evaluate_grid(quantum_numbers, r, theta, phi, 0.0)
}

fn ln_prefactor_unchecked(n: u64, l: u64) -> f64 {
    let scale = 2.0 / (3.0 * n as f64 * REDUCED_BOHR_RADIUS);
    0.5 * (3.0 * scale.ln() + ln_factorial(n - l - 1) - ln_factorial(2 * n * (n + 1)))
}

/// e^{ln_scale} times the radial term, with the scale applied in the exponent
fn scaled_radial_term(n: u32, l: u32, r: f64, ln_scale: f64) -> f64 {
    let rho = 2.0 * r / (n as f64 * REDUCED_BOHR_RADIUS);
    let laguerre = generalized_laguerre(n - l - 1, (2 * l + 1) as f64, rho);
    (ln_scale - rho / 2.0).exp() * rho.powi(l as i32) * laguerre
}

fn evaluate_grid(
    quantum_numbers: &QuantumNumbers,
    r: ArrayView3<'_, f64>,
    theta: ArrayView3<'_, f64>,
    phi: ArrayView3<'_, f64>,
    ln_scale: f64,
) -> Result<Array3<Complex64>> {
    for other in [theta.shape(), phi.shape()] {
        if other != r.shape() {
            return Err(WavefunctionError::Coordinate(CoordinateError::ShapeMismatch(
                r.shape().to_vec(),
                other.to_vec(),
            )));
        }
    }

    let (n, l, m) = (quantum_numbers.n(), quantum_numbers.l(), quantum_numbers.m());
    let (nu, lu) = (n as u32, l as u32);

    let points: Vec<(f64, f64, f64)> = r
        .iter()
        .zip(theta.iter())
        .zip(phi.iter())
        .map(|((&r, &theta), &phi)| (r, theta, phi))
        .collect();

    let values = points
        .into_par_iter()
        .map(|(r, theta, phi)| -> Result<Complex64> {
            Ok(scaled_radial_term(nu, lu, r, ln_scale) * angular_term(l, m, theta, phi)?)
        })
        .collect::<Result<Vec<Complex64>>>()?;

    Ok(Array3::from_shape_vec(r.raw_dim(), values)?)
}
