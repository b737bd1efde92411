/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Mathematical utility functions for orbital calculations
//!
//! Special functions needed by the hydrogenic wavefunction (log-factorials,
//! generalized Laguerre polynomials, associated Legendre polynomials and
//! spherical harmonics) together with the NaN-aware reductions used on grids.

use super::errors::{Result, UtilsError};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Largest argument summed term by term in [`ln_factorial`]
const LN_FACTORIAL_EXACT_MAX: u64 = 256;

/// Natural logarithm of n!
///
/// Stays finite far beyond the point where n! itself overflows an `f64`,
/// which the hydrogenic prefactor needs for (2n(n+1))!. Above
/// `LN_FACTORIAL_EXACT_MAX` the Stirling series is used, so the cost does
/// not grow with n.
pub fn ln_factorial(n: u64) -> f64 {
    if n <= LN_FACTORIAL_EXACT_MAX {
        return (2..=n).map(|k| (k as f64).ln()).sum();
    }

    let x = n as f64;
    let inv = 1.0 / x;
    let inv2 = inv * inv;
    x * x.ln() - x + 0.5 * (2.0 * PI * x).ln()
        + inv * (1.0 / 12.0 - inv2 * (1.0 / 360.0 - inv2 / 1260.0))
}

/// Generalized (associated) Laguerre polynomial L_n^(α)(x)
///
/// Uses the three-term recurrence
/// (k+1) L_{k+1} = (2k+1+α-x) L_k - (k+α) L_{k-1},
/// with L_0 = 1 and L_1 = 1 + α - x, normalized so that
/// L_n^(α)(0) = C(n+α, n).
///
/// # Arguments
///
/// * `degree` - The degree n of the polynomial
/// * `alpha` - The order α (α > -1)
/// * `x` - The input value
pub fn generalized_laguerre(degree: u32, alpha: f64, x: f64) -> f64 {
    if degree == 0 {
        return 1.0;
    }

    let mut l_prev = 1.0;
    let mut l_curr = 1.0 + alpha - x;

    for k in 1..degree {
        let k = k as f64;
        let l_next = ((2.0 * k + 1.0 + alpha - x) * l_curr - (k + alpha) * l_prev) / (k + 1.0);
        l_prev = l_curr;
        l_curr = l_next;
    }

    l_curr
}

/// Standard Legendre polynomial P_l(x)
///
/// A NaN input is passed through and yields NaN.
pub fn legendre_polynomial(l: i32, x: f64) -> Result<f64> {
    if l < 0 || x.abs() > 1.0 {
        return Err(UtilsError::Math(format!(
            "Invalid parameters for Legendre polynomial: l={}, x={}",
            l, x
        )));
    }

    if l == 0 {
        return Ok(1.0);
    }

    if l == 1 {
        return Ok(x);
    }

    let mut p0 = 1.0;
    let mut p1 = x;
    let mut p2 = 0.0;

    for n in 2..=l {
        // (n)P_n(x) = (2n-1)xP_{n-1}(x) - (n-1)P_{n-2}(x)
        p2 = ((2 * n - 1) as f64 * x * p1 - (n - 1) as f64 * p0) / n as f64;
        p0 = p1;
        p1 = p2;
    }

    Ok(p2)
}

/// Associated Legendre polynomial P_l^m(x) for 0 ≤ m ≤ l
///
/// Includes the Condon-Shortley phase (-1)^m. A NaN input is passed through
/// and yields NaN.
///
/// # Arguments
///
/// * `l` - The degree of the polynomial (l ≥ 0)
/// * `m` - The order of the polynomial (0 ≤ m ≤ l)
/// * `x` - The input value (-1 ≤ x ≤ 1)
pub fn associated_legendre(l: i32, m: i32, x: f64) -> Result<f64> {
    if l < 0 || m < 0 || m > l || x.abs() > 1.0 {
        return Err(UtilsError::Math(format!(
            "Invalid parameters for associated Legendre polynomial: l={}, m={}, x={}",
            l, m, x
        )));
    }

    if m == 0 {
        return legendre_polynomial(l, x);
    }

    let mut pmm = compute_pmm(m, x);

    if l == m {
        return Ok(pmm);
    }

    // P_{m+1}^m
    let mut pmm1 = x * (2 * m + 1) as f64 * pmm;

    if l == m + 1 {
        return Ok(pmm1);
    }

    let mut pll = 0.0;
    for ll in (m + 2)..=l {
        pll = ((2 * ll - 1) as f64 * x * pmm1 - (ll + m - 1) as f64 * pmm) / (ll - m) as f64;
        pmm = pmm1;
        pmm1 = pll;
    }

    Ok(pll)
}

/// Compute P_m^m(x) for the associated Legendre recurrence
fn compute_pmm(m: i32, x: f64) -> f64 {
    let somx2 = ((1.0 - x) * (1.0 + x)).sqrt();
    let mut pmm = 1.0;

    for i in 1..=m {
        pmm *= -((2 * i - 1) as f64) * somx2;
    }

    pmm
}

/// Spherical harmonic Y_l^m(polar, azimuth)
///
/// # Arguments
///
/// * `l` - The degree (l ≥ 0)
/// * `m` - The order (-l ≤ m ≤ l)
/// * `polar` - The polar angle in radians, measured from +z (0 ≤ polar ≤ π)
/// * `azimuth` - The azimuthal angle in radians, measured from +x in the xy-plane
///
/// # Returns
///
/// The complex value of Y_l^m or an error if the degree/order are invalid.
/// NaN angles give a NaN result.
pub fn spherical_harmonic(l: i32, m: i32, polar: f64, azimuth: f64) -> Result<Complex64> {
    if l < 0 || m.abs() > l {
        return Err(UtilsError::Math(format!(
            "Invalid parameters for spherical harmonic: l={}, m={}",
            l, m
        )));
    }

    let abs_m = m.abs();
    let p_lm = associated_legendre(l, abs_m, polar.cos())?;

    let ln_ratio = ln_factorial((l - abs_m) as u64) - ln_factorial((l + abs_m) as u64);
    let norm = ((2 * l + 1) as f64 / (4.0 * PI) * ln_ratio.exp()).sqrt();

    let exp_imp = Complex64::new(0.0, m as f64 * azimuth).exp();

    // Y_l^{-|m|} = (-1)^|m| conj(Y_l^{|m|}) cancels the phase already in P_l^|m|
    let phase = if m >= 0 || abs_m % 2 == 0 { 1.0 } else { -1.0 };

    Ok(norm * phase * p_lm * exp_imp)
}

/// Sum of the values, skipping NaNs
pub fn nan_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().filter(|v| !v.is_nan()).sum()
}

/// Smallest value, skipping NaNs. None if every value is NaN.
pub fn nan_min<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))
}

/// Largest value, skipping NaNs. None if every value is NaN.
pub fn nan_max<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ln_factorial() {
        assert_relative_eq!(ln_factorial(0), 0.0);
        assert_relative_eq!(ln_factorial(1), 0.0);
        assert_relative_eq!(ln_factorial(10), (3628800.0f64).ln(), epsilon = 1e-12);

        // 171! overflows f64 but not the log form
        assert!(ln_factorial(171).is_finite());

        // Stirling branch continues the exact sum
        let exact: f64 = (2..=400u64).map(|k| (k as f64).ln()).sum();
        assert_relative_eq!(ln_factorial(400), exact, max_relative = 1e-13);
        let exact: f64 = (2..=257u64).map(|k| (k as f64).ln()).sum();
        assert_relative_eq!(ln_factorial(257), exact, max_relative = 1e-13);

        assert!(ln_factorial(u32::MAX as u64 * 4).is_finite());
    }

    #[test]
    fn test_generalized_laguerre() {
        // L_0^α(x) = 1
        assert_relative_eq!(generalized_laguerre(0, 3.0, 1.7), 1.0);

        // L_1^α(x) = 1 + α - x
        assert_relative_eq!(generalized_laguerre(1, 1.0, 0.5), 1.5, epsilon = 1e-12);

        // L_2^α(x) = (x² - 2(α+2)x + (α+1)(α+2)) / 2
        let (alpha, x) = (1.0, 0.5);
        let expected = (x * x - 2.0 * (alpha + 2.0) * x + (alpha + 1.0) * (alpha + 2.0)) / 2.0;
        assert_relative_eq!(generalized_laguerre(2, alpha, x), expected, epsilon = 1e-12);

        // L_n^α(0) = C(n+α, n)
        assert_relative_eq!(generalized_laguerre(3, 3.0, 0.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_legendre_polynomial() {
        let x = 0.3;
        assert_relative_eq!(legendre_polynomial(0, x).unwrap(), 1.0);
        assert_relative_eq!(legendre_polynomial(1, x).unwrap(), x);
        assert_relative_eq!(
            legendre_polynomial(2, x).unwrap(),
            0.5 * (3.0 * x * x - 1.0),
            epsilon = 1e-12
        );

        assert!(legendre_polynomial(2, 1.5).is_err());
        assert!(legendre_polynomial(2, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_associated_legendre() {
        let x: f64 = 0.4;
        let s = (1.0 - x * x).sqrt();

        assert_relative_eq!(associated_legendre(1, 1, x).unwrap(), -s, epsilon = 1e-12);
        assert_relative_eq!(associated_legendre(2, 1, x).unwrap(), -3.0 * x * s, epsilon = 1e-12);
        assert_relative_eq!(associated_legendre(2, 2, x).unwrap(), 3.0 * s * s, epsilon = 1e-12);
        assert_relative_eq!(
            associated_legendre(3, 1, x).unwrap(),
            -1.5 * (5.0 * x * x - 1.0) * s,
            epsilon = 1e-12
        );

        assert!(associated_legendre(1, 2, x).is_err());
        assert!(associated_legendre(1, -1, x).is_err());
    }

    #[test]
    fn test_spherical_harmonic() {
        let polar: f64 = 0.7;
        let azimuth: f64 = 1.3;

        let y00 = spherical_harmonic(0, 0, polar, azimuth).unwrap();
        assert_relative_eq!(y00.re, 0.5 / PI.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(y00.im, 0.0);

        let y10 = spherical_harmonic(1, 0, polar, azimuth).unwrap();
        assert_relative_eq!(y10.re, (3.0 / (4.0 * PI)).sqrt() * polar.cos(), epsilon = 1e-12);

        // Y_1^1 = -sqrt(3/8π) sinθ e^{iφ}
        let y11 = spherical_harmonic(1, 1, polar, azimuth).unwrap();
        let amplitude = -(3.0 / (8.0 * PI)).sqrt() * polar.sin();
        assert_relative_eq!(y11.re, amplitude * azimuth.cos(), epsilon = 1e-12);
        assert_relative_eq!(y11.im, amplitude * azimuth.sin(), epsilon = 1e-12);

        // Y_l^{-m} = (-1)^m conj(Y_l^m)
        let y1m1 = spherical_harmonic(1, -1, polar, azimuth).unwrap();
        assert_relative_eq!(y1m1.re, -y11.re, epsilon = 1e-12);
        assert_relative_eq!(y1m1.im, y11.im, epsilon = 1e-12);

        assert!(spherical_harmonic(1, 2, polar, azimuth).is_err());
        assert!(spherical_harmonic(1, 0, f64::NAN, azimuth).unwrap().re.is_nan());
    }

    #[test]
    fn test_nan_reductions() {
        let values = [0.5, f64::NAN, -1.0, 2.0];
        assert_relative_eq!(nan_sum(values), 1.5);
        assert_eq!(nan_min(values), Some(-1.0));
        assert_eq!(nan_max(values), Some(2.0));

        let empty = [f64::NAN, f64::NAN];
        assert_eq!(nan_min(empty), None);
        assert_eq!(nan_max(empty), None);
        assert_relative_eq!(nan_sum(empty), 0.0);
    }
}
