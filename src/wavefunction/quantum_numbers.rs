/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Quantum number validation

use super::errors::QuantumNumberError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute tolerance for the spin magnitude check
const SPIN_ATOL: f64 = 1e-8;
/// Relative tolerance for the spin magnitude check
const SPIN_RTOL: f64 = 1e-5;
/// Magnitude of an electron's spin quantum number
const SPIN_MAGNITUDE: f64 = 0.5;

/// Spectroscopic letters for l = 0, 1, 2, ...
const ORBITAL_LETTERS: &[u8] = b"spdfghiklmnoqrtuv";

/// Check that (n, l, m) and an optional spin s describe a physical
/// hydrogenic state
///
/// Each violated rule has its own error variant. The rules are checked in
/// the order n, l, m, s and the first violation is reported.
pub fn validate(n: i32, l: i32, m: i32, s: Option<f64>) -> Result<(), QuantumNumberError> {
    if n <= 0 {
        return Err(QuantumNumberError::InvalidPrincipal(n));
    }

    if !(0..n).contains(&l) {
        return Err(QuantumNumberError::InvalidAzimuthal { n, l });
    }

    if !(-l..=l).contains(&m) {
        return Err(QuantumNumberError::InvalidMagnetic { l, m });
    }

    if let Some(s) = s {
        if (s.abs() - SPIN_MAGNITUDE).abs() > SPIN_ATOL + SPIN_RTOL * SPIN_MAGNITUDE {
            return Err(QuantumNumberError::InvalidSpin(s));
        }
    }

    Ok(())
}

/// A validated (n, l, m) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumNumbers {
    n: i32,
    l: i32,
    m: i32,
}

impl QuantumNumbers {
    /// Create a new set of quantum numbers, rejecting unphysical ones
    pub fn new(n: i32, l: i32, m: i32) -> Result<Self, QuantumNumberError> {
        validate(n, l, m, None)?;
        Ok(Self { n, l, m })
    }

    /// Create a new set of quantum numbers, also checking the electron spin
    pub fn with_spin(n: i32, l: i32, m: i32, s: f64) -> Result<Self, QuantumNumberError> {
        validate(n, l, m, Some(s))?;
        Ok(Self { n, l, m })
    }

    /// Re-check the selection rules
    ///
    /// Values read back through serde bypass [`QuantumNumbers::new`], so
    /// evaluation re-validates before use.
    pub fn validate(&self) -> Result<(), QuantumNumberError> {
        validate(self.n, self.l, self.m, None)
    }

    /// Principal quantum number
    pub fn n(&self) -> i32 {
        self.n
    }

    /// Azimuthal quantum number
    pub fn l(&self) -> i32 {
        self.l
    }

    /// Magnetic quantum number
    pub fn m(&self) -> i32 {
        self.m
    }

    /// Spectroscopic label such as "1s" or "3d"
    pub fn orbital_label(&self) -> String {
        match ORBITAL_LETTERS.get(self.l as usize) {
            Some(letter) => format!("{}{}", self.n, *letter as char),
            None => format!("{}[l={}]", self.n, self.l),
        }
    }
}

impl fmt::Display for QuantumNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(n={}, l={}, m={})", self.n, self.l, self.m)
    }
}
