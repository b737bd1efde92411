/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for wavefunction evaluation

use thiserror::Error;

/// A violated quantum number selection rule
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantumNumberError {
    #[error("Principal quantum number must be a positive integer, got n={0}")]
    InvalidPrincipal(i32),

    #[error("Azimuthal quantum number must satisfy 0 <= l <= n-1, got n={n}, l={l}")]
    InvalidAzimuthal { n: i32, l: i32 },

    #[error("Magnetic quantum number must satisfy -l <= m <= l, got l={l}, m={m}")]
    InvalidMagnetic { l: i32, m: i32 },

    #[error("Spin quantum number must be +/-0.5, got s={0}")]
    InvalidSpin(f64),
}

/// Errors that can occur while evaluating a wavefunction
#[derive(Error, Debug)]
pub enum WavefunctionError {
    #[error("Invalid quantum numbers: {0}")]
    QuantumNumbers(#[from] QuantumNumberError),

    #[error("Coordinate error: {0}")]
    Coordinate(#[from] crate::coordinates::CoordinateError),

    #[error("Utils error: {0}")]
    UtilsError(#[from] crate::utils::errors::UtilsError),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result type for wavefunction operations
pub type Result<T> = std::result::Result<T, WavefunctionError>;
