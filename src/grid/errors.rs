/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for grid volumes

use thiserror::Error;

/// Errors that can occur while building, evaluating or resampling a volume
#[derive(Error, Debug)]
pub enum GridError {
    /// Normalization of a field whose magnitude sum is zero or not finite
    #[error("Degenerate field: {0}")]
    DegenerateField(String),

    #[error("Resampling resolution axes [{found}] do not match source axes [{expected}]")]
    KeyMismatch { expected: String, found: String },

    #[error("r_max must be positive and finite, got {0}")]
    InvalidExtent(f64),

    #[error("Field shape {found:?} does not match grid shape {expected:?}")]
    ShapeMismatch { expected: [usize; 3], found: Vec<usize> },

    #[error("Invalid interpolation axis {dimension}: {reason}")]
    InvalidAxis { dimension: usize, reason: String },

    #[error("Query value {value} on dimension {dimension} lies outside [{min}, {max}]")]
    OutOfBounds {
        dimension: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Coordinate error: {0}")]
    Coordinate(#[from] crate::coordinates::CoordinateError),

    #[error("Invalid quantum numbers: {0}")]
    QuantumNumbers(#[from] crate::wavefunction::QuantumNumberError),

    #[error("Wavefunction error: {0}")]
    Wavefunction(#[from] crate::wavefunction::WavefunctionError),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, GridError>;
