/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for density analysis

use thiserror::Error;

/// Errors that can occur while thresholding or extracting features
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Relative threshold must lie strictly between 0 and 1, got {0}")]
    ThresholdOutOfRange(f64),

    #[error("Field has no finite values")]
    EmptyField,

    #[error("Isosurface extraction failed: {0}")]
    Isosurface(String),

    #[error("Grid error: {0}")]
    Grid(#[from] crate::grid::GridError),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
