/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for orbital configuration

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or validating a configuration
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Coordinate error: {0}")]
    Coordinate(#[from] crate::coordinates::CoordinateError),

    #[error("Quantum number error: {0}")]
    QuantumNumbers(#[from] crate::wavefunction::QuantumNumberError),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
