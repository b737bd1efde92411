/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the coordinates module

use super::system::{Axis, CoordinateSystem};
use thiserror::Error;

/// Errors that can occur while describing or converting coordinates
#[derive(Error, Debug)]
pub enum CoordinateError {
    #[error("Resolution axes [{found}] do not match the {system} axes [{expected}]")]
    ResolutionMismatch {
        system: CoordinateSystem,
        expected: String,
        found: String,
    },

    #[error("Resolution for axis {0} must be positive")]
    ZeroResolution(Axis),

    #[error("Unknown axis: {0}")]
    UnknownAxis(String),

    #[error("Unknown coordinate system: {0}")]
    UnknownSystem(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Coordinate arrays have mismatched shapes: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),
}

/// Result type for coordinate operations
pub type Result<T> = std::result::Result<T, CoordinateError>;
