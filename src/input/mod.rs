/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Orbital configuration files

pub mod config;
pub mod errors;

pub use config::OrbitalConfig;
pub use errors::{InputError, Result};
