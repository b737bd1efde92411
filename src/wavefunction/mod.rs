/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Hydrogenic single-electron wavefunctions
//!
//! Quantum number validation and the closed-form evaluation of
//! ψ_{nlm}(r, θ, φ) = N_{nl} · R_{nl}(r) · Y_l^m(φ, θ), where θ is the
//! azimuthal and φ the polar angle.

pub mod errors;
pub mod hydrogenic;
pub mod quantum_numbers;

pub use errors::{QuantumNumberError, Result, WavefunctionError};
pub use hydrogenic::{
    angular_term, ln_prefactor, prefactor, radial_term, unscaled_wavefunction_grid, wavefunction,
    wavefunction_grid,
};
pub use quantum_numbers::{validate, QuantumNumbers};
