/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use orbitals_rs::wavefunction::{validate, QuantumNumberError, QuantumNumbers};
use rstest::rstest;

#[rstest]
#[case(1, 0, 0, None)]
#[case(2, 1, 1, None)]
#[case(2, 1, -1, None)]
#[case(4, 3, -3, None)]
#[case(1, 0, 0, Some(0.5))]
#[case(3, 2, 0, Some(-0.5))]
fn test_valid_states(#[case] n: i32, #[case] l: i32, #[case] m: i32, #[case] s: Option<f64>) {
    assert!(validate(n, l, m, s).is_ok());
}

#[rstest]
#[case(0, 0, 0, None, QuantumNumberError::InvalidPrincipal(0))]
#[case(-1, 0, 0, None, QuantumNumberError::InvalidPrincipal(-1))]
#[case(1, 2, 0, None, QuantumNumberError::InvalidAzimuthal { n: 1, l: 2 })]
#[case(2, -1, 0, None, QuantumNumberError::InvalidAzimuthal { n: 2, l: -1 })]
#[case(1, 0, 1, None, QuantumNumberError::InvalidMagnetic { l: 0, m: 1 })]
#[case(3, 1, -2, None, QuantumNumberError::InvalidMagnetic { l: 1, m: -2 })]
#[case(1, 0, 0, Some(0.4), QuantumNumberError::InvalidSpin(0.4))]
fn test_invalid_states(
    #[case] n: i32,
    #[case] l: i32,
    #[case] m: i32,
    #[case] s: Option<f64>,
    #[case] expected: QuantumNumberError,
) {
    assert_eq!(validate(n, l, m, s).unwrap_err(), expected);
}

#[test]
fn test_first_violation_is_reported() {
    // n, l and m are all invalid; n is checked first
    assert_eq!(
        validate(0, 5, 9, Some(2.0)).unwrap_err(),
        QuantumNumberError::InvalidPrincipal(0)
    );
}

#[test]
fn test_labels() {
    let qn = QuantumNumbers::new(3, 2, -1).unwrap();
    assert_eq!(qn.orbital_label(), "3d");
    assert_eq!(qn.to_string(), "(n=3, l=2, m=-1)");
    assert_eq!((qn.n(), qn.l(), qn.m()), (3, 2, -1));

    assert!(QuantumNumbers::with_spin(2, 1, 0, 0.5).is_ok());
    assert!(QuantumNumbers::with_spin(2, 1, 0, 1.0).is_err());
}
