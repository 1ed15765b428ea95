//! End-to-end behaviour of the conversion strategies through `UnitConv`.

use atk_core::{ConfigError, UnitSystem};
use atk_units::{ConversionError, Hook, PchipUnitConv, PolyUnitConv, UnitConv};
use proptest::prelude::*;

fn poly(coefficients: &[f64]) -> UnitConv {
    UnitConv::new(1, PolyUnitConv::new(coefficients.to_vec()).unwrap())
}

proptest! {
    #[test]
    fn pure_scaling_round_trips(v in -1.0e12_f64..1.0e12_f64) {
        let uc = poly(&[2.0, 0.0]);
        let phys = uc.eng_to_phys(v).unwrap();
        prop_assert_eq!(phys, 2.0 * v);
        prop_assert_eq!(uc.phys_to_eng(phys).unwrap(), v);
    }

    #[test]
    fn identity_polynomial_is_identity(v in -1.0e12_f64..1.0e12_f64) {
        let uc = poly(&[1.0, 0.0]);
        prop_assert_eq!(uc.eng_to_phys(v).unwrap(), v);
        prop_assert_eq!(uc.phys_to_eng(v).unwrap(), v);
    }

    #[test]
    fn pchip_inverse_recovers_input(v in 0.0_f64..=30.0) {
        let uc = UnitConv::new(
            5,
            PchipUnitConv::new(&[0.0, 5.0, 12.0, 20.0, 30.0], &[0.0, 0.8, 1.5, 1.9, 2.05]).unwrap(),
        );
        let phys = uc.eng_to_phys(v).unwrap();
        let back = uc.phys_to_eng(phys).unwrap();
        prop_assert!((back - v).abs() < 1e-8, "{} -> {} -> {}", v, phys, back);
    }
}

#[test]
fn pchip_linear_knots_are_identity() {
    let uc = UnitConv::new(2, PchipUnitConv::new(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap());
    assert_eq!(uc.eng_to_phys(2.0).unwrap(), 2.0);
    assert_eq!(uc.phys_to_eng(2.0).unwrap(), 2.0);
    assert_eq!(uc.phys_to_eng(2.5).unwrap(), 2.5);
}

#[test]
fn pchip_non_monotonic_y_fails_at_construction() {
    let err = PchipUnitConv::new(&[1.0, 2.0, 3.0], &[1.0, 3.0, 2.0]).unwrap_err();
    assert!(matches!(err, ConfigError::NonMonotonic { .. }));
}

#[test]
fn pchip_decreasing_curve_inverts() {
    let uc = UnitConv::new(3, PchipUnitConv::new(&[0.0, 1.0, 2.0, 3.0], &[9.0, 4.0, 1.0, 0.0]).unwrap());
    let phys = uc.eng_to_phys(1.5).unwrap();
    assert!(phys < 4.0 && phys > 1.0);
    assert!((uc.phys_to_eng(phys).unwrap() - 1.5).abs() < 1e-9);
}

#[test]
fn pchip_inverse_outside_range_has_no_candidate() {
    let uc = UnitConv::new(2, PchipUnitConv::new(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap());
    // The line extrapolates to 10.0 at eng = 10.0, outside the knot limits.
    match uc.phys_to_eng(10.0).unwrap_err() {
        ConversionError::NoCandidate { candidates, lower, upper, .. } => {
            assert_eq!(candidates, vec![10.0]);
            assert_eq!((lower, upper), (Some(1.0), Some(3.0)));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn two_real_roots_within_limits_is_ambiguous() {
    // phys = eng^2 - 1: phys = 3 gives eng = +-2.
    let uc = poly(&[1.0, 0.0, -1.0]).with_limits(Some(-10.0), Some(10.0));
    let err = uc.phys_to_eng(3.0).unwrap_err();
    match &err {
        ConversionError::Ambiguous { candidates, target, .. } => {
            assert_eq!(*target, UnitSystem::Eng);
            assert_eq!(candidates.len(), 2);
            assert!((candidates[0] + 2.0).abs() < 1e-12);
            assert!((candidates[1] - 2.0).abs() < 1e-12);
        }
        other => panic!("unexpected {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("[-2.0, 2.0]"), "{msg}");
}

#[test]
fn physics_value_just_outside_quadratic_range_has_no_candidate() {
    // phys = eng^2 - 2 eng has a minimum of -1; below it the roots are complex.
    let uc = poly(&[1.0, -2.0, 0.0]);
    match uc.phys_to_eng(-1.000001) {
        Err(ConversionError::NoCandidate { candidates, target, .. }) => {
            assert_eq!(target, UnitSystem::Eng);
            assert!(candidates.is_empty(), "{candidates:?}");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!((uc.phys_to_eng(-1.0).unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn cubic_inverse_picks_root_inside_limits() {
    // phys = eng^3 - eng has three roots at phys = 0; limits keep one.
    let uc = poly(&[1.0, 0.0, -1.0, 0.0]).with_limits(Some(0.5), Some(2.0));
    assert!((uc.phys_to_eng(0.0).unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn hooks_wrap_the_raw_conversion() {
    // A log-scale physics quantity on top of a linear calibration.
    let uc = poly(&[0.5, 0.0])
        .with_post_eng_to_phys(Hook::new(f64::exp))
        .with_pre_phys_to_eng(Hook::new(f64::ln));
    let phys = uc.eng_to_phys(2.0).unwrap();
    assert!((phys - 1.0_f64.exp()).abs() < 1e-12);
    assert!((uc.phys_to_eng(phys).unwrap() - 2.0).abs() < 1e-12);
}

#[test]
fn conversion_error_names_the_conversion() {
    let uc = UnitConv::new(42, PolyUnitConv::new([1.0, 0.0]).unwrap()).with_limits(Some(0.0), None);
    let msg = uc.eng_to_phys(-1.0).unwrap_err().to_string();
    assert!(msg.contains("UnitConv 42"), "{msg}");
    assert!(msg.contains("lower"), "{msg}");
}
