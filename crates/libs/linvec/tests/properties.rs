//! Property and scenario tests for the public vector API.

use approx::{abs_diff_eq, assert_abs_diff_eq, assert_relative_eq, relative_eq};
use linvec::{
    angle, angle_convert, cross, deg_to_rad, distance, dot, magnitude, normalize, rad_to_deg,
    vec2_from_angle, vector, AngleUnit, HighpVec3, LowpVec2, LowpVec3, MathError, MedpVec3,
    Vector,
};
use proptest::prelude::*;

#[test]
fn vector_from_zero_radians() {
    assert_eq!(vec2_from_angle(0.0f32, AngleUnit::Radians), LowpVec2::new([1.0, 0.0]));
}

#[test]
fn vector_from_ninety_degrees() {
    assert_abs_diff_eq!(
        vec2_from_angle(90.0f64, AngleUnit::Degrees),
        vector![0.0, 1.0],
        epsilon = 1e-12
    );
}

#[test]
fn orthogonal_axes() {
    let x = LowpVec3::new([1.0, 0.0, 0.0]);
    let y = LowpVec3::new([0.0, 1.0, 0.0]);
    assert_eq!(dot(&x, &y), 0.0);
    assert_eq!(cross(&x, &y), LowpVec3::new([0.0, 0.0, 1.0]));
}

#[test]
fn pythagorean_triple() {
    assert_eq!(magnitude(&LowpVec2::new([3.0, 4.0])), 5.0);
    assert_eq!(distance(&LowpVec2::zeros(), &LowpVec2::new([3.0, 4.0])), 5.0);
}

#[test]
fn degenerate_inputs_are_reported() {
    let zero = MedpVec3::zeros();
    let x = MedpVec3::new([1.0, 0.0, 0.0]);
    assert!(matches!(normalize(&zero), Err(MathError::ZeroMagnitude { .. })));
    assert!(matches!(angle(&x, &zero), Err(MathError::ZeroMagnitude { .. })));
    assert_eq!(x.try_div(0.0), Err(MathError::DivisionByZero));
}

#[test]
fn large_inputs_stay_finite() {
    let a = LowpVec3::new([1e20, 0.0, 0.0]);
    assert_eq!(angle(&a, &a), Ok(0.0));
    assert_eq!(normalize(&LowpVec2::new([1e20, 0.0])), Ok(LowpVec2::new([1.0, 0.0])));
    assert!(matches!(
        normalize(&LowpVec2::new([f32::INFINITY, 0.0])),
        Err(MathError::NonFinite { .. })
    ));
}

#[test]
fn components_of_mixed_types() {
    let v = vector![f64; 1, 2.5f32, 3u8];
    assert_eq!(v, MedpVec3::new([1.0, 2.5, 3.0]));
}

#[test]
fn angle_conversion_dispatch() {
    assert_relative_eq!(angle_convert(180.0f64, AngleUnit::Radians), std::f64::consts::PI);
    assert_relative_eq!(angle_convert(std::f64::consts::PI, AngleUnit::Degrees), 180.0);
}

#[test]
fn highp_alias_is_usable() {
    let v = HighpVec3::splat(2.0);
    assert_eq!(v.magnitude_squared(), 12.0);
}

fn vec3() -> impl Strategy<Value = Vector<f64, 3>> {
    prop::array::uniform3(-100.0f64..100.0).prop_map(Vector::new)
}

fn non_zero_vec3() -> impl Strategy<Value = Vector<f64, 3>> {
    vec3().prop_filter("non-zero magnitude", |v| v.magnitude() > 1e-3)
}

proptest! {
    #[test]
    fn normalize_gives_unit_length(v in non_zero_vec3()) {
        let n = normalize(&v).unwrap();
        prop_assert!(relative_eq!(magnitude(&n), 1.0, max_relative = 1e-12));
    }

    #[test]
    fn dot_is_commutative(a in vec3(), b in vec3()) {
        prop_assert_eq!(dot(&a, &b), dot(&b, &a));
    }

    #[test]
    fn cross_is_orthogonal_to_inputs(a in vec3(), b in vec3()) {
        let c = cross(&a, &b);
        prop_assert!(abs_diff_eq!(dot(&c, &a), 0.0, epsilon = 1e-7));
        prop_assert!(abs_diff_eq!(dot(&c, &b), 0.0, epsilon = 1e-7));
    }

    #[test]
    fn distance_to_itself_is_zero(v in vec3()) {
        prop_assert_eq!(distance(&v, &v), 0.0);
    }

    #[test]
    fn degree_radian_round_trip(x in -1.0e5f64..1.0e5) {
        prop_assert!(relative_eq!(deg_to_rad(rad_to_deg(x)), x, epsilon = 1e-9, max_relative = 1e-12));
        prop_assert!(relative_eq!(rad_to_deg(deg_to_rad(x)), x, epsilon = 1e-9, max_relative = 1e-12));
    }

    #[test]
    fn angle_with_itself_is_zero(v in non_zero_vec3()) {
        prop_assert!(abs_diff_eq!(angle(&v, &v).unwrap(), 0.0, epsilon = 1e-6));
    }

    #[test]
    fn angle_is_within_range(a in non_zero_vec3(), b in non_zero_vec3()) {
        let theta = angle(&a, &b).unwrap();
        prop_assert!((0.0..=std::f64::consts::PI).contains(&theta));
    }

    #[test]
    fn scaling_then_dividing_restores(v in vec3(), s in 0.5f64..4.0) {
        let back = (v * s) / s;
        prop_assert!(relative_eq!(back, v, epsilon = 1e-12, max_relative = 1e-12));
    }
}
