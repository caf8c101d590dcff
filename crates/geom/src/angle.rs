//! Scalar and angle helpers.
//!
//! Angles are plain scalars in radians. Normalized angles live in `[-π, π)`.

use crate::scalar::Scalar;

/// Converts an angle in degrees to radians.
#[inline]
pub fn to_rad<S: Scalar>(deg: S) -> S {
    deg / S::value(180.0) * S::PI()
}

/// Linear interpolation between two scalars.
///
/// Returns `a` for `t = 0` and `b` for `t = 1`. All other values of `t` outside of
/// `[0, 1]` extrapolate.
#[inline]
pub fn lerp<S: Scalar>(a: S, b: S, t: S) -> S {
    a + t * (b - a)
}

/// Normalizes an angle to the range `[-π, π)`.
pub fn normalize_angle<S: Scalar>(angle: S) -> S {
    let pi = S::PI();
    if angle >= -pi && angle < pi {
        return angle;
    }

    let two_pi = S::TWO * pi;
    let mut wrapped = (angle + pi) % two_pi;
    if wrapped < S::ZERO {
        wrapped += two_pi;
    }

    wrapped - pi
}

/// Interpolates between two angles along the shortest arc.
///
/// The result is normalized to `[-π, π)`.
#[inline]
pub fn interpolate_angle_shortest<S: Scalar>(a: S, b: S, t: S) -> S {
    let distance = normalize_angle(b - a);
    normalize_angle(a + t * distance)
}

#[cfg(test)]
fn assert_near(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn deg_to_rad() {
    use core::f64::consts::{FRAC_PI_2, PI};

    assert_eq!(to_rad(0.0f64), 0.0);
    assert_near(to_rad(90.0), FRAC_PI_2);
    assert_near(to_rad(-90.0), -FRAC_PI_2);
    assert_eq!(to_rad(180.0), PI);
}

#[test]
fn normalization_range() {
    use core::f64::consts::{FRAC_PI_2, PI};

    assert_eq!(normalize_angle(PI), -PI);
    assert_eq!(normalize_angle(-PI), -PI);
    assert_eq!(normalize_angle(0.5f64), 0.5);
    assert_near(normalize_angle(3.0 * FRAC_PI_2), -FRAC_PI_2);
    assert_near(normalize_angle(-3.0 * FRAC_PI_2), FRAC_PI_2);
    assert_near(normalize_angle(5.0 * PI + 0.25), -PI + 0.25);

    for i in -100..100 {
        let a = normalize_angle(i as f64 * 0.37);
        assert!(a >= -PI && a < PI);
    }
}

#[test]
fn scalar_lerp() {
    assert_near(lerp(0.0, 1.0, 0.5), 0.5);
    assert_near(lerp(1.0, 2.0, 0.5), 1.5);
    assert_near(lerp(-10.0, 10.0, 0.5), 0.0);
    assert_near(lerp(0.0, -1.0, 0.3), -0.3);
    // Extrapolates.
    assert_near(lerp(0.0, 1.0, -0.3), -0.3);
}

#[test]
fn shortest_arc() {
    assert_near(
        interpolate_angle_shortest(to_rad(0.0), to_rad(100.0), 0.5),
        to_rad(50.0),
    );
    assert_near(
        interpolate_angle_shortest(to_rad(1.0), to_rad(2.0), 0.5),
        to_rad(1.5),
    );
    // Half way between 0 and 180 degrees goes through -90 since 180 normalizes to -180.
    assert_near(
        interpolate_angle_shortest(to_rad(0.0), to_rad(180.0), 0.5),
        to_rad(-90.0),
    );
    // Crossing the discontinuity.
    assert_near(
        interpolate_angle_shortest(to_rad(-170.0), to_rad(160.0), 0.5),
        to_rad(175.0),
    );
    assert_near(
        interpolate_angle_shortest(to_rad(10.0), to_rad(50.0), 0.0),
        to_rad(10.0),
    );
}
