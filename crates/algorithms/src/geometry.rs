//! Length and heading helpers.

use crate::geom::angle::normalize_angle;
use crate::geom::metric::{EuclideanDistance2D, Metric};
use crate::geom::traits::{Position2, Yaw};
use crate::geom::Scalar;

use log::debug;

/// Length of the path in the plane, ignoring any other component.
///
/// Returns zero for fewer than two states.
pub fn length_xy<S, T>(states: &[T]) -> S
where
    S: Scalar,
    T: Position2<S>,
{
    length(states, EuclideanDistance2D::new())
}

/// Sum of the distances between consecutive states.
pub fn length<T, M: Metric<T>>(states: &[T], metric: M) -> M::Scalar {
    let mut length = M::Scalar::ZERO;
    for pair in states.windows(2) {
        length += metric.distance(&pair[0], &pair[1]);
    }

    length
}

/// Brings every heading back into `[-π, π)`.
///
/// Returns the number of headings that were out of range.
pub fn normalize_yaw<S, T>(states: &mut [T]) -> usize
where
    S: Scalar,
    T: Yaw<S>,
{
    let mut count = 0;
    for state in states.iter_mut() {
        let yaw = state.yaw();
        if yaw < -S::PI() || yaw >= S::PI() {
            state.set_yaw(normalize_angle(yaw));
            count += 1;
        }
    }

    if count > 0 {
        debug!("normalize_yaw: normalized {} of {} headings", count, states.len());
    }

    count
}

#[cfg(test)]
use crate::geom::{StateR2, StateR3, StateSe2};

#[test]
fn planar_length() {
    let states = [
        StateR2::new(0.0, 0.0),
        StateR2::new(3.0, 4.0),
        StateR2::new(3.0, 6.0),
    ];
    assert_eq!(length_xy(&states), 7.0);
    assert_eq!(length_xy(&states[..1]), 0.0);
    assert_eq!(length_xy::<f64, StateR2<f64>>(&[]), 0.0);

    // The height does not count.
    let states = [StateR3::new(0.0, 0.0, 0.0), StateR3::new(0.0, 1.0, 100.0)];
    assert_eq!(length_xy(&states), 1.0);
}

#[test]
fn metric_length() {
    use crate::geom::metric::EuclideanDistance3D;

    let states = [
        StateR3::new(0.0, 0.0, 0.0),
        StateR3::new(0.0, 0.0, 2.0),
        StateR3::new(0.0, 0.0, 2.0),
        StateR3::new(1.0, 0.0, 2.0),
    ];
    assert_eq!(length(&states, EuclideanDistance3D::new()), 3.0);

    let hops = |_: &StateR3<f64>, _: &StateR3<f64>| 1.0;
    assert_eq!(length(&states, hops), 3.0);
}

#[test]
fn yaw_normalization() {
    use core::f64::consts::PI;

    let mut states = [
        StateSe2::new(0.0, 0.0, 0.5),
        StateSe2::new(0.0, 0.0, 3.0 * PI / 2.0),
        StateSe2::new(0.0, 0.0, -PI),
        StateSe2::new(0.0, 0.0, PI),
    ];

    assert_eq!(normalize_yaw(&mut states), 2);
    assert_eq!(states[0].yaw, 0.5);
    assert!((states[1].yaw + PI / 2.0).abs() < 1e-12);
    assert_eq!(states[2].yaw, -PI);
    assert_eq!(states[3].yaw, -PI);
}
