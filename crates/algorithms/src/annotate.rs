//! Attach headings to planar positions.
//!
//! Planners in the plane often only produce positions. These functions turn them
//! into poses, estimating a heading for each state. All headings are normalized
//! into `[-π, π)`.
//!
//! The estimates based on differences follow the tangent of the path more closely
//! when the states are dense.

use crate::generate::index_ratio;
use crate::geom::angle::{interpolate_angle_shortest, normalize_angle};
use crate::geom::traits::Position2;
use crate::geom::{Scalar, StateSe2};
use crate::path::Path;

fn chord_yaw<S: Scalar, T: Position2<S>>(from: &T, to: &T) -> S {
    (to.y() - from.y()).atan2(to.x() - from.x())
}

fn pose<S: Scalar, T: Position2<S>>(state: &T, yaw: S) -> StateSe2<S> {
    StateSe2::new(state.x(), state.y(), normalize_angle(yaw))
}

/// Heading of the chord to the next state, or from the previous one for the last
/// state.
///
/// A single state gets a zero heading.
pub fn yaw_chord<S, T>(states: &[T]) -> Path<StateSe2<S>>
where
    S: Scalar,
    T: Position2<S>,
{
    let n = states.len();
    let mut out = Path::with_capacity(n);
    for (i, state) in states.iter().enumerate() {
        let yaw = if n == 1 {
            S::ZERO
        } else if i + 1 < n {
            chord_yaw(state, &states[i + 1])
        } else {
            chord_yaw(&states[i - 1], state)
        };
        out.push(pose(state, yaw));
    }

    out
}

/// Heading of the chord between the two neighbors of each state.
///
/// The first and last states use the chord to their only neighbor. A single
/// state gets a zero heading.
pub fn yaw_centered_diff<S, T>(states: &[T]) -> Path<StateSe2<S>>
where
    S: Scalar,
    T: Position2<S>,
{
    let n = states.len();
    let mut out = Path::with_capacity(n);
    for (i, state) in states.iter().enumerate() {
        let yaw = if n == 1 {
            S::ZERO
        } else if i == 0 {
            chord_yaw(state, &states[1])
        } else if i + 1 == n {
            chord_yaw(&states[i - 1], state)
        } else {
            chord_yaw(&states[i - 1], &states[i + 1])
        };
        out.push(pose(state, yaw));
    }

    out
}

/// Blends the heading from `start_yaw` to `end_yaw` along the shortest arc.
///
/// The blend goes by index, not by distance: the heading of the state `i` out of
/// `n` is at ratio `i / (n - 1)`.
pub fn yaw_lerp<S, T>(states: &[T], start_yaw: S, end_yaw: S) -> Path<StateSe2<S>>
where
    S: Scalar,
    T: Position2<S>,
{
    let n = states.len();
    states
        .iter()
        .enumerate()
        .map(|(i, state)| {
            let yaw = interpolate_angle_shortest(start_yaw, end_yaw, index_ratio(i, n));
            pose(state, yaw)
        })
        .collect()
}

/// Gives all states the same heading.
pub fn yaw_constant<S, T>(states: &[T], yaw: S) -> Path<StateSe2<S>>
where
    S: Scalar,
    T: Position2<S>,
{
    states.iter().map(|state| pose(state, yaw)).collect()
}

#[cfg(test)]
use crate::geom::StateR2;

#[cfg(test)]
fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[cfg(test)]
fn square_corner() -> [StateR2<f64>; 3] {
    [
        StateR2::new(0.0, 0.0),
        StateR2::new(1.0, 0.0),
        StateR2::new(1.0, 1.0),
    ]
}

#[test]
fn chords() {
    use core::f64::consts::FRAC_PI_2;

    let poses = yaw_chord(&square_corner());
    assert_eq!(poses.len(), 3);
    assert_eq!(poses[0], StateSe2::new(0.0, 0.0, 0.0));
    assert_eq!(poses[1], StateSe2::new(1.0, 0.0, FRAC_PI_2));
    assert_eq!(poses[2], StateSe2::new(1.0, 1.0, FRAC_PI_2));

    assert!(yaw_chord::<f64, StateR2<f64>>(&[]).is_empty());
    assert_eq!(
        yaw_chord(&[StateR2::new(2.0, 3.0)]).states(),
        &[StateSe2::new(2.0, 3.0, 0.0)]
    );
}

#[test]
fn chord_backwards_is_normalized() {
    use core::f64::consts::PI;

    // Heading west: atan2 gives π, normalized to -π.
    let states = [StateR2::new(1.0, 0.0), StateR2::new(0.0, 0.0)];
    let poses = yaw_chord(&states);
    assert_eq!(poses[0].yaw, -PI);
    assert_eq!(poses[1].yaw, -PI);
}

#[test]
fn centered_differences() {
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    let poses = yaw_centered_diff(&square_corner());
    assert_eq!(poses[0].yaw, 0.0);
    assert_close(poses[1].yaw, FRAC_PI_4);
    assert_eq!(poses[2].yaw, FRAC_PI_2);

    assert!(yaw_centered_diff::<f64, StateR2<f64>>(&[]).is_empty());
    assert_eq!(yaw_centered_diff(&[StateR2::new(2.0, 3.0)])[0].yaw, 0.0);
}

#[test]
fn blended_headings() {
    use core::f64::consts::{FRAC_PI_2, PI};

    let states = [StateR2::new(0.0, 0.0); 5];

    let poses = yaw_lerp(&states, 0.0, FRAC_PI_2);
    assert_eq!(poses.len(), 5);
    assert_eq!(poses[0].yaw, 0.0);
    assert_close(poses[2].yaw, FRAC_PI_2 / 2.0);
    assert_close(poses[4].yaw, FRAC_PI_2);

    // Across the ±π boundary, the short way round.
    let poses = yaw_lerp(&states[..3], 3.0, -3.0);
    assert_close(poses[1].yaw.abs(), PI);
    assert_close(poses[2].yaw, -3.0);

    let single = yaw_lerp(&states[..1], 1.0, 2.0);
    assert_eq!(single[0].yaw, 1.0);
}

#[test]
fn constant_heading() {
    use core::f64::consts::PI;

    let poses = yaw_constant(&square_corner(), 1.5 * PI);
    assert_eq!(poses.len(), 3);
    for (pose, state) in poses.iter().zip(square_corner().iter()) {
        assert_eq!(pose.x, state.x);
        assert_eq!(pose.y, state.y);
        assert_close(pose.yaw, -0.5 * PI);
    }
}
