//! Resample a path at a regular spacing.
//!
//! # Overview
//!
//! Planners tend to produce paths with irregularly spaced states: dense in
//! cluttered areas, sparse along straight lines. Controllers and collision
//! checkers usually prefer states at a roughly constant distance from each other.
//!
//! The resampler walks along the input states and emits a new state each time the
//! distance travelled since the previous emitted state reaches `ds`. The distance
//! is measured by a [`Metric`] and new states are produced by an
//! [`Interpolation`], so the same algorithm works for any kind of state.
//!
//! The first and last input states are always part of the output. The spacing
//! between the last interpolated state and the final state is whatever is left
//! over, so it can be anywhere in `(0, ds]`.
//!
//! ## Example
//!
//! ```
//! use trailblaze_algorithms::resample::resample;
//! use trailblaze_algorithms::geom::StateR2;
//!
//! let states = [StateR2::new(0.0, 0.0), StateR2::new(10.0, 0.0)];
//!
//! let mut output = Vec::new();
//! let count = resample(&states, 2.5, &mut output);
//!
//! assert_eq!(count, 5);
//! assert_eq!(output[1], StateR2::new(2.5, 0.0));
//! assert_eq!(output[4], StateR2::new(10.0, 0.0));
//! ```
//!
//! ## Custom policies
//!
//! Any closure can stand in for the metric or the interpolation of a state space:
//!
//! ```
//! use trailblaze_algorithms::resample::resample_with;
//! use trailblaze_algorithms::geom::StateR2;
//! use trailblaze_algorithms::path::Path;
//!
//! let states = [StateR2::new(0.0, 0.0), StateR2::new(3.0, 4.0)];
//!
//! // Distance along a grid.
//! let manhattan = |a: &StateR2<f64>, b: &StateR2<f64>| (a.x - b.x).abs() + (a.y - b.y).abs();
//! // Jump straight to the closest endpoint.
//! let snap = |a: &StateR2<f64>, b: &StateR2<f64>, t: f64| if t < 0.5 { *a } else { *b };
//!
//! let mut path = Path::new();
//! resample_with(&states, 1.0, &mut path, manhattan, snap);
//!
//! assert_eq!(path.len(), 8);
//! ```

use crate::geom::interpolation::Interpolation;
use crate::geom::metric::Metric;
use crate::geom::{Scalar, StateSpace};

use core::iter::once;

use num_traits::Float;

use log::{debug, trace};

/// Resamples `states` every `ds` using the default policies of the state space.
///
/// Appends to `out` and returns the number of states written.
///
/// See [`resample_with`].
pub fn resample<T, Sink>(states: &[T], ds: T::Scalar, out: &mut Sink) -> usize
where
    T: StateSpace,
    Sink: Extend<T>,
{
    resample_with(
        states,
        ds,
        out,
        T::Metric::default(),
        T::Interpolation::default(),
    )
}

/// Resamples `states` every `ds`, measuring distances with `metric` and producing
/// new states with `interpolation`.
///
/// Appends to `out` and returns the number of states written.
///
/// - An empty input writes nothing.
/// - A single state is written as is.
/// - If `ds` is not positive, only the first and last states are written.
///
/// Otherwise the first state is written, then a state every `ds` along the path,
/// then the last state. Segments of length zero are skipped. The distance left
/// over at the end of a segment carries to the next one.
///
/// A sample falling exactly on the last state is not written twice. Samples
/// falling *near* the last state are kept. Because of rounding, such a sample
/// can be equal to the last state, which then appears twice in the output.
pub fn resample_with<T, M, I, Sink>(
    states: &[T],
    ds: M::Scalar,
    out: &mut Sink,
    metric: M,
    interpolation: I,
) -> usize
where
    T: Clone,
    M: Metric<T>,
    I: Interpolation<T, M::Scalar>,
    Sink: Extend<T>,
{
    let n = states.len();
    if n == 0 {
        return 0;
    }

    if n == 1 {
        out.extend(once(states[0].clone()));
        return 1;
    }

    if ds <= M::Scalar::ZERO {
        debug!(
            "resample: non-positive spacing {}, writing the endpoints only",
            ds
        );
        out.extend(once(states[0].clone()));
        out.extend(once(states[n - 1].clone()));
        return 2;
    }

    let epsilon = M::Scalar::epsilon();

    out.extend(once(states[0].clone()));
    let mut count = 1;

    let mut carry = M::Scalar::ZERO;
    // A sample that landed exactly on the end of its segment. It only gets
    // written if the path goes on after it, otherwise the last state replaces it.
    let mut pending: Option<T> = None;

    for (i, pair) in states.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        let seg = metric.distance(a, b);
        if seg <= epsilon {
            trace!("resample: skipping zero-length segment {}", i);
            continue;
        }

        if let Some(sample) = pending.take() {
            out.extend(once(sample));
            count += 1;
        }

        let mut remaining = seg;
        while carry + remaining >= ds {
            let step = ds - carry;
            let t = M::Scalar::ONE - (remaining - step) / seg;
            let sample = interpolation.interpolate(a, b, t);
            remaining -= step;
            carry = M::Scalar::ZERO;

            if remaining <= M::Scalar::ZERO {
                pending = Some(sample);
            } else {
                out.extend(once(sample));
                count += 1;
            }
        }

        carry += remaining;
    }

    out.extend(once(states[n - 1].clone()));
    count += 1;

    debug!("resample: in={} out={} ds={}", n, count, ds);

    count
}

#[cfg(test)]
use crate::geom::{Quaternion, StateR2, StateSe2, StateSe3};
#[cfg(test)]
use crate::path::Path;
#[cfg(test)]
use alloc::vec::Vec;

#[cfg(test)]
fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn straight_line() {
    let states = [StateR2::new(0.0, 0.0), StateR2::new(10.0, 0.0)];
    let mut out = Vec::new();

    assert_eq!(resample(&states, 2.5, &mut out), 5);
    assert_eq!(
        out,
        alloc::vec![
            StateR2::new(0.0, 0.0),
            StateR2::new(2.5, 0.0),
            StateR2::new(5.0, 0.0),
            StateR2::new(7.5, 0.0),
            StateR2::new(10.0, 0.0),
        ]
    );
}

#[test]
fn single_state() {
    let states = [StateR2::new(0.0, 0.0)];

    // Regardless of the spacing.
    for &ds in &[1.0, 0.0, -3.0, f64::NAN] {
        let mut out = Vec::new();
        assert_eq!(resample(&states, ds, &mut out), 1);
        assert_eq!(out, alloc::vec![StateR2::new(0.0, 0.0)]);
    }
}

#[test]
fn empty_input() {
    let states: [StateR2<f64>; 0] = [];

    for &ds in &[1.0, 0.0, -3.0] {
        let mut out = Vec::new();
        assert_eq!(resample(&states, ds, &mut out), 0);
        assert!(out.is_empty());
    }
}

#[test]
fn non_positive_spacing() {
    let states = [
        StateR2::new(0.0, 0.0),
        StateR2::new(4.0, 0.0),
        StateR2::new(10.0, 0.0),
    ];

    for &ds in &[0.0, -1.0] {
        let mut out = Vec::new();
        assert_eq!(resample(&states, ds, &mut out), 2);
        assert_eq!(
            out,
            alloc::vec![StateR2::new(0.0, 0.0), StateR2::new(10.0, 0.0)]
        );
    }
}

#[test]
fn duplicate_states() {
    let states = [
        StateR2::new(0.0, 0.0),
        StateR2::new(5.0, 0.0),
        StateR2::new(5.0, 0.0),
        StateR2::new(15.0, 0.0),
    ];
    let mut out = Vec::new();

    assert_eq!(resample(&states, 5.0, &mut out), 4);
    assert_eq!(
        out,
        alloc::vec![
            StateR2::new(0.0, 0.0),
            StateR2::new(5.0, 0.0),
            StateR2::new(10.0, 0.0),
            StateR2::new(15.0, 0.0),
        ]
    );
}

#[test]
fn only_duplicate_states() {
    let states = [StateR2::new(1.0, 1.0); 4];
    let mut out = Vec::new();

    assert_eq!(resample(&states, 0.5, &mut out), 2);
    assert_eq!(out, alloc::vec![StateR2::new(1.0, 1.0); 2]);
}

#[test]
fn heading_follows_the_goal() {
    use core::f64::consts::FRAC_PI_2;

    let states = [
        StateSe2::new(0.0, 0.0, 0.0),
        StateSe2::new(10.0, 0.0, FRAC_PI_2),
    ];
    let mut out = Vec::new();

    assert_eq!(resample(&states, 10.0, &mut out), 2);
    assert_eq!(out[0], states[0]);
    assert_eq!(out[1], states[1]);

    // Halfway, the heading is halfway too.
    out.clear();
    assert_eq!(resample(&states, 5.0, &mut out), 3);
    assert_close(out[1].x, 5.0);
    assert_close(out[1].yaw, FRAC_PI_2 / 2.0);
}

#[test]
fn carry_across_segments() {
    let states = [
        StateR2::new(0.0, 0.0),
        StateR2::new(1.0, 0.0),
        StateR2::new(2.0, 0.0),
        StateR2::new(3.0, 0.0),
    ];
    let mut out = Vec::new();

    assert_eq!(resample(&states, 1.5, &mut out), 3);
    assert_eq!(
        out,
        alloc::vec![
            StateR2::new(0.0, 0.0),
            StateR2::new(1.5, 0.0),
            StateR2::new(3.0, 0.0),
        ]
    );
}

#[test]
fn carry_around_a_corner() {
    // An L shape, 2 units each way.
    let states = [
        StateR2::new(0.0, 0.0),
        StateR2::new(2.0, 0.0),
        StateR2::new(2.0, 2.0),
    ];
    let mut out = Vec::new();

    assert_eq!(resample(&states, 1.5, &mut out), 4);
    assert_close(out[1].x, 1.5);
    assert_close(out[1].y, 0.0);
    assert_close(out[2].x, 2.0);
    assert_close(out[2].y, 1.0);
    assert_eq!(out[3], StateR2::new(2.0, 2.0));
}

#[test]
fn near_duplicate_goal_is_kept() {
    let states = [StateR2::new(0.0, 0.0), StateR2::new(10.0, 0.0)];
    let mut out = Vec::new();

    assert_eq!(resample(&states, 4.999, &mut out), 4);
    assert_close(out[1].x, 4.999);
    assert_close(out[2].x, 9.998);
    assert_eq!(out[3], StateR2::new(10.0, 0.0));
}

#[test]
fn rounding_can_repeat_the_goal() {
    // 0.2 is not exact: after five steps a sliver of distance is left, so the
    // fifth sample is written and the goal follows it.
    let states = [StateR2::new(0.0, 0.0), StateR2::new(1.0, 0.0)];
    let mut out = Vec::new();

    assert_eq!(resample(&states, 0.2, &mut out), 7);
    assert_close(out[5].x, 1.0);
    assert_eq!(out[6], StateR2::new(1.0, 0.0));
}

#[test]
fn spacing_larger_than_path() {
    let states = [
        StateR2::new(0.0, 0.0),
        StateR2::new(1.0, 0.0),
        StateR2::new(1.0, 1.0),
    ];
    let mut out = Vec::new();

    assert_eq!(resample(&states, 100.0, &mut out), 2);
    assert_eq!(out, alloc::vec![states[0], states[2]]);
}

#[test]
fn closure_policies() {
    let states = [StateR2::new(0.0, 0.0), StateR2::new(3.0, 4.0)];

    let manhattan = |a: &StateR2<f64>, b: &StateR2<f64>| (a.x - b.x).abs() + (a.y - b.y).abs();
    let lerp = |a: &StateR2<f64>, b: &StateR2<f64>, t: f64| {
        StateR2::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
    };

    let mut out = Vec::new();
    assert_eq!(resample_with(&states, 3.5, &mut out, manhattan, lerp), 3);
    assert_eq!(out[1], StateR2::new(1.5, 2.0));
    assert_eq!(out[2], StateR2::new(3.0, 4.0));
}

#[test]
fn appends_to_a_path() {
    let states = [StateR2::new(0.0f32, 0.0), StateR2::new(0.0, 2.0)];

    let mut path = Path::new();
    path.push(StateR2::new(-1.0, -1.0));

    assert_eq!(resample(&states, 1.0, &mut path), 3);
    assert_eq!(path.len(), 4);
    assert_eq!(path.start(), Some(&StateR2::new(-1.0, -1.0)));
    assert_eq!(path[1], StateR2::new(0.0, 0.0));
    assert_eq!(path[2], StateR2::new(0.0, 1.0));
    assert_eq!(path.goal(), Some(&StateR2::new(0.0, 2.0)));
}

#[test]
fn poses_in_space() {
    use core::f64::consts::FRAC_PI_2;

    let start = StateSe3::at(0.0, 0.0, 0.0);
    let goal = StateSe3::at(2.0, 0.0, 0.0).with_orientation(Quaternion::from_yaw(FRAC_PI_2));
    let mut out = Vec::new();

    assert_eq!(resample(&[start, goal], 1.0, &mut out), 3);

    let middle = &out[1];
    assert_close(middle.position.x, 1.0);
    let expected = Quaternion::from_yaw(FRAC_PI_2 / 2.0);
    assert_close(middle.orientation.qz(), expected.z);
    assert_close(middle.orientation.qw(), expected.w);
}

#[test]
fn count_matches_output() {
    let _ = env_logger::builder().is_test(true).try_init();

    let states: Vec<StateR2<f64>> = (0..20)
        .map(|i| StateR2::new((i * i) as f64 * 0.1, (i % 3) as f64))
        .collect();

    for &ds in &[0.05, 0.3, 1.0, 7.0, 1000.0] {
        let mut out = Vec::new();
        let count = resample(&states, ds, &mut out);
        assert_eq!(count, out.len());
        assert_eq!(out.first(), states.first());
        assert_eq!(out.last(), states.last());
    }
}
