//! Generate simple paths in the plane.
//!
//! Handy to feed planners and controllers with test input, or to build reference
//! paths out of primitives.
//!
//! ```
//! use trailblaze_algorithms::generate::{circle_arc_r2, ByCount};
//! use trailblaze_algorithms::geom::StateR2;
//! use std::f64::consts::PI;
//!
//! // A half circle, counter-clockwise.
//! let arc = circle_arc_r2(StateR2::new(0.0, 0.0), 1.0, 0.0, PI, ByCount(9));
//!
//! assert_eq!(arc.len(), 9);
//! assert_eq!(arc.start(), Some(&StateR2::new(1.0, 0.0)));
//! ```

use crate::geom::{Interval, Scalar, StateR2};
use crate::path::Path;

use num_traits::NumCast;

use log::debug;

/// Sample a fixed number of states, including both ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ByCount(pub usize);

/// Sample at a fixed spacing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ByStep<S>(pub S);

/// Ratio of `i` over `n - 1`, zero when `n` is one.
pub(crate) fn index_ratio<S: Scalar>(i: usize, n: usize) -> S {
    if n <= 1 {
        return S::ZERO;
    }

    match (<S as NumCast>::from(i), <S as NumCast>::from(n - 1)) {
        (Some(i), Some(last)) => i / last,
        _ => S::ZERO,
    }
}

/// Evenly spaced states on the line from `start` to `goal`.
///
/// Both ends are included when the count is at least two. A count of one
/// produces only `start`.
pub fn line_r2<S: Scalar>(
    start: StateR2<S>,
    goal: StateR2<S>,
    count: ByCount,
) -> Path<StateR2<S>> {
    let ByCount(n) = count;
    (0..n)
        .map(|i| {
            let t: S = index_ratio(i, n);
            StateR2::new(
                (S::ONE - t) * start.x + t * goal.x,
                (S::ONE - t) * start.y + t * goal.y,
            )
        })
        .collect()
}

/// States every `step` along `direction`, from `start` to the point at `length`.
///
/// The direction does not need to be normalized. The point at `length` is always
/// the last state, even if it is closer than `step` to the one before.
///
/// A zero direction or a non-positive length or step produce only `start`.
pub fn line_r2_by_step<S: Scalar>(
    start: StateR2<S>,
    direction: StateR2<S>,
    length: S,
    step: ByStep<S>,
) -> Path<StateR2<S>> {
    let ByStep(step) = step;
    let magnitude = direction.x.hypot(direction.y);
    if magnitude == S::ZERO || length <= S::ZERO || step <= S::ZERO {
        return Path::from_vec(alloc::vec![start]);
    }

    let n = match (length / step).floor().to_usize() {
        Some(n) => n + 1,
        None => {
            debug!("line_r2_by_step: cannot sample {} every {}", length, step);
            return Path::from_vec(alloc::vec![start]);
        }
    };

    let ux = direction.x / magnitude;
    let uy = direction.y / magnitude;
    let at = |s: S| StateR2::new(start.x + ux * s, start.y + uy * s);

    let mut out = Path::with_capacity(n + 1);
    for i in 0..n {
        let s = match <S as NumCast>::from(i) {
            Some(i) => (i * step).min(length),
            None => length,
        };
        out.push(at(s));
    }

    let end = at(length);
    let reached = match out.goal() {
        Some(last) => (last.x - end.x).hypot(last.y - end.y) <= S::value(1e-12),
        None => false,
    };
    if !reached {
        out.push(end);
    }

    out
}

/// Evenly spaced states on a circle arc.
///
/// The arc starts at angle `theta0` and sweeps `sweep` radians, counter-clockwise
/// for a positive sweep.
pub fn circle_arc_r2<S: Scalar>(
    center: StateR2<S>,
    radius: S,
    theta0: S,
    sweep: S,
    count: ByCount,
) -> Path<StateR2<S>> {
    let ByCount(n) = count;
    (0..n)
        .map(|i| {
            let angle = theta0 + index_ratio::<S>(i, n) * sweep;
            let (sin, cos) = angle.sin_cos();
            StateR2::new(center.x + radius * cos, center.y + radius * sin)
        })
        .collect()
}

/// Evenly spaced samples of a parametric curve over `range`.
pub fn parametric_r2<S, F>(curve: F, range: Interval<S>, count: ByCount) -> Path<StateR2<S>>
where
    S: Scalar,
    F: Fn(S) -> StateR2<S>,
{
    let ByCount(n) = count;
    (0..n)
        .map(|i| curve(range.lerp(index_ratio(i, n))))
        .collect()
}

#[cfg(test)]
fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn line_by_count() {
    let start = StateR2::new(0.0, 1.0);
    let goal = StateR2::new(4.0, -3.0);

    assert!(line_r2(start, goal, ByCount(0)).is_empty());
    assert_eq!(line_r2(start, goal, ByCount(1)).states(), &[start]);

    let line = line_r2(start, goal, ByCount(5));
    assert_eq!(line.len(), 5);
    assert_eq!(line.start(), Some(&start));
    assert_eq!(line.goal(), Some(&goal));
    assert_eq!(line[2], StateR2::new(2.0, -1.0));
}

#[test]
fn line_by_step() {
    let start = StateR2::new(1.0, 1.0);
    let direction = StateR2::new(0.0, 2.0);

    let line = line_r2_by_step(start, direction, 2.5, ByStep(1.0));
    assert_eq!(
        line.states(),
        &[
            StateR2::new(1.0, 1.0),
            StateR2::new(1.0, 2.0),
            StateR2::new(1.0, 3.0),
            StateR2::new(1.0, 3.5),
        ]
    );

    // The length is a multiple of the step: no extra state.
    let line = line_r2_by_step(start, direction, 2.0, ByStep(1.0));
    assert_eq!(line.len(), 3);
    assert_eq!(line.goal(), Some(&StateR2::new(1.0, 3.0)));
}

#[test]
fn line_by_step_degenerate() {
    let start = StateR2::new(1.0, 1.0);
    let only_start = [start];

    let zero = StateR2::new(0.0, 0.0);
    let east = StateR2::new(1.0, 0.0);
    assert_eq!(line_r2_by_step(start, zero, 1.0, ByStep(0.1)).states(), &only_start);
    assert_eq!(line_r2_by_step(start, east, 0.0, ByStep(0.1)).states(), &only_start);
    assert_eq!(line_r2_by_step(start, east, 1.0, ByStep(-0.1)).states(), &only_start);
}

#[test]
fn circle_arc() {
    use core::f64::consts::{FRAC_PI_2, PI};

    let center = StateR2::new(1.0, 1.0);
    let arc = circle_arc_r2(center, 2.0, FRAC_PI_2, -PI, ByCount(3));

    assert_eq!(arc.len(), 3);
    assert_close(arc[0].x, 1.0);
    assert_close(arc[0].y, 3.0);
    assert_close(arc[1].x, 3.0);
    assert_close(arc[1].y, 1.0);
    assert_close(arc[2].x, 1.0);
    assert_close(arc[2].y, -1.0);

    assert!(circle_arc_r2(center, 2.0, 0.0, PI, ByCount(0)).is_empty());
}

#[test]
fn parametric_curve() {
    let parabola = |t: f64| StateR2::new(t, t * t);
    let range = Interval::new(-1.0, 1.0).unwrap();

    let path = parametric_r2(parabola, range, ByCount(5));
    assert_eq!(
        path.states(),
        &[
            StateR2::new(-1.0, 1.0),
            StateR2::new(-0.5, 0.25),
            StateR2::new(0.0, 0.0),
            StateR2::new(0.5, 0.25),
            StateR2::new(1.0, 1.0),
        ]
    );

    let single = parametric_r2(parabola, range, ByCount(1));
    assert_eq!(single.states(), &[StateR2::new(-1.0, 1.0)]);
}
