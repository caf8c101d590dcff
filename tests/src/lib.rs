//! Fixtures shared by the workspace tests and benchmarks.

use trailblaze::algorithms::annotate::yaw_centered_diff;
use trailblaze::algorithms::generate::{parametric_r2, ByCount};
use trailblaze::geom::metric::Metric;
use trailblaze::geom::{Interval, StateR2, StateSe2};
use trailblaze::path::Path;

/// Alternates between `y = 0` and `y = step` while moving along x.
pub fn zigzag(n: usize, step: f64) -> Path<StateR2<f64>> {
    (0..n)
        .map(|i| StateR2::new(i as f64 * step, (i % 2) as f64 * step))
        .collect()
}

/// An archimedean spiral with headings along the curve.
pub fn spiral(n: usize, turns: f64) -> Path<StateSe2<f64>> {
    let range = Interval::new(0.0, turns.abs() * 2.0 * std::f64::consts::PI).unwrap();
    let positions = parametric_r2(
        |t: f64| StateR2::new(t * t.cos(), t * t.sin()),
        range,
        ByCount(n),
    );

    yaw_centered_diff(positions.states())
}

/// Smallest and largest distance between consecutive states.
pub fn spacing_range<T, M: Metric<T, Scalar = f64>>(states: &[T], metric: M) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = 0.0f64;
    for pair in states.windows(2) {
        let d = metric.distance(&pair[0], &pair[1]);
        min = min.min(d);
        max = max.max(d);
    }

    (min, max)
}

#[cfg(test)]
mod resample;
