use crate::{spacing_range, spiral, zigzag};

use trailblaze::algorithms::annotate::yaw_chord;
use trailblaze::algorithms::generate::{circle_arc_r2, line_r2, ByCount};
use trailblaze::algorithms::geometry::{length, length_xy, normalize_yaw};
use trailblaze::algorithms::resample::{resample, resample_with};
use trailblaze::geom::interpolation::Interpolation;
use trailblaze::geom::metric::{EuclideanDistance2D, WeightedPoseDistance};
use trailblaze::geom::{Quaternion, StateR2, StateSe2, StateSe3, StateSpace};
use trailblaze::path::Path;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn straight_line_is_evenly_spaced() {
    init_logger();

    let line = line_r2(StateR2::new(-2.0, 1.0), StateR2::new(8.0, 1.0), ByCount(3));
    let mut out = Path::new();
    let count = resample(line.states(), 0.75, &mut out);

    // 10 units: 13 samples every 0.75, then the goal 0.25 further.
    assert_eq!(count, 15);
    assert_eq!(out.len(), count);

    let (min, max) = spacing_range(&out.states()[..count - 1], EuclideanDistance2D::new());
    assert!((min - 0.75).abs() < 1e-9, "{}", min);
    assert!((max - 0.75).abs() < 1e-9, "{}", max);

    let last_gap = length_xy(&out.states()[count - 2..]);
    assert!(last_gap > 0.0 && last_gap <= 0.75);
}

#[test]
fn corners_are_cut_not_lengthened() {
    init_logger();

    let input = zigzag(50, 1.0);
    for &ds in &[0.1, 0.5, 1.3, 4.0] {
        let mut out = Vec::new();
        let count = resample(input.states(), ds, &mut out);

        assert_eq!(count, out.len());
        assert_eq!(out.first(), input.start());
        assert_eq!(out.last(), input.goal());
        assert!(length_xy(&out) <= length_xy(input.states()) + 1e-9);
    }
}

#[test]
fn circle_sample_count() {
    use std::f64::consts::PI;

    let arc = circle_arc_r2(StateR2::new(0.0, 0.0), 10.0, 0.0, PI, ByCount(1000));
    let arc_length = length_xy(arc.states());
    assert!((arc_length - 10.0 * PI).abs() < 1e-3);

    let mut out = Vec::new();
    let count = resample(arc.states(), 1.0, &mut out);

    // One sample per unit of length, plus both ends.
    assert_eq!(count, arc_length.floor() as usize + 2);
}

#[test]
fn annotated_spiral() {
    init_logger();

    let input = spiral(400, 3.0);
    let mut out: Path<StateSe2<f64>> = Path::new();
    resample(input.states(), 0.5, &mut out);

    // Shortest arc interpolation keeps all headings normalized.
    assert_eq!(normalize_yaw(out.states_mut()), 0);

    // Re-annotating the resampled positions gives headings close to the interpolated ones.
    let positions: Vec<StateR2<f64>> = out.iter().map(|s| s.to_r2()).collect();
    let chords = yaw_chord(&positions);
    assert_eq!(chords.len(), out.len());
    for (pose, chord) in out.iter().zip(chords.iter()).skip(10).take(100) {
        let diff = trailblaze::geom::angle::normalize_angle(pose.yaw - chord.yaw);
        assert!(diff.abs() < 0.2, "{} vs {}", pose, chord);
    }
}

#[test]
fn rotation_in_place() {
    use std::f64::consts::FRAC_PI_2;

    let start = StateSe3::at(1.0, 2.0, 3.0);
    let goal = start.with_orientation(Quaternion::from_yaw(FRAC_PI_2));
    let states = [start, goal];

    // The default metric only looks at the position.
    let mut out = Vec::new();
    assert_eq!(resample(&states, 0.35, &mut out), 2);

    // Weighting the rotation makes the segment about 1.57 units long.
    let metric = WeightedPoseDistance::new(1.0);
    let interpolation = <StateSe3<f64> as StateSpace>::Interpolation::default();
    assert!((length(&states, metric) - FRAC_PI_2).abs() < 1e-9);

    out.clear();
    assert_eq!(resample_with(&states, 0.35, &mut out, metric, interpolation), 6);
    for pose in &out {
        assert_eq!(pose.position, start.position);
    }

    let expected = interpolation.interpolate(&start, &goal, 0.7 / FRAC_PI_2);
    assert!((out[2].orientation.qz() - expected.orientation.qz()).abs() < 1e-9);
    assert!((out[2].orientation.qw() - expected.orientation.qw()).abs() < 1e-9);
}

#[test]
fn math_aliases() {
    use trailblaze::math::{to_rad, StateSe2f};

    let states: [StateSe2f; 2] = [
        StateSe2f::new(0.0, 0.0, 0.0),
        StateSe2f::new(0.0, 3.0, to_rad(90.0)),
    ];

    let mut out = Vec::new();
    assert_eq!(resample(&states, 1.0, &mut out), 4);
    assert_eq!(out[3], states[1]);
}
