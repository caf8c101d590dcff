use crate::components::{Orientation, Position2, Position3};
use crate::interpolation::{Composition, LinearPosition3D, SlerpOrientation};
use crate::metric::EuclideanDistance3D;
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::space::{StateO3, StateR3, StateSpace};

use core::fmt;

/// A pose in space: a position and an orientation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StateSe3<S> {
    pub position: StateR3<S>,
    pub orientation: StateO3<S>,
}

impl<S: Scalar> StateSe3<S> {
    #[inline]
    pub fn new(position: StateR3<S>, orientation: StateO3<S>) -> Self {
        StateSe3 {
            position,
            orientation,
        }
    }

    /// A pose at `(x, y, z)` with the identity orientation.
    #[inline]
    pub fn at(x: S, y: S, z: S) -> Self {
        StateSe3::new(StateR3::new(x, y, z), StateO3::identity())
    }

    #[inline]
    pub fn with_orientation(mut self, orientation: Quaternion<S>) -> Self {
        self.orientation = StateO3::new(orientation);
        self
    }
}

impl<S: Scalar> Default for StateSe3<S> {
    fn default() -> Self {
        StateSe3::at(S::ZERO, S::ZERO, S::ZERO)
    }
}

impl<S: Scalar> Position2<S> for StateSe3<S> {
    #[inline]
    fn x(&self) -> S {
        self.position.x
    }
    #[inline]
    fn y(&self) -> S {
        self.position.y
    }
    #[inline]
    fn set_x(&mut self, x: S) {
        self.position.x = x;
    }
    #[inline]
    fn set_y(&mut self, y: S) {
        self.position.y = y;
    }
}

impl<S: Scalar> Position3<S> for StateSe3<S> {
    #[inline]
    fn z(&self) -> S {
        self.position.z
    }
    #[inline]
    fn set_z(&mut self, z: S) {
        self.position.z = z;
    }
}

impl<S: Scalar> Orientation<S> for StateSe3<S> {
    #[inline]
    fn orientation(&self) -> Quaternion<S> {
        self.orientation.orientation
    }
    #[inline]
    fn set_orientation(&mut self, orientation: Quaternion<S>) {
        self.orientation.orientation = orientation;
    }
}

// Only the translation contributes to the default distance, see
// `WeightedPoseDistance` for a metric that accounts for rotations.
impl<S: Scalar> StateSpace for StateSe3<S> {
    type Scalar = S;
    type Metric = EuclideanDistance3D<S>;
    type Interpolation = Composition<(LinearPosition3D, SlerpOrientation)>;
}

impl<S: fmt::Display> fmt::Display for StateSe3<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let q = &self.orientation.orientation;
        write!(
            f,
            "({}, {}, {} | {}, {}, {}, {})",
            self.position.x, self.position.y, self.position.z, q.x, q.y, q.z, q.w
        )
    }
}

#[cfg(test)]
use crate::{interpolation::Interpolation, metric::Metric, metric::WeightedPoseDistance};

#[test]
fn se3_defaults() {
    let metric = <StateSe3<f64> as StateSpace>::Metric::default();
    let interpolation = <StateSe3<f64> as StateSpace>::Interpolation::default();

    let a = StateSe3::at(0.0, 0.0, 0.0);
    let b = StateSe3::at(0.0, 3.0, 4.0).with_orientation(Quaternion::from_yaw(1.0));

    // Rotations are ignored by the default metric.
    assert_eq!(metric.distance(&a, &b), 5.0);
    assert_eq!(
        metric.distance(&a, &a.with_orientation(Quaternion::from_yaw(2.0))),
        0.0
    );

    let mid = interpolation.interpolate(&a, &b, 0.5);
    assert_eq!(mid.position, StateR3::new(0.0, 1.5, 2.0));
    assert!(mid.orientation().angle_to(&Quaternion::from_yaw(0.5)) < 1e-9);
}

#[test]
fn se3_weighted_metric() {
    let metric = WeightedPoseDistance::new(2.0);

    let a = StateSe3::at(0.0, 0.0, 0.0);
    let b = StateSe3::at(3.0, 0.0, 0.0).with_orientation(Quaternion::from_yaw(2.0));

    // sqrt(3² + (2 * 2)²)
    assert!((metric.distance(&a, &b) - 5.0f64).abs() < 1e-9);
    assert_eq!(metric.distance(&a, &StateSe3::at(0.0, 4.0, 0.0)), 4.0);
}

#[test]
fn se3_display() {
    use std::string::ToString;

    assert_eq!(StateSe3::at(1.0, 2.0, 3.0).to_string(), "(1, 2, 3 | 0, 0, 0, 1)");
}
