use crate::components::Orientation;
use crate::interpolation::{Composition, SlerpOrientation};
use crate::metric::QuaternionDistance;
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::space::StateSpace;

use core::fmt;

/// An orientation in space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StateO3<S> {
    pub orientation: Quaternion<S>,
}

impl<S: Scalar> StateO3<S> {
    #[inline]
    pub fn new(orientation: Quaternion<S>) -> Self {
        StateO3 { orientation }
    }

    #[inline]
    pub fn identity() -> Self {
        StateO3::new(Quaternion::identity())
    }

    #[inline]
    pub fn qx(&self) -> S {
        self.orientation.x
    }

    #[inline]
    pub fn qy(&self) -> S {
        self.orientation.y
    }

    #[inline]
    pub fn qz(&self) -> S {
        self.orientation.z
    }

    #[inline]
    pub fn qw(&self) -> S {
        self.orientation.w
    }
}

impl<S: Scalar> Default for StateO3<S> {
    fn default() -> Self {
        StateO3::identity()
    }
}

impl<S: Scalar> Orientation<S> for StateO3<S> {
    #[inline]
    fn orientation(&self) -> Quaternion<S> {
        self.orientation
    }
    #[inline]
    fn set_orientation(&mut self, orientation: Quaternion<S>) {
        self.orientation = orientation;
    }
}

impl<S: Scalar> StateSpace for StateO3<S> {
    type Scalar = S;
    type Metric = QuaternionDistance<S>;
    type Interpolation = Composition<(SlerpOrientation,)>;
}

impl<S: fmt::Display> fmt::Display for StateO3<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.orientation, f)
    }
}

#[cfg(test)]
use crate::{interpolation::Interpolation, metric::Metric};

#[test]
fn o3_accessors() {
    let mut state = StateO3::<f64>::identity();
    assert_eq!(
        (state.qx(), state.qy(), state.qz(), state.qw()),
        (0.0, 0.0, 0.0, 1.0)
    );

    state.set_orientation(Quaternion::new(0.1, 0.2, 0.3, 0.4));
    assert_eq!(state.orientation, Quaternion::new(0.1, 0.2, 0.3, 0.4));
}

#[test]
fn o3_metric() {
    let metric = <StateO3<f64> as StateSpace>::Metric::default();

    let a = StateO3::new(Quaternion::new(1.0, 0.0, 0.0, 0.0));
    let b = StateO3::new(Quaternion::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(metric.distance(&a, &a), 0.0);
    assert!((metric.distance(&a, &b) - 2.0f64.sqrt()).abs() < 1e-12);
    assert_eq!(metric.distance(&a, &b), metric.distance(&b, &a));
}

#[test]
fn o3_interpolation() {
    let interpolation = <StateO3<f64> as StateSpace>::Interpolation::default();

    let a = StateO3::new(Quaternion::<f64>::from_yaw(0.0));
    let b = StateO3::new(Quaternion::from_yaw(1.0));
    let expected = Quaternion::from_yaw(0.25);

    let result = interpolation.interpolate(&a, &b, 0.25).orientation;
    assert!(result.angle_to(&expected) < 1e-9);
    assert!((result.norm() - 1.0).abs() < 1e-12);
}
