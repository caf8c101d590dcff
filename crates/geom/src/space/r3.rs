use crate::components::{Position2, Position3};
use crate::interpolation::{Composition, LinearPosition3D};
use crate::metric::EuclideanDistance3D;
use crate::scalar::Scalar;
use crate::space::StateSpace;
use crate::{point3, Point3D};

use core::fmt;

/// A position in space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StateR3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S> StateR3<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self {
        StateR3 { x, y, z }
    }
}

impl<S: Scalar> StateR3<S> {
    #[inline]
    pub fn to_point(&self) -> Point3D<S> {
        point3(self.x, self.y, self.z)
    }
}

impl<S: Scalar> From<Point3D<S>> for StateR3<S> {
    fn from(p: Point3D<S>) -> Self {
        StateR3::new(p.x, p.y, p.z)
    }
}

impl<S: Scalar> Position2<S> for StateR3<S> {
    #[inline]
    fn x(&self) -> S {
        self.x
    }
    #[inline]
    fn y(&self) -> S {
        self.y
    }
    #[inline]
    fn set_x(&mut self, x: S) {
        self.x = x;
    }
    #[inline]
    fn set_y(&mut self, y: S) {
        self.y = y;
    }
}

impl<S: Scalar> Position3<S> for StateR3<S> {
    #[inline]
    fn z(&self) -> S {
        self.z
    }
    #[inline]
    fn set_z(&mut self, z: S) {
        self.z = z;
    }
}

impl<S: Scalar> StateSpace for StateR3<S> {
    type Scalar = S;
    type Metric = EuclideanDistance3D<S>;
    type Interpolation = Composition<(LinearPosition3D,)>;
}

impl<S: fmt::Display> fmt::Display for StateR3<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
use crate::{interpolation::Interpolation, metric::Metric};

#[test]
fn r3_accessors() {
    let mut state = StateR3::new(1.0, 2.0, 3.0);
    assert_eq!(Position3::z(&state), 3.0);

    state.set_z(-3.0);
    assert_eq!(state.position3(), point3(1.0, 2.0, -3.0));
}

#[test]
fn r3_defaults() {
    let metric = <StateR3<f64> as StateSpace>::Metric::default();
    let interpolation = <StateR3<f64> as StateSpace>::Interpolation::default();

    let zero = StateR3::new(0.0, 0.0, 0.0);
    let a = StateR3::new(2.0, 3.0, 6.0);
    assert_eq!(metric.distance(&zero, &a), 7.0);
    assert_eq!(metric.distance(&a, &zero), 7.0);

    assert_eq!(
        interpolation.interpolate(&zero, &a, 0.5),
        StateR3::new(1.0, 1.5, 3.0)
    );
    assert_eq!(interpolation.interpolate(&zero, &a, 1.0), a);
}
