//! Access to the individual components of a state.
//!
//! Metrics and interpolation pieces are written against these traits rather than
//! against concrete state types, so that a custom state only needs to expose its
//! components to reuse them.

use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::{point, point3, Point, Point3D};

/// States with a planar position.
pub trait Position2<S: Scalar> {
    fn x(&self) -> S;
    fn y(&self) -> S;
    fn set_x(&mut self, x: S);
    fn set_y(&mut self, y: S);

    #[inline]
    fn position(&self) -> Point<S> {
        point(self.x(), self.y())
    }
}

/// States with a position in space.
pub trait Position3<S: Scalar>: Position2<S> {
    fn z(&self) -> S;
    fn set_z(&mut self, z: S);

    #[inline]
    fn position3(&self) -> Point3D<S> {
        point3(self.x(), self.y(), self.z())
    }
}

/// States with a heading in the plane, in radians.
pub trait Yaw<S: Scalar> {
    fn yaw(&self) -> S;
    fn set_yaw(&mut self, yaw: S);
}

/// States with an orientation in space.
pub trait Orientation<S: Scalar> {
    fn orientation(&self) -> Quaternion<S>;
    fn set_orientation(&mut self, orientation: Quaternion<S>);
}

impl<S: Scalar> Position2<S> for Point<S> {
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
