//! Interpolation between states.
//!
//! Composite state spaces usually interpolate each of their components differently:
//! positions linearly, headings along the shortest arc and orientations spherically.
//! Each of these is a [`ComponentInterpolation`] piece which only writes the components
//! it knows about, and a [`Composition`] chains pieces into a complete
//! [`Interpolation`].
//!
//! ```
//! use trailblaze_geom::StateSe2;
//! use trailblaze_geom::interpolation::*;
//!
//! // Only interpolate the position and keep the heading of the second state.
//! let positions_only = Composition::new((LinearPosition2D,));
//!
//! let a = StateSe2::new(0.0, 0.0, 0.0);
//! let b = StateSe2::new(2.0, 0.0, 1.0);
//!
//! assert_eq!(positions_only.interpolate(&a, &b, 0.5), StateSe2::new(1.0, 0.0, 1.0));
//! ```

use crate::angle::{interpolate_angle_shortest, lerp};
use crate::components::{Orientation, Position2, Position3, Yaw};
use crate::scalar::Scalar;

/// Produces the state at ratio `t` between two states.
///
/// At `t = 0` the result must be metrically equal to `a`, at `t = 1` to `b`. Values
/// of `t` outside of `[0, 1]` extrapolate.
///
/// This trait is also implemented for all functions/closures with signature
/// `Fn(&T, &T, S) -> T`.
pub trait Interpolation<T, S> {
    fn interpolate(&self, a: &T, b: &T, t: S) -> T;
}

impl<T, S, F> Interpolation<T, S> for F
where
    F: Fn(&T, &T, S) -> T,
{
    #[inline]
    fn interpolate(&self, a: &T, b: &T, t: S) -> T {
        (self)(a, b, t)
    }
}

/// Interpolates some of the components of a state.
pub trait ComponentInterpolation<T, S> {
    /// Writes the components at ratio `t` between `a` and `b` into `out`, leaving the
    /// other components of `out` untouched.
    fn apply(&self, a: &T, b: &T, t: S, out: &mut T);
}

/// Linear interpolation of the x and y components.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LinearPosition2D;

/// Linear interpolation of the x, y and z components.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LinearPosition3D;

/// Interpolation of the heading along the shortest arc.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShortestYaw;

/// Spherical linear interpolation of the orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SlerpOrientation;

impl<S: Scalar, T: Position2<S>> ComponentInterpolation<T, S> for LinearPosition2D {
    #[inline]
    fn apply(&self, a: &T, b: &T, t: S, out: &mut T) {
        out.set_x(lerp(a.x(), b.x(), t));
        out.set_y(lerp(a.y(), b.y(), t));
    }
}

impl<S: Scalar, T: Position3<S>> ComponentInterpolation<T, S> for LinearPosition3D {
    #[inline]
    fn apply(&self, a: &T, b: &T, t: S, out: &mut T) {
        out.set_x(lerp(a.x(), b.x(), t));
        out.set_y(lerp(a.y(), b.y(), t));
        out.set_z(lerp(a.z(), b.z(), t));
    }
}

impl<S: Scalar, T: Yaw<S>> ComponentInterpolation<T, S> for ShortestYaw {
    #[inline]
    fn apply(&self, a: &T, b: &T, t: S, out: &mut T) {
        out.set_yaw(interpolate_angle_shortest(a.yaw(), b.yaw(), t));
    }
}

impl<S: Scalar, T: Orientation<S>> ComponentInterpolation<T, S> for SlerpOrientation {
    #[inline]
    fn apply(&self, a: &T, b: &T, t: S, out: &mut T) {
        out.set_orientation(a.orientation().slerp(&b.orientation(), t));
    }
}

/// Chains a tuple of [`ComponentInterpolation`] pieces into an [`Interpolation`].
///
/// The output starts as a copy of the second state, then each piece overwrites the
/// components it interpolates, in order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Composition<P> {
    pub pieces: P,
}

impl<P> Composition<P> {
    #[inline]
    pub fn new(pieces: P) -> Self {
        Composition { pieces }
    }
}

macro_rules! impl_composition {
    ($($piece:ident : $idx:tt),+) => {
        impl<T, S, $($piece),+> Interpolation<T, S> for Composition<($($piece,)+)>
        where
            T: Clone,
            S: Copy,
            $($piece: ComponentInterpolation<T, S>),+
        {
            fn interpolate(&self, a: &T, b: &T, t: S) -> T {
                let mut out = b.clone();
                $(self.pieces.$idx.apply(a, b, t, &mut out);)+
                out
            }
        }
    };
}

impl_composition!(A: 0);
impl_composition!(A: 0, B: 1);
impl_composition!(A: 0, B: 1, C: 2);
impl_composition!(A: 0, B: 1, C: 2, D: 3);

#[cfg(test)]
use crate::{point, Point};

#[test]
fn linear_pieces() {
    let a: Point<f64> = point(0.0, 10.0);
    let b = point(4.0, 2.0);
    let mut out = b;

    LinearPosition2D.apply(&a, &b, 0.25, &mut out);
    assert_eq!(out, point(1.0, 8.0));

    LinearPosition2D.apply(&a, &b, 0.0, &mut out);
    assert_eq!(out, a);

    // Extrapolation.
    LinearPosition2D.apply(&a, &b, 2.0, &mut out);
    assert_eq!(out, point(8.0, -6.0));
}

#[test]
fn closure_interpolation() {
    let midpoint_snap = |a: &Point<f64>, b: &Point<f64>, t: f64| {
        if t < 0.5 {
            *a
        } else {
            *b
        }
    };

    let a = point(0.0, 0.0);
    let b = point(1.0, 1.0);
    assert_eq!(midpoint_snap.interpolate(&a, &b, 0.2), a);
    assert_eq!(midpoint_snap.interpolate(&a, &b, 0.7), b);
}

#[test]
fn composition_order() {
    // A second piece overwrites what the first one wrote.
    struct Constant(f64);
    impl ComponentInterpolation<Point<f64>, f64> for Constant {
        fn apply(&self, _: &Point<f64>, _: &Point<f64>, _: f64, out: &mut Point<f64>) {
            out.x = self.0;
        }
    }

    let a = point(0.0, 0.0);
    let b = point(2.0, 2.0);

    let interpolation = Composition::new((LinearPosition2D, Constant(7.0)));
    assert_eq!(interpolation.interpolate(&a, &b, 0.5), point(7.0, 1.0));

    let interpolation = Composition::new((Constant(7.0), LinearPosition2D));
    assert_eq!(interpolation.interpolate(&a, &b, 0.5), point(1.0, 1.0));
}
