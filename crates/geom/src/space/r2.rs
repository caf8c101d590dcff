use crate::components::Position2;
use crate::interpolation::{Composition, LinearPosition2D};
use crate::metric::EuclideanDistance2D;
use crate::scalar::Scalar;
use crate::space::StateSpace;
use crate::{point, Point};

use core::fmt;

/// A position in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StateR2<S> {
    pub x: S,
    pub y: S,
}

impl<S> StateR2<S> {
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        StateR2 { x, y }
    }
}

impl<S: Scalar> StateR2<S> {
    #[inline]
    pub fn to_point(&self) -> Point<S> {
        point(self.x, self.y)
    }
}

impl<S: Scalar> From<Point<S>> for StateR2<S> {
    fn from(p: Point<S>) -> Self {
        StateR2::new(p.x, p.y)
    }
}

impl<S: Scalar> Position2<S> for StateR2<S> {
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

impl<S: Scalar> StateSpace for StateR2<S> {
    type Scalar = S;
    type Metric = EuclideanDistance2D<S>;
    type Interpolation = Composition<(LinearPosition2D,)>;
}

impl<S: fmt::Display> fmt::Display for StateR2<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
use crate::{interpolation::Interpolation, metric::Metric};

#[test]
fn r2_accessors() {
    let mut state = StateR2::new(10.0, 20.0);
    assert_eq!(Position2::x(&state), 10.0);
    assert_eq!(Position2::y(&state), 20.0);

    state.set_x(40.0);
    state.set_y(50.0);
    assert_eq!(state, StateR2::new(40.0, 50.0));
    assert_eq!(state.position(), point(40.0, 50.0));
}

#[test]
fn r2_defaults() {
    let metric = <StateR2<f64> as StateSpace>::Metric::default();
    let interpolation = <StateR2<f64> as StateSpace>::Interpolation::default();

    let zero = StateR2::new(0.0, 0.0);
    let a = StateR2::new(1.0, 1.0);
    assert_eq!(metric.distance(&zero, &zero), 0.0);
    assert!((metric.distance(&a, &zero) - 2.0f64.sqrt()).abs() < 1e-12);

    let b = StateR2::new(10.0, 20.0);
    assert_eq!(interpolation.interpolate(&zero, &b, 0.5), StateR2::new(5.0, 10.0));
    assert_eq!(interpolation.interpolate(&zero, &b, 0.0), zero);
    assert_eq!(interpolation.interpolate(&zero, &b, 1.0), b);
}

#[test]
fn r2_display() {
    use std::string::ToString;

    assert_eq!(StateR2::new(1.5, -2.0).to_string(), "(1.5, -2)");
}
