use crate::components::{Position2, Yaw};
use crate::interpolation::{Composition, LinearPosition2D, ShortestYaw};
use crate::metric::EuclideanDistance2D;
use crate::scalar::Scalar;
use crate::space::{StateR2, StateSpace};

use core::fmt;

/// A pose in the plane: a position and a heading in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StateSe2<S> {
    pub x: S,
    pub y: S,
    pub yaw: S,
}

impl<S> StateSe2<S> {
    #[inline]
    pub fn new(x: S, y: S, yaw: S) -> Self {
        StateSe2 { x, y, yaw }
    }
}

impl<S: Scalar> StateSe2<S> {
    /// Attaches a heading to a planar position.
    #[inline]
    pub fn from_r2(position: &StateR2<S>, yaw: S) -> Self {
        StateSe2::new(position.x, position.y, yaw)
    }

    #[inline]
    pub fn to_r2(&self) -> StateR2<S> {
        StateR2::new(self.x, self.y)
    }
}

impl<S: Scalar> Position2<S> for StateSe2<S> {
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

impl<S: Scalar> Yaw<S> for StateSe2<S> {
    #[inline]
    fn yaw(&self) -> S {
        self.yaw
    }
    #[inline]
    fn set_yaw(&mut self, yaw: S) {
        self.yaw = yaw;
    }
}

// The heading does not contribute to the distance.
impl<S: Scalar> StateSpace for StateSe2<S> {
    type Scalar = S;
    type Metric = EuclideanDistance2D<S>;
    type Interpolation = Composition<(LinearPosition2D, ShortestYaw)>;
}

impl<S: fmt::Display> fmt::Display for StateSe2<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {} | {})", self.x, self.y, self.yaw)
    }
}

#[cfg(test)]
use crate::{interpolation::Interpolation, metric::Metric};

#[test]
fn se2_accessors() {
    let mut state = StateSe2::new(10.0, 20.0, 0.1234);
    assert_eq!(Yaw::yaw(&state), 0.1234);

    state.set_x(40.0);
    state.set_y(50.0);
    state.set_yaw(1.0);
    assert_eq!(state, StateSe2::new(40.0, 50.0, 1.0));
    assert_eq!(state.to_r2(), StateR2::new(40.0, 50.0));
}

#[test]
fn se2_metric_ignores_yaw() {
    let metric = <StateSe2<f64> as StateSpace>::Metric::default();

    let zero = StateSe2::new(0.0, 0.0, 0.0);
    assert_eq!(metric.distance(&zero, &StateSe2::new(1.0, 0.0, 0.0)), 1.0);
    assert_eq!(
        metric.distance(&StateSe2::new(2.0, 0.0, 0.0), &StateSe2::new(1.0, 0.0, 0.0)),
        1.0
    );
    assert_eq!(metric.distance(&zero, &StateSe2::new(3.0, 4.0, 0.12)), 5.0);
    assert_eq!(metric.distance(&zero, &StateSe2::new(0.0, 0.0, 2.0)), 0.0);
}

#[test]
fn se2_interpolation() {
    use core::f64::consts::PI;

    let interpolation = <StateSe2<f64> as StateSpace>::Interpolation::default();

    let zero: StateSe2<f64> = StateSe2::new(0.0, 0.0, 0.0);
    let result = interpolation.interpolate(&zero, &StateSe2::new(10.0, 20.0, 1.0), 0.5);
    assert!((result.x - 5.0).abs() < 1e-12);
    assert!((result.y - 10.0).abs() < 1e-12);
    assert!((result.yaw - 0.5).abs() < 1e-12);

    // Headings take the short way around.
    let a = StateSe2::new(0.0, 0.0, 0.9 * PI);
    let b = StateSe2::new(0.0, 0.0, -0.9 * PI);
    let result = interpolation.interpolate(&a, &b, 0.5);
    assert!((result.yaw.abs() - PI).abs() < 1e-9);
}
