//! Distance measures between states.

use crate::components::{Orientation, Position2, Position3};
use crate::scalar::Scalar;

/// Measures the distance to travel between two states.
///
/// Implementations must be pure and return non-negative values. A distance of zero
/// means the two states are metrically coincident, even if their components differ.
///
/// This trait is also implemented for all functions/closures with signature
/// `Fn(&T, &T) -> S`.
pub trait Metric<T> {
    type Scalar: Scalar;

    fn distance(&self, a: &T, b: &T) -> Self::Scalar;
}

impl<T, S, F> Metric<T> for F
where
    S: Scalar,
    F: Fn(&T, &T) -> S,
{
    type Scalar = S;

    #[inline]
    fn distance(&self, a: &T, b: &T) -> S {
        (self)(a, b)
    }
}

/// Euclidean distance in the plane, ignoring any other component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EuclideanDistance2D<S> {
    _scalar: core::marker::PhantomData<S>,
}

/// Euclidean distance in space, ignoring any other component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EuclideanDistance3D<S> {
    _scalar: core::marker::PhantomData<S>,
}

/// Norm of the component-wise difference between two orientations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuaternionDistance<S> {
    _scalar: core::marker::PhantomData<S>,
}

impl<S> EuclideanDistance2D<S> {
    pub fn new() -> Self {
        EuclideanDistance2D {
            _scalar: core::marker::PhantomData,
        }
    }
}

impl<S> EuclideanDistance3D<S> {
    pub fn new() -> Self {
        EuclideanDistance3D {
            _scalar: core::marker::PhantomData,
        }
    }
}

impl<S> QuaternionDistance<S> {
    pub fn new() -> Self {
        QuaternionDistance {
            _scalar: core::marker::PhantomData,
        }
    }
}

impl<S> Default for EuclideanDistance2D<S> {
    fn default() -> Self {
        EuclideanDistance2D::new()
    }
}

impl<S> Default for EuclideanDistance3D<S> {
    fn default() -> Self {
        EuclideanDistance3D::new()
    }
}

impl<S> Default for QuaternionDistance<S> {
    fn default() -> Self {
        QuaternionDistance::new()
    }
}

// Without std, euclid's `length` is not available.
#[inline]
fn norm3<S: Scalar, T: Position3<S>>(a: &T, b: &T) -> S {
    let d = a.position3() - b.position3();
    (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
}

impl<S: Scalar, T: Position2<S>> Metric<T> for EuclideanDistance2D<S> {
    type Scalar = S;

    #[inline]
    fn distance(&self, a: &T, b: &T) -> S {
        (a.x() - b.x()).hypot(a.y() - b.y())
    }
}

impl<S: Scalar, T: Position3<S>> Metric<T> for EuclideanDistance3D<S> {
    type Scalar = S;

    #[inline]
    fn distance(&self, a: &T, b: &T) -> S {
        norm3(a, b)
    }
}

impl<S: Scalar, T: Orientation<S>> Metric<T> for QuaternionDistance<S> {
    type Scalar = S;

    fn distance(&self, a: &T, b: &T) -> S {
        let (qa, qb) = (a.orientation(), b.orientation());
        let dx = qa.x - qb.x;
        let dy = qa.y - qb.y;
        let dz = qa.z - qb.z;
        let dw = qa.w - qb.w;
        (dx * dx + dy * dy + dz * dz + dw * dw).sqrt()
    }
}

/// Combines the translation and the rotation between two poses.
///
/// The rotation contributes its geodesic angle scaled by `angular_weight`:
/// `sqrt(d_pos² + (angular_weight * angle)²)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedPoseDistance<S> {
    pub angular_weight: S,
}

impl<S: Scalar> WeightedPoseDistance<S> {
    pub fn new(angular_weight: S) -> Self {
        WeightedPoseDistance { angular_weight }
    }
}

impl<S: Scalar, T: Position3<S> + Orientation<S>> Metric<T> for WeightedPoseDistance<S> {
    type Scalar = S;

    fn distance(&self, a: &T, b: &T) -> S {
        let translation = norm3(a, b);
        let rotation = self.angular_weight * a.orientation().angle_to(&b.orientation());
        (translation * translation + rotation * rotation).sqrt()
    }
}

#[cfg(test)]
use crate::{point, Point};

#[test]
fn planar_distance() {
    let metric = EuclideanDistance2D::<f64>::new();
    let a: Point<f64> = point(1.0, 1.0);
    let b = point(4.0, 5.0);

    assert_eq!(metric.distance(&a, &b), 5.0);
    assert_eq!(metric.distance(&b, &a), 5.0);
    assert_eq!(metric.distance(&a, &a), 0.0);
}

#[test]
fn closure_metric() {
    let manhattan = |a: &Point<f64>, b: &Point<f64>| (a.x - b.x).abs() + (a.y - b.y).abs();
    assert_eq!(manhattan.distance(&point(0.0, 0.0), &point(1.0, 2.0)), 3.0);
}

#[cfg(test)]
fn default_metrics<S: Scalar>() -> (
    EuclideanDistance2D<S>,
    EuclideanDistance3D<S>,
    QuaternionDistance<S>,
) {
    (Default::default(), Default::default(), Default::default())
}

#[test]
fn default_metrics_for_any_scalar() {
    use crate::{StateO3, StateR3};

    let (planar, spatial, rotation) = default_metrics::<f32>();
    assert_eq!(planar.distance(&point(0.0f32, 0.0), &point(3.0, 4.0)), 5.0);

    let a = StateR3::new(1.0f32, 2.0, 3.0);
    let b = StateR3::new(3.0, 5.0, 9.0);
    assert_eq!(spatial.distance(&a, &b), 7.0);

    let identity = StateO3::<f32>::identity();
    assert_eq!(rotation.distance(&identity, &identity), 0.0);
}

#[test]
fn spatial_distances() {
    use crate::{Quaternion, StateSe3};

    let a = StateSe3::at(0.0, 0.0, 0.0);
    let b = StateSe3::at(2.0, 3.0, 6.0);
    assert_eq!(EuclideanDistance3D::<f64>::new().distance(&a, &b), 7.0);
    assert_eq!(WeightedPoseDistance::new(10.0).distance(&a, &b), 7.0);

    // A pure rotation only counts through the weight.
    let c = a.with_orientation(Quaternion::from_yaw(1.0));
    let d = WeightedPoseDistance::new(2.0).distance(&a, &c);
    assert!((d - 2.0).abs() < 1e-9, "{}", d);
}
