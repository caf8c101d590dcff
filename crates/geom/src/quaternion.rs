use crate::scalar::Scalar;

use core::fmt;

/// A quaternion with the scalar part last.
///
/// Orientations are represented by unit quaternions. Most methods do not check that
/// the quaternion is normalized.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Quaternion<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Quaternion<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self {
        Quaternion { x, y, z, w }
    }

    /// The rotation that does nothing.
    #[inline]
    pub fn identity() -> Self {
        Quaternion::new(S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    /// A rotation of `yaw` radians around the z axis.
    pub fn from_yaw(yaw: S) -> Self {
        let (sin, cos) = (yaw * S::HALF).sin_cos();
        Quaternion::new(S::ZERO, S::ZERO, sin, cos)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> S {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn square_norm(&self) -> S {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> S {
        self.square_norm().sqrt()
    }

    #[inline]
    pub fn scale(&self, factor: S) -> Self {
        Quaternion::new(
            self.x * factor,
            self.y * factor,
            self.z * factor,
            self.w * factor,
        )
    }

    /// Normalizes in place. A zero quaternion is left untouched.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm != S::ZERO {
            *self = self.scale(S::ONE / norm);
        }
    }

    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// Nearly identical rotations are interpolated linearly. The result is always
    /// normalized.
    pub fn slerp(&self, other: &Self, t: S) -> Self {
        let mut b = *other;
        let mut dot = self.dot(&b);
        if dot < S::ZERO {
            b = b.scale(-S::ONE);
            dot = -dot;
        }

        let (wa, wb) = if dot > S::ONE - S::SLERP_THRESHOLD {
            (S::ONE - t, t)
        } else {
            let theta = dot.min(S::ONE).max(-S::ONE).acos();
            let sin = theta.sin();
            (((S::ONE - t) * theta).sin() / sin, (t * theta).sin() / sin)
        };

        Quaternion::new(
            self.x * wa + b.x * wb,
            self.y * wa + b.y * wb,
            self.z * wa + b.z * wb,
            self.w * wa + b.w * wb,
        )
        .normalized()
    }

    /// The angle of the rotation between two unit quaternions, in `[0, π]`.
    pub fn angle_to(&self, other: &Self) -> S {
        let dot = self.dot(other).abs().min(S::ONE);
        S::TWO * dot.acos()
    }
}

impl<S: Scalar> Default for Quaternion<S> {
    fn default() -> Self {
        Quaternion::identity()
    }
}

impl<S: fmt::Display> fmt::Display for Quaternion<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {} | {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
fn assert_quat_near(a: Quaternion<f64>, b: Quaternion<f64>) {
    let d = (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs() + (a.w - b.w).abs();
    assert!(d < 1e-9, "{} != {}", a, b);
}

#[test]
fn norms() {
    let q = Quaternion::new(1.0, 2.0, 2.0, 4.0);
    assert_eq!(q.square_norm(), 25.0);
    assert_eq!(q.norm(), 5.0);
    assert_quat_near(q.normalized(), Quaternion::new(0.2, 0.4, 0.4, 0.8));

    let mut zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    zero.normalize();
    assert_eq!(zero, Quaternion::new(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn slerp_endpoints() {
    let a = Quaternion::from_yaw(0.3);
    let b = Quaternion::from_yaw(1.2);

    assert_quat_near(a.slerp(&b, 0.0), a);
    assert_quat_near(a.slerp(&b, 1.0), b);
    assert_quat_near(a.slerp(&b, 0.5), Quaternion::from_yaw(0.75));
}

#[test]
fn slerp_takes_the_short_way() {
    let a = Quaternion::from_yaw(0.2);
    // Same rotation as from_yaw(0.6) but in the opposite hemisphere.
    let b = Quaternion::from_yaw(0.6).scale(-1.0);

    assert_quat_near(a.slerp(&b, 0.5), Quaternion::from_yaw(0.4));
}

#[test]
fn slerp_nearly_identical() {
    let a = Quaternion::<f64>::from_yaw(0.5);
    let b = Quaternion::from_yaw(0.5 + 1e-9);
    let q = a.slerp(&b, 0.5);

    assert!((q.norm() - 1.0).abs() < 1e-12);
    assert_quat_near(q, a);
}

#[test]
fn angle_between() {
    let a = Quaternion::<f64>::from_yaw(0.25);
    let b = Quaternion::from_yaw(1.0);
    assert!((a.angle_to(&b) - 0.75).abs() < 1e-9);
    assert!(Quaternion::<f64>::identity().angle_to(&Quaternion::identity()) < 1e-9);
}
