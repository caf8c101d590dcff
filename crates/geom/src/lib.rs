#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! State spaces, metrics and interpolation policies on top of euclid.
//!
//! This crate is reexported in [trailblaze](https://docs.rs/trailblaze/).
//!
//! # Overview.
//!
//! A *state* is a point in some space a robot moves through: a planar position
//! ([`StateR2`]), a position in space ([`StateR3`]), a planar pose with a heading
//! ([`StateSe2`]), an orientation ([`StateO3`]) or a full pose ([`StateSe3`]).
//!
//! Algorithms never look inside of a state. Everything they need goes through two
//! policies:
//!
//! - a [`Metric`](metric::Metric) which measures the distance between two states,
//! - an [`Interpolation`](interpolation::Interpolation) which produces the state at
//!   ratio `t` between two states.
//!
//! Each state type binds a default pair of policies through the
//! [`StateSpace`](space::StateSpace) trait. Any closure with the right signature can be
//! used in place of the defaults.
//!
//! ```
//! use trailblaze_geom::{StateR2, StateSpace};
//! use trailblaze_geom::metric::Metric;
//! use trailblaze_geom::interpolation::Interpolation;
//!
//! let a = StateR2::new(0.0, 0.0);
//! let b = StateR2::new(3.0, 4.0);
//!
//! let metric = <StateR2<f64> as StateSpace>::Metric::default();
//! let interpolation = <StateR2<f64> as StateSpace>::Interpolation::default();
//!
//! assert_eq!(metric.distance(&a, &b), 5.0);
//! assert_eq!(interpolation.interpolate(&a, &b, 0.5), StateR2::new(1.5, 2.0));
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod angle;
pub mod components;
pub mod interpolation;
mod interval;
pub mod metric;
mod quaternion;
pub mod space;

#[doc(inline)]
pub use crate::interval::{Interval, IntervalError};
#[doc(inline)]
pub use crate::quaternion::Quaternion;
#[doc(inline)]
pub use crate::space::{StateO3, StateR2, StateR3, StateSe2, StateSe3, StateSpace};

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    /// The floating point types states are made of.
    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;

        /// Threshold under which two quaternions are considered close enough to
        /// interpolate them linearly instead of spherically.
        const SLERP_THRESHOLD: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        const SLERP_THRESHOLD: Self = 1e-6;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        const SLERP_THRESHOLD: Self = 1e-6;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Point3D`.
pub use euclid::default::Point3D;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Alias for `euclid::default::Vector3D`.
pub use euclid::default::Vector3D;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

/// Shorthand for `Point3D::new(x, y, z)`.
#[inline]
pub fn point3<S>(x: S, y: S, z: S) -> Point3D<S> {
    Point3D::new(x, y, z)
}

pub mod traits {
    //! Traits reexported here for convenience.

    pub use crate::components::{Orientation, Position2, Position3, Yaw};
    pub use crate::interpolation::{ComponentInterpolation, Interpolation};
    pub use crate::metric::Metric;
    pub use crate::space::StateSpace;
}
