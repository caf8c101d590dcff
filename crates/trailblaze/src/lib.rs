#![deny(bare_trait_objects)]
#![no_std]

//! Path representation and resampling for robotics and motion planning.
//!
//! # Crates
//!
//! This meta-crate (`trailblaze`) reexports the following sub-crates for convenience:
//!
//! * **trailblaze_geom** - State spaces, metrics and interpolation policies.
//! * **trailblaze_path** - The path container.
//! * **trailblaze_algorithms** - Resampling, annotation and path generators.
//!
//! Each `trailblaze_<name>` crate is reexported as a `<name>` module in `trailblaze`.
//! For example:
//!
//! ```ignore
//! use trailblaze_algorithms::resample::resample;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! use trailblaze::algorithms::resample::resample;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! All crates are `no_std` with `alloc`. The `std` feature is enabled by default.
//!
//! # Examples
//!
//! ## Resampling a planar pose path
//!
//! ```
//! use trailblaze::geom::StateSe2;
//! use trailblaze::path::Path;
//! use trailblaze::algorithms::resample::resample;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let waypoints = [
//!     StateSe2::new(0.0, 0.0, 0.0),
//!     StateSe2::new(4.0, 0.0, 0.0),
//!     StateSe2::new(4.0, 4.0, FRAC_PI_2),
//! ];
//!
//! let mut path = Path::new();
//! let count = resample(&waypoints, 1.0, &mut path);
//!
//! assert_eq!(count, 9);
//! assert_eq!(path.start(), Some(&waypoints[0]));
//! assert_eq!(path.goal(), Some(&waypoints[2]));
//! ```
//!
//! ## Custom states
//!
//! Any `Clone` type can be resampled, as long as it comes with a metric and an
//! interpolation. Implementing [`StateSpace`](geom::StateSpace) binds default ones
//! so that [`resample`](algorithms::resample::resample) can be used directly.
//!
//! ```
//! use trailblaze::geom::StateSpace;
//! use trailblaze::algorithms::resample::resample;
//!
//! // A position along a rail, and the time at which it is reached.
//! #[derive(Copy, Clone, Debug, PartialEq)]
//! struct RailState {
//!     s: f64,
//!     time: f64,
//! }
//!
//! #[derive(Default)]
//! struct RailDistance;
//! impl trailblaze::geom::metric::Metric<RailState> for RailDistance {
//!     type Scalar = f64;
//!     fn distance(&self, a: &RailState, b: &RailState) -> f64 {
//!         (b.s - a.s).abs()
//!     }
//! }
//!
//! #[derive(Default)]
//! struct RailLerp;
//! impl trailblaze::geom::interpolation::Interpolation<RailState, f64> for RailLerp {
//!     fn interpolate(&self, a: &RailState, b: &RailState, t: f64) -> RailState {
//!         RailState {
//!             s: a.s + t * (b.s - a.s),
//!             time: a.time + t * (b.time - a.time),
//!         }
//!     }
//! }
//!
//! impl StateSpace for RailState {
//!     type Scalar = f64;
//!     type Metric = RailDistance;
//!     type Interpolation = RailLerp;
//! }
//!
//! let mut out = Vec::new();
//! resample(&[RailState { s: 0.0, time: 0.0 }, RailState { s: 2.0, time: 10.0 }], 0.5, &mut out);
//!
//! assert_eq!(out.len(), 5);
//! assert_eq!(out[1], RailState { s: 0.5, time: 2.5 });
//! ```

pub extern crate trailblaze_algorithms;

pub use trailblaze_algorithms as algorithms;
pub use algorithms::geom;
pub use algorithms::path;

pub mod math {
    //! f64 and f32 aliases for the state types.

    use crate::geom;

    pub type StateR2 = geom::StateR2<f64>;
    pub type StateR3 = geom::StateR3<f64>;
    pub type StateSe2 = geom::StateSe2<f64>;
    pub type StateO3 = geom::StateO3<f64>;
    pub type StateSe3 = geom::StateSe3<f64>;
    pub type Quaternion = geom::Quaternion<f64>;

    pub type StateR2f = geom::StateR2<f32>;
    pub type StateR3f = geom::StateR3<f32>;
    pub type StateSe2f = geom::StateSe2<f32>;

    pub use crate::geom::angle::{normalize_angle, to_rad};
    pub use crate::geom::{point, point3, vector, Point, Point3D, Vector, Vector3D};
}
