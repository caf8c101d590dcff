#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]
#![no_std]

//! Algorithms working on sequences of states.
//!
//! This crate is reexported in [trailblaze](https://docs.rs/trailblaze/).
//!
//! Every algorithm here is generic over the state type. Semantic operations on
//! states go through the [`Metric`](geom::metric::Metric) and
//! [`Interpolation`](geom::interpolation::Interpolation) policies, defaulting to the
//! ones bound by [`StateSpace`](geom::StateSpace).
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log/) facade and cost
//! nothing unless the application installs a logger.

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub extern crate trailblaze_path as path;

pub mod annotate;
pub mod generate;
pub mod geometry;
pub mod resample;

pub use crate::path::geom;
