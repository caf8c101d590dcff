#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![no_std]

//! Data structures to store and iterate over sequences of states.
//!
//! This crate is reexported in [trailblaze](https://docs.rs/trailblaze/).
//!
//! # Examples
//!
//! ```
//! use trailblaze_path::Path;
//! use trailblaze_path::geom::StateR2;
//!
//! let mut path = Path::new();
//! path.push(StateR2::new(0.0, 0.0));
//! path.push(StateR2::new(1.0, 2.0));
//! path.push(StateR2::new(2.0, 0.0));
//!
//! assert_eq!(path.start(), Some(&StateR2::new(0.0, 0.0)));
//! assert_eq!(path.goal(), Some(&StateR2::new(2.0, 0.0)));
//!
//! for (from, to) in path.segments() {
//!     println!("{} -> {}", from, to);
//! }
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use trailblaze_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod path;
mod segments;

#[doc(inline)]
pub use crate::path::{Path, PathSlice};
pub use crate::segments::Segments;
