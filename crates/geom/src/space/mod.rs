//! The state spaces and their default policies.

use crate::interpolation::Interpolation;
use crate::metric::Metric;
use crate::scalar::Scalar;

mod o3;
mod r2;
mod r3;
mod se2;
mod se3;

pub use self::o3::StateO3;
pub use self::r2::StateR2;
pub use self::r3::StateR3;
pub use self::se2::StateSe2;
pub use self::se3::StateSe3;

/// Binds a state type to the metric and interpolation used when none is given.
///
/// Implement this for custom state types to use them with the default-policy
/// entry points of the algorithms.
pub trait StateSpace: Clone {
    type Scalar: Scalar;
    type Metric: Metric<Self, Scalar = Self::Scalar> + Default;
    type Interpolation: Interpolation<Self, Self::Scalar> + Default;
}
