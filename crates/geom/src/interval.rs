use crate::scalar::Scalar;

use core::fmt;

/// A closed interval `[lower, upper]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    lower: T,
    upper: T,
}

/// Error returned when constructing an invalid [`Interval`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntervalError {
    /// The lower bound is greater than the upper bound.
    InvertedBounds,
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalError::InvertedBounds => {
                write!(f, "Lower bound of the interval is greater than the upper bound")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IntervalError {}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Both bounds are included.
    pub fn new(lower: T, upper: T) -> Result<Self, IntervalError> {
        if lower > upper {
            return Err(IntervalError::InvertedBounds);
        }

        Ok(Interval { lower, upper })
    }

    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl<S: Scalar> Interval<S> {
    #[inline]
    pub fn length(&self) -> S {
        self.upper - self.lower
    }

    /// The value at ratio `t` between the bounds.
    #[inline]
    pub fn lerp(&self, t: S) -> S {
        (S::ONE - t) * self.lower + t * self.upper
    }
}

#[test]
fn interval_bounds() {
    let i = Interval::new(-1.0, 3.0).unwrap();
    assert_eq!(i.lower(), -1.0);
    assert_eq!(i.upper(), 3.0);
    assert_eq!(i.length(), 4.0);
    assert!(i.contains(-1.0));
    assert!(i.contains(3.0));
    assert!(!i.contains(3.5));
    assert_eq!(i.lerp(0.5), 1.0);

    let point = Interval::new(2, 2).unwrap();
    assert!(point.contains(2));
}

#[test]
fn inverted_interval() {
    assert_eq!(Interval::new(1.0, 0.0), Err(IntervalError::InvertedBounds));
}
