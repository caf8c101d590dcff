//! The default path data structure.
//!

use crate::segments::Segments;

use core::fmt;
use core::iter::{FromIterator, IntoIterator};
use core::ops::{Index, IndexMut};

use alloc::vec::Vec;

/// An ordered sequence of states.
///
/// The order of the states is the order in which the path is traversed, from the
/// start to the goal. States are stored contiguously, so that algorithms can work
/// on a plain slice obtained with [`Path::states`].
///
/// A `Path` implements `Extend`, which makes it usable as the output of the
/// resampling algorithm.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(transparent))]
pub struct Path<T> {
    states: Vec<T>,
}

/// A view on a `Path`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PathSlice<'l, T> {
    states: &'l [T],
}

impl<T> Path<T> {
    /// Creates an empty path.
    #[inline]
    pub fn new() -> Self {
        Path { states: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            states: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_vec(states: Vec<T>) -> Self {
        Path { states }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.states
    }

    /// Returns a view on this path.
    #[inline]
    pub fn as_slice(&self) -> PathSlice<'_, T> {
        PathSlice {
            states: &self.states[..],
        }
    }

    #[inline]
    pub fn states(&self) -> &[T] {
        &self.states[..]
    }

    #[inline]
    pub fn states_mut(&mut self) -> &mut [T] {
        &mut self.states[..]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.states.reserve(additional);
    }

    /// Appends a state at the end of the path.
    #[inline]
    pub fn push(&mut self, state: T) {
        self.states.push(state);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// The first state of the path.
    #[inline]
    pub fn start(&self) -> Option<&T> {
        self.states.first()
    }

    /// The last state of the path.
    #[inline]
    pub fn goal(&self) -> Option<&T> {
        self.states.last()
    }

    #[inline]
    pub fn start_mut(&mut self) -> Option<&mut T> {
        self.states.first_mut()
    }

    #[inline]
    pub fn goal_mut(&mut self) -> Option<&mut T> {
        self.states.last_mut()
    }

    /// Returns the state at a given index, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.states.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.states.get_mut(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.states.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.states.iter_mut()
    }

    /// Iterates over pairs of consecutive states.
    #[inline]
    pub fn segments(&self) -> Segments<'_, T> {
        Segments::new(&self.states)
    }
}

impl<T: Clone + Default> Path<T> {
    /// Resizes the path, filling new slots with default states.
    pub fn resize(&mut self, len: usize) {
        self.states.resize(len, T::default());
    }
}

impl<T> Default for Path<T> {
    fn default() -> Self {
        Path::new()
    }
}

impl<T> From<Vec<T>> for Path<T> {
    fn from(states: Vec<T>) -> Self {
        Path::from_vec(states)
    }
}

impl<T> FromIterator<T> for Path<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Path {
            states: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Path<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.states.extend(iter);
    }
}

impl<T> Index<usize> for Path<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.states[index]
    }
}

impl<T> IndexMut<usize> for Path<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.states[index]
    }
}

impl<T> AsRef<[T]> for Path<T> {
    fn as_ref(&self) -> &[T] {
        &self.states
    }
}

impl<'l, T> IntoIterator for &'l Path<T> {
    type Item = &'l T;
    type IntoIter = core::slice::Iter<'l, T>;

    fn into_iter(self) -> core::slice::Iter<'l, T> {
        self.states.iter()
    }
}

impl<T> IntoIterator for Path<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> alloc::vec::IntoIter<T> {
        self.states.into_iter()
    }
}

impl<'l, T> From<&'l Path<T>> for PathSlice<'l, T> {
    fn from(path: &'l Path<T>) -> Self {
        path.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Path<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.as_slice(), formatter)
    }
}

/// Writes each state on its own line.
impl<T: fmt::Display> fmt::Display for Path<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.as_slice(), formatter)
    }
}

impl<'l, T> PathSlice<'l, T> {
    #[inline]
    pub fn new(states: &'l [T]) -> Self {
        PathSlice { states }
    }

    #[inline]
    pub fn states(&self) -> &'l [T] {
        self.states
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Option<&'l T> {
        self.states.first()
    }

    #[inline]
    pub fn goal(&self) -> Option<&'l T> {
        self.states.last()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'l T> {
        self.states.get(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'l, T> {
        self.states.iter()
    }

    #[inline]
    pub fn segments(&self) -> Segments<'l, T> {
        Segments::new(self.states)
    }
}

impl<'l, T> Index<usize> for PathSlice<'l, T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.states[index]
    }
}

impl<'l, T> IntoIterator for PathSlice<'l, T> {
    type Item = &'l T;
    type IntoIter = core::slice::Iter<'l, T>;

    fn into_iter(self) -> core::slice::Iter<'l, T> {
        self.states.iter()
    }
}

impl<'l, T: fmt::Debug> fmt::Debug for PathSlice<'l, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_list().entries(self.states.iter()).finish()
    }
}

impl<'l, T: fmt::Display> fmt::Display for PathSlice<'l, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for state in self.states {
            writeln!(formatter, "{}", state)?;
        }

        Ok(())
    }
}

#[cfg(test)]
use crate::geom::{StateR2, StateSe2};

#[test]
fn start_and_goal() {
    let mut path = Path::new();
    assert!(path.is_empty());
    assert_eq!(path.start(), None);
    assert_eq!(path.goal(), None);

    path.push(StateR2::new(0.0, 0.0));
    assert_eq!(path.start(), path.goal());

    path.push(StateR2::new(1.0, 0.0));
    path.push(StateR2::new(2.0, 1.0));
    assert_eq!(path.len(), 3);
    assert_eq!(path.start(), Some(&StateR2::new(0.0, 0.0)));
    assert_eq!(path.goal(), Some(&StateR2::new(2.0, 1.0)));

    if let Some(goal) = path.goal_mut() {
        goal.y = 5.0;
    }
    assert_eq!(path[2], StateR2::new(2.0, 5.0));
}

#[test]
fn out_of_range_access() {
    let path: Path<StateR2<f64>> = alloc::vec![StateR2::new(0.0, 0.0)].into();
    assert_eq!(path.get(0), Some(&StateR2::new(0.0, 0.0)));
    assert_eq!(path.get(1), None);
    assert_eq!(path.as_slice().get(7), None);
}

#[test]
fn resize_and_clear() {
    let mut path: Path<StateSe2<f64>> = Path::with_capacity(4);
    path.resize(3);
    assert_eq!(path.len(), 3);
    assert!(path.iter().all(|s| *s == StateSe2::new(0.0, 0.0, 0.0)));

    path.states_mut()[1].yaw = 1.0;
    assert_eq!(path[1].yaw, 1.0);

    path.clear();
    assert!(path.is_empty());
}

#[test]
fn extend_and_collect() {
    let mut path: Path<StateR2<f64>> = (0..3).map(|i| StateR2::new(i as f64, 0.0)).collect();
    path.extend(alloc::vec![StateR2::new(3.0, 0.0), StateR2::new(4.0, 0.0)]);

    assert_eq!(path.len(), 5);
    assert_eq!(path.segments().count(), 4);
    for (i, (from, to)) in path.segments().enumerate() {
        assert_eq!(from.x, i as f64);
        assert_eq!(to.x, i as f64 + 1.0);
    }

    let states: Vec<StateR2<f64>> = path.clone().into_iter().collect();
    assert_eq!(Path::from_vec(states), path);
}

#[test]
fn display_one_state_per_line() {
    use std::string::ToString;

    let path = Path::from_vec(alloc::vec![StateR2::new(0.0, 1.0), StateR2::new(2.5, 3.0)]);
    assert_eq!(path.to_string(), "(0, 1)\n(2.5, 3)\n");
    assert_eq!(path.as_slice().to_string(), path.to_string());
}
