use core::iter::FusedIterator;

/// An iterator over the consecutive pairs of states of a path.
///
/// Yields nothing for paths with fewer than two states.
#[derive(Clone, Debug)]
pub struct Segments<'l, T> {
    states: &'l [T],
    index: usize,
}

impl<'l, T> Segments<'l, T> {
    pub fn new(states: &'l [T]) -> Self {
        Segments { states, index: 1 }
    }
}

impl<'l, T> Iterator for Segments<'l, T> {
    type Item = (&'l T, &'l T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.states.len() {
            return None;
        }

        let segment = (&self.states[self.index - 1], &self.states[self.index]);
        self.index += 1;

        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.states.len().saturating_sub(self.index);
        (n, Some(n))
    }
}

impl<'l, T> ExactSizeIterator for Segments<'l, T> {}

impl<'l, T> FusedIterator for Segments<'l, T> {}

#[test]
fn consecutive_pairs() {
    let states = [1, 2, 3, 4];
    let mut segments = Segments::new(&states);

    assert_eq!(segments.len(), 3);
    assert_eq!(segments.next(), Some((&1, &2)));
    assert_eq!(segments.next(), Some((&2, &3)));
    assert_eq!(segments.next(), Some((&3, &4)));
    assert_eq!(segments.next(), None);
    assert_eq!(segments.next(), None);
}

#[test]
fn too_short_for_segments() {
    let empty: [u32; 0] = [];
    assert_eq!(Segments::new(&empty).count(), 0);
    assert_eq!(Segments::new(&[1]).count(), 0);
}
