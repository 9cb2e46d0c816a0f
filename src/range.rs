use core::iter::FusedIterator;

use crate::{Direction, Integer, Producer, Step};

/// Creates a producer of the integers from `start` up to, but not including, `end`.
///
/// If `start > end` the range counts down instead; if they are equal it is empty.
/// Every pair of bounds is valid.
///
/// ```
/// use steprange::{range, Producer, Step};
///
/// let mut down = range(5_i64, 2);
/// assert_eq!(down.advance(), Step::Next(5));
/// assert_eq!(down.advance(), Step::Next(4));
/// assert_eq!(down.advance(), Step::Next(3));
/// assert_eq!(down.advance(), Step::End);
///
/// assert_eq!(range(3_i64, 3).advance(), Step::End);
/// ```
pub fn range<T: Integer>(start: T, end: T) -> Range<T> {
    Range {
        cursor: start,
        end,
        direction: Direction::between(start, end),
    }
}

/// Producer returned by [`range()`].
///
/// Yields exactly `|end - start|` elements; the `end` bound itself is never produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use = "producers do nothing unless advanced"]
pub struct Range<T> {
    cursor: T,
    end: T,
    direction: Direction,
}

impl<T: Integer> Range<T> {
    /// The value the next [`advance()`](Producer::advance) will produce, unless the range is
    /// exhausted (in which case this equals [`end()`](Self::end)).
    #[must_use]
    pub fn cursor(&self) -> T {
        self.cursor
    }

    /// The exclusive bound.
    #[must_use]
    pub fn end(&self) -> T {
        self.end
    }

    /// The direction fixed at construction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns whether no elements remain.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.end
    }
}

impl<T: Integer> Producer for Range<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> Step<T> {
        if self.cursor == self.end {
            return Step::End;
        }
        let current = self.cursor;
        self.cursor = self.direction.apply(self.cursor);
        Step::Next(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor.distance(self.end) {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Integer> Iterator for Range<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.advance().into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        Producer::size_hint(self)
    }
}

impl<T: Integer> FusedIterator for Range<T> {}
