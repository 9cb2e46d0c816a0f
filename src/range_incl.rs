use core::iter::FusedIterator;

use crate::{Direction, Integer, Producer, Step};

/// Creates a producer of the integers from `start` through `end`, inclusive.
///
/// If `start > end` the range counts down instead. If they are equal, the shared value is
/// produced exactly once. Every pair of bounds is valid, including the extremes of `T`.
///
/// ```
/// use steprange::{range_incl, Producer, Step};
///
/// let mut single = range_incl(3_i64, 3);
/// assert_eq!(single.advance(), Step::Next(3));
/// assert_eq!(single.advance(), Step::End);
///
/// assert_eq!(range_incl(250_u8, u8::MAX).collect::<Vec<_>>(), [250, 251, 252, 253, 254, 255]);
/// ```
pub fn range_incl<T: Integer>(start: T, end: T) -> RangeIncl<T> {
    RangeIncl {
        cursor: start,
        end,
        direction: Direction::between(start, end),
        exhausted: false,
    }
}

/// Producer returned by [`range_incl()`].
///
/// Yields exactly `|end - start| + 1` elements, the last of which is `end`.
///
/// The `end` bound is a valid element, so reaching it cannot by itself mean exhaustion;
/// a separate flag records that it has been produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use = "producers do nothing unless advanced"]
pub struct RangeIncl<T> {
    cursor: T,
    end: T,
    direction: Direction,
    exhausted: bool,
}

impl<T: Integer> RangeIncl<T> {
    /// The value the next [`advance()`](Producer::advance) will produce, unless the range is
    /// exhausted.
    #[must_use]
    pub fn cursor(&self) -> T {
        self.cursor
    }

    /// The inclusive bound.
    #[must_use]
    pub fn end(&self) -> T {
        self.end
    }

    /// The direction fixed at construction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns whether `end` has been produced, so that no elements remain.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<T: Integer> Producer for RangeIncl<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> Step<T> {
        if self.exhausted {
            Step::End
        } else if self.cursor == self.end {
            self.exhausted = true;
            Step::Next(self.cursor)
        } else {
            let current = self.cursor;
            self.cursor = self.direction.apply(self.cursor);
            Step::Next(current)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self
            .cursor
            .distance(self.end)
            .and_then(|d| d.checked_add(1))
        {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Integer> Iterator for RangeIncl<T> {
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

impl<T: Integer> FusedIterator for RangeIncl<T> {}
