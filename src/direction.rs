use crate::Integer;

/// Which way a range producer moves its cursor.
///
/// Chosen once, when the producer is constructed, and never changed afterward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)] // a unit step has exactly two signs
pub enum Direction {
    /// Step `+1`.
    Ascending,
    /// Step `-1`.
    Descending,
}

impl Direction {
    /// Picks the direction that moves from `start` toward `end`.
    ///
    /// Equal bounds resolve to [`Direction::Descending`]. No producer ever steps in that case,
    /// so the choice is not observable through iteration.
    ///
    /// ```
    /// use steprange::Direction;
    ///
    /// assert_eq!(Direction::between(2, 5), Direction::Ascending);
    /// assert_eq!(Direction::between(5, 2), Direction::Descending);
    /// assert_eq!(Direction::between(3, 3), Direction::Descending);
    /// ```
    #[must_use]
    pub fn between<T: Integer>(start: T, end: T) -> Self {
        if start < end {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    /// The signed unit increment this direction applies per step.
    #[must_use]
    pub const fn step(self) -> i8 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }

    /// Moves `value` one unit in this direction.
    ///
    /// Callers guarantee `value` has not yet reached the range's end, which lies in this
    /// direction, so the result is always representable.
    #[inline]
    pub(crate) fn apply<T: Integer>(self, value: T) -> T {
        match self {
            Direction::Ascending => value.successor(),
            Direction::Descending => value.predecessor(),
        }
    }
}
