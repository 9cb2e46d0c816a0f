#![no_std]

//! This crate provides pull-based integer range producers: [`range()`], which enumerates
//! `start` up to but not including `end`, and [`range_incl()`], which enumerates `start`
//! through `end`. Either may count upward or downward, depending on which bound is larger.
//!
//! Each producer is a small stateful object; every call to [`Producer::advance()`] yields
//! either [`Step::Next`] carrying the next integer, or [`Step::End`] once the range is
//! exhausted. Exhaustion is permanent: a producer that has returned [`Step::End`] returns it
//! on every later call.
//!
//! ```
//! use steprange::{range, range_incl, Producer, Step};
//!
//! let mut up = range(2_i64, 5);
//! assert_eq!(up.advance(), Step::Next(2));
//! assert_eq!(up.advance(), Step::Next(3));
//! assert_eq!(up.advance(), Step::Next(4));
//! assert_eq!(up.advance(), Step::End);
//! assert_eq!(up.advance(), Step::End);
//!
//! // Ranges are also ordinary iterators.
//! assert_eq!(range_incl(5_i64, 2).collect::<Vec<_>>(), [5, 4, 3, 2]);
//! ```
//!
//! # Package features
//!
//! All features are enabled by default.
//! If you set `default-features = false`, `steprange` becomes `no_std` compatible.
//! The `alloc` feature adds [`BoxProducer`] for storing producers of differing types
//! behind one value type.

#![forbid(rust_2018_idioms)]
#![forbid(unsafe_code)]
#![warn(unreachable_pub)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc
)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::exhaustive_enums)]
#![warn(clippy::exhaustive_structs)]
#![warn(clippy::pedantic)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// -------------------------------------------------------------------------------------------------

use core::fmt;
use core::iter::FusedIterator;

// -------------------------------------------------------------------------------------------------

mod direction;
mod from_fn;
mod integer;
mod range;
mod range_incl;

#[cfg(feature = "alloc")]
mod boxed;

#[cfg(doctest)]
pub mod test_compile_fail;


pub use direction::Direction;
pub use from_fn::{from_fn, FromFn};
pub use integer::Integer;
pub use range::{range, Range};
pub use range_incl::{range_incl, RangeIncl};

#[cfg(feature = "alloc")]
pub use boxed::{boxed, BoxProducer};

// -------------------------------------------------------------------------------------------------

/// The result of one invocation of a [`Producer`].
///
/// Only [`Step::Next`] carries a value; exhaustion is signalled by [`Step::End`] rather than by
/// any particular integer, so every integer remains available as a range element.
///
/// `Step<T>` converts to and from [`Option<T>`], with [`Step::End`] corresponding to [`None`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)] // these two variants are the entire protocol
#[must_use]
pub enum Step<T> {
    /// A produced element.
    Next(T),
    /// The producer has no further elements.
    End,
}

impl<T> Step<T> {
    /// Returns whether this is [`Step::Next`].
    #[must_use]
    pub const fn is_next(&self) -> bool {
        matches!(self, Step::Next(_))
    }

    /// Returns whether this is [`Step::End`].
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Step::End)
    }

    /// Converts to an [`Option`], mapping [`Step::End`] to [`None`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Next(value) => Some(value),
            Step::End => None,
        }
    }

    /// Applies `f` to the carried value, if any.
    ///
    /// ```
    /// use steprange::Step;
    ///
    /// assert_eq!(Step::Next(4).map(|x| x * 2), Step::Next(8));
    /// assert_eq!(Step::<i32>::End.map(|x| x * 2), Step::End);
    /// ```
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Step<U> {
        match self {
            Step::Next(value) => Step::Next(f(value)),
            Step::End => Step::End,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Step::Next(value),
            None => Step::End,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    #[inline]
    fn from(step: Step<T>) -> Self {
        step.into_option()
    }
}

// -------------------------------------------------------------------------------------------------

/// A stateful, re-invocable source of elements, pulled one at a time.
///
/// # Properties
///
/// Implementations provided by this crate have the following properties, and implementations
/// written elsewhere should have them too:
///
/// * Advancing requires exclusive access (`&mut self`); a producer is never advanced from two
///   places at once, and two producers never share state.
/// * Once [`advance()`](Self::advance) returns [`Step::End`], every later call also returns
///   [`Step::End`]. (Closure producers from [`from_fn()`] cannot guarantee this by themselves;
///   [`Iter`] enforces it when consuming one.)
/// * `advance()` does not panic.
///
/// # Examples
///
/// Writing a producer by hand:
///
/// ```
/// use steprange::{Producer, Step};
///
/// /// Yields the same value a fixed number of times.
/// struct Repeat {
///     value: i64,
///     remaining: usize,
/// }
///
/// impl Producer for Repeat {
///     type Item = i64;
///
///     fn advance(&mut self) -> Step<i64> {
///         if self.remaining == 0 {
///             Step::End
///         } else {
///             self.remaining -= 1;
///             Step::Next(self.value)
///         }
///     }
///
///     fn size_hint(&self) -> (usize, Option<usize>) {
///         (self.remaining, Some(self.remaining))
///     }
/// }
///
/// let repeat = Repeat { value: 7, remaining: 3 };
/// assert_eq!(repeat.values().collect::<Vec<_>>(), [7, 7, 7]);
/// ```
pub trait Producer {
    /// The type of element produced.
    type Item;

    /// Produces the next element, or [`Step::End`] if there are none left.
    fn advance(&mut self) -> Step<Self::Item>;

    /// Returns bounds on the number of elements remaining, with the same meaning as
    /// [`Iterator::size_hint()`].
    ///
    /// The default implementation returns `(0, None)`, which is correct for any producer.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Adapts this producer into an [`Iterator`] over its elements.
    ///
    /// The returned iterator is fused: after the first [`Step::End`] the producer is not
    /// advanced again.
    #[must_use]
    fn values(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter {
            producer: self,
            ended: false,
        }
    }
}

impl<P: Producer + ?Sized> Producer for &mut P {
    type Item = P::Item;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

// -------------------------------------------------------------------------------------------------

/// Iterator over the elements of any [`Producer`].
///
/// It may be obtained with [`Producer::values()`].
pub struct Iter<P> {
    producer: P,
    ended: bool,
}

impl<P> Iter<P> {
    /// Returns the wrapped producer.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P: Producer> Iterator for Iter<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.ended {
            return None;
        }
        match self.producer.advance() {
            Step::Next(value) => Some(value),
            Step::End => {
                self.ended = true;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.ended {
            (0, Some(0))
        } else {
            self.producer.size_hint()
        }
    }
}

impl<P: Producer> FusedIterator for Iter<P> {}

impl<P: Clone> Clone for Iter<P> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            producer: self.producer.clone(),
            ended: self.ended,
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Iter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("steprange::Iter")
            .field("producer", &self.producer)
            .field("ended", &self.ended)
            .finish()
    }
}
