use core::fmt;

use crate::{Producer, Step};

/// Creates a producer that calls `f` on each [`advance()`](Producer::advance).
///
/// This is how a zero-argument callable, such as one written in a guest language, becomes
/// a [`Producer`]. Nothing stops `f` from returning [`Step::Next`] again after [`Step::End`];
/// consume it through [`Producer::values()`] to stop at the first [`Step::End`].
///
/// ```
/// use steprange::{from_fn, Producer, Step};
///
/// let mut countdown = 3_i64;
/// let producer = from_fn(move || {
///     if countdown == 0 {
///         Step::End
///     } else {
///         countdown -= 1;
///         Step::Next(countdown)
///     }
/// });
/// assert_eq!(producer.values().collect::<Vec<_>>(), [2, 1, 0]);
///
/// // Any iterator can be turned into a producer this way.
/// let mut letters = "ab".chars();
/// let mut producer = from_fn(move || Step::from(letters.next()));
/// assert_eq!(producer.advance(), Step::Next('a'));
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    FromFn(f)
}

/// Producer returned by [`from_fn()`].
#[derive(Clone)]
#[must_use = "producers do nothing unless advanced"]
pub struct FromFn<F>(F);

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;

    #[inline]
    fn advance(&mut self) -> Step<T> {
        (self.0)()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    #[mutants::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
