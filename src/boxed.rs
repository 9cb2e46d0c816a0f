use alloc::boxed::Box;

use crate::{Producer, Step};

/// A type-erased producer of `T`, for holding producers of differing concrete types
/// (ranges of either kind, closures) behind one value type.
pub type BoxProducer<'a, T> = Box<dyn Producer<Item = T> + 'a>;

/// Boxes `producer` as a [`BoxProducer`].
///
/// ```
/// use steprange::{boxed, from_fn, range, range_incl, BoxProducer, Producer, Step};
///
/// let mut producers: Vec<BoxProducer<'_, i64>> = vec![
///     boxed(range(0, 2)),
///     boxed(range_incl(9, 8)),
///     boxed(from_fn(|| Step::End)),
/// ];
/// let all: Vec<i64> = producers.iter_mut().flat_map(|p| p.values()).collect();
/// assert_eq!(all, [0, 1, 9, 8]);
/// ```
pub fn boxed<'a, P>(producer: P) -> BoxProducer<'a, P::Item>
where
    P: Producer + 'a,
{
    Box::new(producer)
}

impl<P: Producer + ?Sized> Producer for Box<P> {
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
