use core::fmt;
use core::hash::Hash;

/// Integer types that range producers can enumerate.
///
/// This trait is sealed; it is implemented for every primitive integer type and cannot be
/// implemented elsewhere. Its methods are used by the producers and are not meant to be
/// called directly.
pub trait Integer: Copy + Ord + Hash + fmt::Debug + sealed::Sealed {
    /// Returns `self + 1`.
    ///
    /// Only called when `self` is known to be less than some other value of the type,
    /// so it cannot overflow.
    #[doc(hidden)]
    #[must_use]
    fn successor(self) -> Self;

    /// Returns `self - 1`.
    ///
    /// Only called when `self` is known to be greater than some other value of the type,
    /// so it cannot overflow.
    #[doc(hidden)]
    #[must_use]
    fn predecessor(self) -> Self;

    /// Returns `|self - other|` if it fits in a [`usize`].
    #[doc(hidden)]
    #[must_use]
    fn distance(self, other: Self) -> Option<usize>;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integer for $t {
                #[inline]
                fn successor(self) -> Self {
                    self + 1
                }

                #[inline]
                fn predecessor(self) -> Self {
                    self - 1
                }

                #[inline]
                fn distance(self, other: Self) -> Option<usize> {
                    usize::try_from(self.abs_diff(other)).ok()
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize);
impl_integer!(u8, u16, u32, u64, u128, usize);
