use core::fmt::Debug;
use core::hash::Hash;

use crate::sealed::Sealed;

/// Primitive integer types that can hold an element's underlying value.
///
/// Implemented for every signed and unsigned primitive integer type, which
/// are exactly the types an enum may be `#[repr]`'d as.
pub trait Underlying: Copy + Debug + Eq + Ord + Hash + Sealed {
    /// Zero.
    const ZERO: Self;

    /// Returns `self - base`, or `None` when `self < base`.
    ///
    /// The difference is exact for every type; it is only meaningful as a bit
    /// index while it is less than 128.
    fn distance_from(self, base: Self) -> Option<u128>;

    /// Returns `self + index`, or `None` if the sum is out of range.
    fn checked_add_index(self, index: u32) -> Option<Self>;

    /// Returns `self` as a bit index into a `u128`, or `None` if it is
    /// negative or at least 128.
    fn bit_index(self) -> Option<u32>;
}

macro_rules! impl_underlying {
    ($($ty:ty),* $(,)?) => {$(
        impl Sealed for $ty {}

        impl Underlying for $ty {
            const ZERO: Self = 0;

            #[inline]
            fn distance_from(self, base: Self) -> Option<u128> {
                (self >= base).then(|| self.abs_diff(base) as u128)
            }

            #[inline]
            fn checked_add_index(self, index: u32) -> Option<Self> {
                Self::try_from(index)
                    .ok()
                    .and_then(|index| self.checked_add(index))
            }

            #[inline]
            fn bit_index(self) -> Option<u32> {
                u32::try_from(self).ok().filter(|&index| index < u128::BITS)
            }
        }
    )*};
}

impl_underlying!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_unsigned() {
        assert_eq!(5u8.distance_from(2), Some(3));
        assert_eq!(2u8.distance_from(2), Some(0));
        assert_eq!(1u8.distance_from(2), None);
        assert_eq!(u128::MAX.distance_from(0), Some(u128::MAX));
    }

    #[test]
    fn distance_signed() {
        assert_eq!(3i8.distance_from(-2), Some(5));
        assert_eq!(i8::MAX.distance_from(i8::MIN), Some(255));
        assert_eq!((-3i16).distance_from(-2), None);
        assert_eq!(i128::MAX.distance_from(i128::MIN), Some(u128::MAX));
    }

    #[test]
    fn add_index() {
        assert_eq!(254u8.checked_add_index(1), Some(255));
        assert_eq!(255u8.checked_add_index(1), None);
        assert_eq!(0u8.checked_add_index(256), None);
        assert_eq!((-4i32).checked_add_index(6), Some(2));
        assert_eq!(i8::MIN.checked_add_index(127), Some(-1));
    }

    #[test]
    fn bit_index() {
        assert_eq!(0u8.bit_index(), Some(0));
        assert_eq!(127i64.bit_index(), Some(127));
        assert_eq!(128u16.bit_index(), None);
        assert_eq!((-1i8).bit_index(), None);
        assert_eq!(u64::MAX.bit_index(), None);
    }
}
