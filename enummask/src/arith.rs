//! Offset and bit arithmetic underlying the mask operations.
//!
//! These are the building blocks of [`set`](crate::set),
//! [`contains`](crate::contains) and [`split`](crate::split). They take the
//! base explicitly and never consult [`Base`](crate::Base).

use crate::{Element, Mask, Underlying};

/// Returns the bit position of `element` relative to `base`.
///
/// This is `underlying(element) - underlying(base)`. An element below the
/// base has no position; it is clamped to zero rather than reported.
/// [`contains`](crate::contains) guards against that case on its own, while
/// [`set`](crate::set) does not.
///
/// ```
/// # use enummask::prelude::*;
/// # use enummask::arith::offset;
/// mask! {
///     pub enum Level: i8 {
///         Low = -1,
///         Mid,
///         High,
///     }
/// }
///
/// assert_eq!(offset(Level::High, Level::Low), 2);
/// assert_eq!(offset(Level::Mid, Level::Mid), 0);
/// assert_eq!(offset(Level::Low, Level::High), 0);
/// ```
#[inline]
#[must_use]
pub fn offset<E: Element>(element: E, base: E) -> u128 {
    element
        .to_underlying()
        .distance_from(base.to_underlying())
        .unwrap_or(0)
}

/// Returns the single-bit pattern for bit `index` of `M`, or `None` if the
/// index is at or beyond the mask's width.
#[inline]
#[must_use]
pub fn bit<M: Mask>(index: u128) -> Option<u128> {
    (index < u128::from(M::WIDTH)).then(|| 1 << index)
}

/// Clears the lowest set bit of a mask.
///
/// The empty mask stays empty.
#[inline]
#[must_use]
pub fn clear_right_most_bit<M: Mask>(mask: M) -> M {
    M::from_bits(clear_lowest(mask.to_bits()))
}

/// Returns the element at the lowest set bit of `mask`, counting from `base`.
///
/// The lowest set bit at index `i` maps to the element whose underlying value
/// is `underlying(base) + i`. Returns `None` if the mask is empty or no
/// element has that underlying value.
#[inline]
#[must_use]
pub fn bit_to_element<M: Mask, E: Element>(mask: M, base: E) -> Option<E> {
    let bits = mask.to_bits();
    if bits == 0 {
        return None;
    }
    base.to_underlying()
        .checked_add_index(bits.trailing_zeros())
        .and_then(E::from_underlying)
}

#[inline]
const fn clear_lowest(bits: u128) -> u128 {
    bits.wrapping_sub(1) & bits
}
