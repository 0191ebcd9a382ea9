use crate::arith::{bit, offset};
use crate::{Base, Element, Mask, MaskError, Split, Underlying};

/// Returns `mask` with the bit for `element` set, counting from the mask's
/// registered [base](Base).
///
/// ```
/// # use enummask::prelude::*;
/// mask! {
///     pub enum Element: u8 {
///         Zero,
///         One,
///         Two,
///     }
///
///     pub struct Elements: 8 for Element {
///         pub const EMPTY = 0;
///     }
/// }
///
/// let mask = enummask::set(Elements::EMPTY, Element::One);
/// assert!(enummask::contains(mask, Element::One));
/// assert!(!enummask::contains(mask, Element::Two));
/// ```
#[inline]
#[must_use]
pub fn set<M, E>(mask: M, element: E) -> M
where
    M: Base<E>,
    E: Element,
{
    set_with_base(mask, element, M::BASE)
}

/// Returns `mask` with the bit for `element` set, counting from `base`.
///
/// An element below `base` is clamped to offset zero and sets bit zero, the
/// bit that belongs to `base` itself. [`contains_with_base`] never reports
/// such an element as present. Use [`checked_set_with_base`] to reject it
/// instead.
///
/// An element whose offset is at or beyond the mask's width has no bit; the
/// mask is returned unchanged.
#[inline]
#[must_use]
pub fn set_with_base<M: Mask, E: Element>(mask: M, element: E, base: E) -> M {
    match bit::<M>(offset(element, base)) {
        Some(bit) => M::from_bits(mask.to_bits() | bit),
        None => mask,
    }
}

/// Like [`set`], but fails instead of aliasing bit zero or dropping the bit.
#[inline]
pub fn checked_set<M, E>(mask: M, element: E) -> Result<M, MaskError>
where
    M: Base<E>,
    E: Element,
{
    checked_set_with_base(mask, element, M::BASE)
}

/// Like [`set_with_base`], but fails instead of aliasing bit zero or dropping
/// the bit.
pub fn checked_set_with_base<M: Mask, E: Element>(
    mask: M,
    element: E,
    base: E,
) -> Result<M, MaskError> {
    let offset = element
        .to_underlying()
        .distance_from(base.to_underlying())
        .ok_or(MaskError::BelowBase)?;
    let bit = bit::<M>(offset).ok_or(MaskError::BeyondWidth)?;
    Ok(M::from_bits(mask.to_bits() | bit))
}

/// Builds a mask holding each of `elements`, counting from the mask's
/// registered [base](Base).
///
/// Order and duplicates don't matter.
///
/// ```
/// # use enummask::prelude::*;
/// mask! {
///     pub enum Element: u8 {
///         Zero,
///         One,
///         Two,
///     }
///
///     pub struct Elements: 8 for Element {}
/// }
///
/// let mask: Elements = enummask::set_mask([Element::Two, Element::Zero, Element::Two]);
/// assert_eq!(mask.to_bits(), 0b101);
/// ```
#[inline]
#[must_use]
pub fn set_mask<M, E>(elements: impl IntoIterator<Item = E>) -> M
where
    M: Base<E>,
    E: Element,
{
    set_mask_with_base(elements, M::BASE)
}

/// Builds a mask holding each of `elements`, counting from `base`.
///
/// Each element goes through [`set_with_base`], including its treatment of
/// elements below the base.
#[must_use]
pub fn set_mask_with_base<M: Mask, E: Element>(
    elements: impl IntoIterator<Item = E>,
    base: E,
) -> M {
    elements
        .into_iter()
        .fold(M::ZERO, |mask, element| set_with_base(mask, element, base))
}

/// Returns the raw bit pattern of `elements` from their own underlying
/// values: the union of `1 << underlying(element)`.
///
/// No base is involved. Elements whose underlying value is negative or at
/// least 128 contribute no bit. See [`combine!`](crate::combine!) for a form
/// usable in constants.
#[must_use]
pub fn combine<E: Element>(elements: impl IntoIterator<Item = E>) -> u128 {
    elements.into_iter().fold(0, |bits, element| {
        match element.to_underlying().bit_index() {
            Some(index) => bits | 1 << index,
            None => bits,
        }
    })
}

/// Returns whether `mask` holds `element`, counting from the mask's
/// registered [base](Base).
#[inline]
#[must_use]
pub fn contains<M, E>(mask: M, element: E) -> bool
where
    M: Base<E>,
    E: Element,
{
    contains_with_base(mask, element, M::BASE)
}

/// Returns whether `mask` holds `element`, counting from `base`.
///
/// An element below `base` is never held, whatever bit zero says.
#[inline]
#[must_use]
pub fn contains_with_base<M: Mask, E: Element>(mask: M, element: E, base: E) -> bool {
    if element.to_underlying() < base.to_underlying() {
        return false;
    }
    match bit::<M>(offset(element, base)) {
        Some(bit) => mask.to_bits() & bit != 0,
        None => false,
    }
}

/// Returns an iterator over the elements in `mask`, counting from the mask's
/// registered [base](Base).
///
/// ```
/// # use enummask::prelude::*;
/// mask! {
///     pub enum Element: u8 {
///         Zero,
///         One,
///         Two,
///     }
///
///     pub struct Elements: 8 for Element {
///         pub const ONE_AND_TWO = combine!(Element::One, Element::Two);
///     }
/// }
///
/// let mut elements = enummask::split::<Element, _>(Elements::ONE_AND_TWO);
/// assert_eq!(elements.next(), Some(Element::One));
/// assert_eq!(elements.next(), Some(Element::Two));
/// assert_eq!(elements.next(), None);
/// ```
#[inline]
pub fn split<E, M>(mask: M) -> Split<M, E>
where
    M: Base<E>,
    E: Element,
{
    split_with_base(mask, M::BASE)
}

/// Returns an iterator over the elements in `mask`, counting from `base`.
#[inline]
pub fn split_with_base<E: Element, M: Mask>(mask: M, base: E) -> Split<M, E> {
    Split::new(mask, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod manual {
        // Implemented by hand rather than through `mask!`.
        use bitint::prelude::*;

        use crate::{Base, DefaultBase, Element, Mask};

        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum Digit {
            Zero,
            One,
            Two,
            Three,
        }

        impl Element for Digit {
            type Repr = u8;

            fn to_underlying(self) -> u8 {
                self as u8
            }

            fn from_underlying(value: u8) -> Option<Self> {
                [Self::Zero, Self::One, Self::Two, Self::Three]
                    .into_iter()
                    .find(|&digit| digit as u8 == value)
            }
        }

        impl DefaultBase for Digit {
            const DEFAULT_BASE: Self = Self::Zero;
        }

        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct Narrow(pub U2);

        impl From<U2> for Narrow {
            fn from(value: U2) -> Self {
                Self(value)
            }
        }

        impl From<Narrow> for U2 {
            fn from(value: Narrow) -> Self {
                value.0
            }
        }

        impl Mask for Narrow {
            type Bitint = U2;

            const WIDTH: u32 = 2;

            const ZERO: Self = Self(<U2 as UBitint>::ZERO);

            fn from_bits(bits: u128) -> Self {
                Self(<U2 as UBitint>::new_masked(bits as u8))
            }

            fn to_bits(self) -> u128 {
                u128::from(self.0.to_primitive())
            }
        }

        impl Base<Digit> for Narrow {
            const BASE: Digit = Digit::DEFAULT_BASE;
        }
    }

    use manual::{Digit, Narrow};

    #[test]
    fn set_drops_bits_beyond_width() {
        let mask = set(Narrow::ZERO, Digit::Two);
        assert_eq!(mask, Narrow::ZERO);
        assert!(!contains(mask, Digit::Two));
    }

    #[test]
    fn checked_set_reports() {
        assert_eq!(
            checked_set(Narrow::ZERO, Digit::Three),
            Err(MaskError::BeyondWidth),
        );
        assert_eq!(
            checked_set_with_base(Narrow::ZERO, Digit::Zero, Digit::One),
            Err(MaskError::BelowBase),
        );
        assert_eq!(
            checked_set(Narrow::ZERO, Digit::One).map(Mask::to_bits),
            Ok(0b10),
        );
    }

    #[test]
    fn set_below_base_aliases_bit_zero() {
        let mask = set_with_base(Narrow::ZERO, Digit::Zero, Digit::One);
        assert_eq!(mask.to_bits(), 0b01);
        assert!(contains_with_base(mask, Digit::One, Digit::One));
        assert!(!contains_with_base(mask, Digit::Zero, Digit::One));
    }

    #[test]
    fn combine_skips_unrepresentable() {
        assert_eq!(combine([Digit::Three, Digit::Zero]), 0b1001);
        assert_eq!(combine::<Digit>([]), 0);
    }
}
