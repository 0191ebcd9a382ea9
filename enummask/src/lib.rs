#![cfg_attr(feature = "_nightly", feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc = include_str!("../../README.md")]
#![no_std]

use core::fmt::Debug;
use core::hash::Hash;

use bitint::prelude::*;

pub use bitint;

pub mod arith;
mod error;
#[cfg(any(doc, feature = "doc"))]
#[cfg_attr(feature = "_nightly", doc(cfg(doc)))]
pub mod example;
mod ops;
pub mod prelude;
mod split;
mod underlying;

pub use error::MaskError;
pub use ops::{
    checked_set, checked_set_with_base, combine, contains, contains_with_base, set, set_mask,
    set_mask_with_base, set_with_base, split, split_with_base,
};
pub use split::Split;
pub use underlying::Underlying;

#[doc(hidden)]
pub mod __private {
    pub use enummask_macros::mask;
}

mod sealed {
    pub trait Sealed {}
}

/// Types whose values can be members of a mask.
///
/// Every element has an underlying integer value. Masks place an element at
/// the bit given by its underlying value minus the underlying value of the
/// mask's [base](Base).
///
/// Types generated by [`mask!`] implement this trait: every `enum` item, and
/// every `struct` item that lists `Self` in its `for` clause.
pub trait Element: Copy + Debug + Eq {
    /// The primitive integer type holding the underlying value.
    type Repr: Underlying;

    /// Returns the element's underlying value.
    fn to_underlying(self) -> Self::Repr;

    /// Returns the element with the given underlying value, if there is one.
    fn from_underlying(value: Self::Repr) -> Option<Self>;
}

/// Elements with a default base: the element whose underlying value is zero.
///
/// [`mask!`] implements this for every element type it generates. For an
/// `enum` without a zero-valued variant, the constant fails to evaluate, so
/// any mask relying on the default base for that element fails to compile.
pub trait DefaultBase: Element {
    /// The element whose underlying value is zero.
    const DEFAULT_BASE: Self;
}

/// Mask types.
///
/// A mask is a bit pattern [`WIDTH`](Self::WIDTH) bits wide, stored as a
/// `bitint` type. There are zero-cost conversions between `Self` and the
/// `bitint` type. The bit-level interface works in `u128`, which is wide
/// enough for every mask; bits at or above the width are masked away on the
/// way in.
///
/// The provided methods are the method forms of the crate's free functions.
pub trait Mask: Copy + Debug + Eq + Hash + From<Self::Bitint> {
    /// The `bitint` type with zero-cost conversions to and from [`Self`].
    type Bitint: UBitint + From<Self>;

    /// The number of bits in the mask.
    const WIDTH: u32;

    /// The empty mask.
    const ZERO: Self;

    /// Returns the empty mask.
    fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a mask from raw bits, discarding any bit at or above
    /// [`WIDTH`](Self::WIDTH).
    fn from_bits(bits: u128) -> Self;

    /// Returns the mask's raw bits.
    fn to_bits(self) -> u128;

    /// Returns whether no bit is set.
    fn is_empty(self) -> bool {
        self.to_bits() == 0
    }

    /// Returns the number of set bits.
    fn len(self) -> u32 {
        self.to_bits().count_ones()
    }

    /// Builds a mask holding each of the given elements.
    ///
    /// Method form of [`set_mask`].
    fn from_elements<E>(elements: impl IntoIterator<Item = E>) -> Self
    where
        Self: Base<E>,
        E: Element,
    {
        ops::set_mask(elements)
    }

    /// Method form of [`set`].
    #[must_use]
    fn set<E>(self, element: E) -> Self
    where
        Self: Base<E>,
        E: Element,
    {
        ops::set(self, element)
    }

    /// Method form of [`set_with_base`].
    #[must_use]
    fn set_with_base<E: Element>(self, element: E, base: E) -> Self {
        ops::set_with_base(self, element, base)
    }

    /// Method form of [`checked_set`].
    fn checked_set<E>(self, element: E) -> Result<Self, MaskError>
    where
        Self: Base<E>,
        E: Element,
    {
        ops::checked_set(self, element)
    }

    /// Method form of [`checked_set_with_base`].
    fn checked_set_with_base<E: Element>(self, element: E, base: E) -> Result<Self, MaskError> {
        ops::checked_set_with_base(self, element, base)
    }

    /// Method form of [`contains`].
    fn contains<E>(self, element: E) -> bool
    where
        Self: Base<E>,
        E: Element,
    {
        ops::contains(self, element)
    }

    /// Method form of [`contains_with_base`].
    fn contains_with_base<E: Element>(self, element: E, base: E) -> bool {
        ops::contains_with_base(self, element, base)
    }

    /// Method form of [`split`].
    fn split<E>(self) -> Split<Self, E>
    where
        Self: Base<E>,
        E: Element,
    {
        ops::split(self)
    }

    /// Method form of [`split_with_base`].
    fn split_with_base<E: Element>(self, base: E) -> Split<Self, E> {
        ops::split_with_base(self, base)
    }
}

/// Registers which element of `E` occupies bit zero of `Self`.
///
/// A mask can hold elements of any type it implements `Base` for, each pair
/// anchored independently. The operations without an explicit base argument
/// require this impl; the `_with_base` variants don't.
///
/// [`mask!`] emits one impl per entry of a struct's `for` clause, using the
/// given base or falling back to [`DefaultBase::DEFAULT_BASE`]. Manual impls
/// are fine too:
///
/// ```
/// # use enummask::prelude::*;
/// mask! {
///     pub enum Channel: u8 {
///         Left,
///         Right,
///         Center,
///     }
///
///     pub struct Surround: 8 {}
/// }
///
/// impl Base<Channel> for Surround {
///     const BASE: Channel = Channel::Right;
/// }
///
/// let mask = Surround::ZERO.set(Channel::Center);
/// assert_eq!(mask.to_bits(), 0b10);
/// assert!(!mask.contains(Channel::Left));
/// ```
pub trait Base<E: Element>: Mask {
    /// The element at bit zero.
    const BASE: E;
}

/// Declares element enums and mask structs.
///
/// See the [examples](example).
///
#[doc = include_str!("../syntax.md")]
#[macro_export]
macro_rules! mask {
    ($($tt:tt)*) => {
        $crate::__private::mask! { ($crate, $($tt)*) }
    };
}

/// Computes the raw bit pattern of some elements from their own underlying
/// values, without consulting any base.
///
/// Expands to a `u128` constant expression, so it can initialize mask
/// constants. An element whose underlying value is negative or at least 128
/// is an overflowing shift, which fails to compile in a constant and panics
/// at runtime in debug builds. The [`combine`](fn@combine) function is the
/// non-panicking runtime counterpart.
///
/// ```
/// # use enummask::prelude::*;
/// mask! {
///     pub enum Element: u8 {
///         Zero,
///         One,
///         Two,
///     }
/// }
///
/// const ONE_AND_TWO: u128 = combine!(Element::One, Element::Two);
/// assert_eq!(ONE_AND_TWO, 0b110);
/// ```
#[macro_export]
macro_rules! combine {
    ($($element:expr),+ $(,)?) => {
        0u128 $(| (1u128 << ($element).to_underlying()))+
    };
}

#[cfg(feature = "_trybuild_tests")]
#[test]
fn trybuild_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests_error/*.rs");
}
