//! Example [`mask!`] invocations and their generated types.

use crate::prelude::*;

mask! {
    /// An element type with the default base.
    ///
    /// `Zero` has underlying value 0, so it occupies bit zero of any mask that
    /// holds `Weekday` without registering a base.
    ///
    /// # Declaration
    ///
    /// ```
    /// # use enummask::prelude::*;
    /// mask! {
    ///     /// An element type with the default base.
    ///     pub enum Weekday: u8 {
    ///         Zero,
    ///         Monday,
    ///         Tuesday,
    ///     }
    /// }
    /// ```
    pub enum Weekday: u8 {
        /// Underlying value 0.
        Zero,
        /// Underlying value 1.
        Monday,
        /// Underlying value 2.
        Tuesday,
        /// Underlying value 3.
        Wednesday,
        /// Underlying value 4.
        Thursday,
        /// Underlying value 5.
        Friday,
        /// Underlying value 6.
        Saturday,
        /// Underlying value 7.
        Sunday,
    }

    /// A mask of [`Weekday`]s anchored at the default base.
    ///
    /// Bit `n` holds the weekday with underlying value `n`.
    ///
    /// # Declaration
    ///
    /// ```
    /// # use enummask::prelude::*;
    /// # mask! {
    /// #     pub enum Weekday: u8 {
    /// #         Zero,
    /// #         Monday,
    /// #         Tuesday,
    /// #         Wednesday,
    /// #         Thursday,
    /// #         Friday,
    /// #         Saturday,
    /// #         Sunday,
    /// #     }
    /// # }
    /// mask! {
    ///     pub struct Weekdays: 8 for Weekday {
    ///         pub const NONE = 0;
    ///         pub const WEEKEND = combine!(Weekday::Saturday, Weekday::Sunday);
    ///     }
    /// }
    ///
    /// assert!(Weekdays::WEEKEND.contains(Weekday::Sunday));
    /// assert_eq!(Weekdays::WEEKEND.to_primitive(), 0b1100_0000);
    /// ```
    pub struct Weekdays: 8 for Weekday {
        /// No days.
        pub const NONE = 0;
        /// Saturday and Sunday.
        pub const WEEKEND = combine!(Weekday::Saturday, Weekday::Sunday);
    }

    /// A mask of [`Weekday`]s anchored at [`Weekday::Monday`].
    ///
    /// Seven bits suffice once `Zero` is excluded, so this type wraps a
    /// [`U7`](crate::bitint::U7).
    ///
    /// # Declaration
    ///
    /// ```
    /// # use enummask::prelude::*;
    /// # mask! {
    /// #     pub enum Weekday: u8 {
    /// #         Zero,
    /// #         Monday,
    /// #         Tuesday,
    /// #         Wednesday,
    /// #         Thursday,
    /// #         Friday,
    /// #         Saturday,
    /// #         Sunday,
    /// #     }
    /// # }
    /// mask! {
    ///     pub struct Workdays: 7 for Weekday = Weekday::Monday {
    ///         pub const NONE = 0;
    ///     }
    /// }
    ///
    /// let mask = Workdays::NONE.set(Weekday::Monday).set(Weekday::Friday);
    /// assert_eq!(mask.to_primitive(), 0b001_0001);
    /// assert!(!mask.contains(Weekday::Zero));
    /// ```
    pub struct Workdays: 7 for Weekday = Weekday::Monday {
        /// No days.
        pub const NONE = 0;
    }

    /// A type that is both a mask and its own element type.
    ///
    /// Its named values are elements; the masks built from them are values of
    /// the same type.
    ///
    /// # Declaration
    ///
    /// ```
    /// # use enummask::prelude::*;
    /// mask! {
    ///     pub struct Register: 16 for Self = Self::FIRST {
    ///         pub const EMPTY = 0;
    ///         pub const FIRST = 1 << 8;
    ///         pub const SECOND = (1 << 8) + 1;
    ///     }
    /// }
    ///
    /// let mask = Register::EMPTY.set(Register::SECOND);
    /// assert!(mask.contains(Register::SECOND));
    /// assert!(!mask.contains(Register::FIRST));
    /// ```
    pub struct Register: 16 for Self = Self::FIRST {
        /// The empty mask.
        pub const EMPTY = 0;
        /// The element at bit zero.
        pub const FIRST = 1 << 8;
        /// The element at bit one.
        pub const SECOND = (1 << 8) + 1;
    }
}
