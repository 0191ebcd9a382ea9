use enummask::prelude::*;

mask! {
    pub enum Element: u8 {
        Zero,
        One,
        Two,
    }

    pub enum Signed: i64 {
        Min = i64::MIN,
        Minus = -1,
        Zero,
        Plus,
    }

    pub struct Single: 1 for Element {
        pub const EMPTY = 0;
        pub const FULL = 1;
    }

    pub struct Twelve: 12 for Element, Signed = Signed::Minus {
        pub const EMPTY = 0;
        pub const FULL = 0xfff;
    }

    pub struct Widest: 128 for Element, Signed {
        pub const EMPTY = 0;
        pub const FULL = u128::MAX;
    }

    pub struct Selfish: 12 for Self {
        pub const EMPTY = 0;
        pub const TOP = 0xfff;
    }
}

#[test]
fn test_width() {
    assert_eq!(Single::WIDTH, 1);
    assert_eq!(Twelve::WIDTH, 12);
    assert_eq!(Widest::WIDTH, 128);
}

#[test]
fn test_single_bit() {
    assert_eq!(Single::EMPTY.set(Element::Zero), Single::FULL);
    assert_eq!(Single::EMPTY.set(Element::One), Single::EMPTY);
    assert_eq!(Single::FULL.len(), 1);
    assert_eq!(Single::FULL.to_primitive(), 1);
}

#[test]
fn test_from_bits_masks_high_bits() {
    assert_eq!(Twelve::from_bits(0xf_ffff), Twelve::FULL);
    assert_eq!(Twelve::from_bits(0x1000), Twelve::EMPTY);
    assert_eq!(Twelve::FULL.to_bits(), 0xfff);
    assert_eq!(Widest::from_bits(u128::MAX), Widest::FULL);
}

#[bitint_literals]
#[test]
fn test_conversions() {
    let mask = Twelve::from_bitint(0x123_U12);
    assert_eq!(mask.to_primitive(), 0x123u16);
    assert_eq!(u16::from(mask), 0x123);
    assert_eq!(U12::from(mask), 0x123_U12);
    assert_eq!(Twelve::from(0x123_U12), mask);
    assert_eq!(Twelve::try_from(0x123u16).ok(), Some(mask));
    assert!(Twelve::try_from(0x1000u16).is_err());

    let widest = Widest::from_primitive(1 << 100);
    assert_eq!(u128::from(widest), 1 << 100);
    assert_eq!(Widest::from(7u128).len(), 3);
}

#[test]
fn test_signed_elements() {
    let mask = Twelve::EMPTY.set(Signed::Minus).set(Signed::Plus);
    assert_eq!(mask.to_primitive(), 0b101);
    assert!(!mask.contains(Signed::Zero));
    assert!(!mask.contains(Signed::Min));
    let below = Twelve::EMPTY.checked_set(Signed::Min);
    assert_eq!(below, Err(enummask::MaskError::BelowBase));

    let elements: Vec<Signed> = mask.split().collect();
    assert_eq!(elements, [Signed::Minus, Signed::Plus]);
}

#[test]
fn test_distance_does_not_overflow() {
    // The distance from `Min` to `Plus` does not fit in an `i64`.
    let mask = Widest::EMPTY.set_with_base(Signed::Plus, Signed::Min);
    assert_eq!(mask, Widest::EMPTY);
    assert_eq!(
        Widest::EMPTY.checked_set_with_base(Signed::Plus, Signed::Min),
        Err(enummask::MaskError::BeyondWidth),
    );
}

#[test]
fn test_widest_mask() {
    let mask = Widest::EMPTY.set(Element::Two);
    assert_eq!(mask.to_primitive(), 0b100);
    assert_eq!(Widest::FULL.len(), 128);
    assert_eq!(Widest::FULL.split::<Element>().count(), 3);
    assert_eq!(Widest::FULL.split::<Signed>().count(), 2);
}

#[test]
fn test_dual_role_narrow() {
    assert_eq!(Selfish::from_underlying(0xfff), Some(Selfish::TOP));
    assert_eq!(Selfish::from_underlying(0x1000), None);
    let top = <Selfish as enummask::Element>::to_underlying(Selfish::TOP);
    assert_eq!(top, 0xfff);

    // `TOP` is 4095 above the default base, far beyond bit 11.
    assert_eq!(Selfish::EMPTY.set(Selfish::TOP), Selfish::EMPTY);
    let one = Selfish::from_underlying(1).unwrap();
    assert_eq!(Selfish::EMPTY.set(one).to_primitive(), 0b10);
}
