use enummask::prelude::*;

mask! {
    pub enum Element: u8 {
        Zero,
        One,
    }

    pub struct Twice: 8 for Element, Element = Element::One {}

    pub struct SelfTwice: 8 for Self, Self {}
}

fn main() {}
