use enummask::prelude::*;

mask! {
    pub enum Element: u8 {
        Zero,
        One,
    }

    pub enum Other: u8 {
        Zero,
        One,
    }

    pub struct Elements: 8 for Element {}
}

fn main() {
    let _ = Elements::ZERO.set(Element::One);
    let _ = Elements::ZERO.set_with_base(Other::One, Other::Zero);
    let _ = Elements::ZERO.set(Other::One);
}
