use enummask::prelude::*;

mask! {
    pub enum OneBased: u8 {
        One = 1,
        Two,
    }

    pub struct Registered: 8 for OneBased = OneBased::One {}

    pub struct Defaulted: 8 for OneBased {}
}

fn main() {
    let _ = Registered::ZERO.set(OneBased::Two);
    let _ = Defaulted::ZERO.set(OneBased::Two);
}
