use enummask::prelude::*;

mask! {
    pub struct Narrow: 4 {
        pub const FITS = 0b1111;
        const NEVER_USED = 0b1_0000;
    }
}

fn main() {
    let _ = Narrow::FITS;
}
