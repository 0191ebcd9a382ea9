use enummask::prelude::*;

mask! {
    pub struct WithinBounds: 128 {}

    pub struct Empty: 0 {}

    pub struct TooWide: 129 {}

    pub struct CatastrophicallyTooWide: 1048576 {}
}

fn main() {}
