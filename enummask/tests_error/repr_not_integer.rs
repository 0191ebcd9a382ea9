use enummask::prelude::*;

mask! {
    pub enum Floating: f32 {
        Zero,
    }

    pub enum Boolean: bool {
        No,
    }

    pub enum Nothing: u8 {}
}

fn main() {}
