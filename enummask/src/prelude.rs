//! Glob import for the macros, traits, and `bitint` types.

pub use bitint::prelude::*;

pub use crate::{combine, mask, Base, DefaultBase, Element, Mask, Split};
