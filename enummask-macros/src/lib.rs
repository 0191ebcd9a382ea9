//! Proc macros for `enummask`.
//!
//! Invoke these through the `enummask` crate's `mask!` macro, which passes its
//! own crate path along.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod ast;
mod gen;

#[proc_macro]
pub fn mask(input: TokenStream) -> TokenStream {
    gen::mask_impl(parse_macro_input!(input as ast::Input)).into()
}
