use std::collections::HashSet;

use proc_macro2::{Literal, Span, TokenStream};
use quote::{format_ident, quote, quote_spanned, ToTokens};
use syn::spanned::Spanned;
use syn::{Attribute, Error, Ident, LitStr, Path, Result, Visibility};

use crate::ast::{self, Input, Item, ItemKind};

const REPR_TYPES: [&str; 12] = [
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
];

struct Config {
    crate_path: Path,
}

struct BitintTypeInfo {
    bitint_type: TokenStream,
    primitive_type: TokenStream,
}

impl Config {
    /// Names the bitint and primitive types for the given width.
    fn type_info_for_width(&self, width: usize, span: Span) -> Result<BitintTypeInfo> {
        if !(1..=128).contains(&width) {
            return Err(Error::new(
                span,
                "widths must be at least 1 and at most 128",
            ));
        }

        let crate_path = &self.crate_path;
        let bitint_name = format_ident!("U{width}", span = span);
        let bitint_type = quote_spanned! {span=> #crate_path::bitint::#bitint_name };

        let primitive_width = width.next_power_of_two().max(8);
        let primitive_name = format_ident!("u{}", primitive_width, span = span);
        let primitive_type = quote_spanned! {span=> #primitive_name };

        Ok(BitintTypeInfo {
            bitint_type,
            primitive_type,
        })
    }
}

pub fn mask_impl(input: Input) -> TokenStream {
    let cfg = Config {
        crate_path: input.crate_path,
    };
    let results: Vec<_> = input
        .items
        .into_iter()
        .map(|item| generate_item(&cfg, item))
        .collect();
    quote! { #(#results)* }
}

fn generate_item(cfg: &Config, item: Item) -> TokenStream {
    let cloned_name = item.name().clone();
    let result = match item.kind {
        ItemKind::Struct(struct_) => generate_struct(cfg, item.attrs, item.visibility, struct_),
        ItemKind::Enum(enum_) => generate_enum(cfg, item.attrs, item.visibility, enum_),
    };
    match result {
        Ok(result) => result,
        Err(e) => {
            let compile_error = e.into_compile_error();
            quote! {
                #compile_error
                struct #cloned_name {}
            }
        }
    }
}

fn generate_enum(
    cfg: &Config,
    attrs: Vec<Attribute>,
    visibility: Visibility,
    input: ast::Enum,
) -> Result<TokenStream> {
    let name = input.name;
    let repr = input.repr;
    if !REPR_TYPES.contains(&repr.to_string().as_str()) {
        return Err(Error::new(
            repr.span(),
            "element representations must be a primitive integer type",
        ));
    }
    if input.variants.is_empty() {
        return Err(Error::new(
            name.span(),
            "elements must declare at least one variant",
        ));
    }

    let crate_path = &cfg.crate_path;
    let variant_names: Vec<&Ident> = input.variants.iter().map(|v| &v.name).collect();
    let variants = input.variants.iter().map(|variant| {
        let attrs = &variant.attrs;
        let name = &variant.name;
        match &variant.discriminant {
            Some(discriminant) => {
                let value = &discriminant.value;
                quote! { #(#attrs)* #name = #value }
            }
            None => quote! { #(#attrs)* #name },
        }
    });
    let no_default_base = LitStr::new(
        &format!(
            "`{name}` has no element with underlying value 0; \
                register an explicit base for each mask holding it",
        ),
        name.span(),
    );

    Ok(quote! {
        #[derive(
            ::core::clone::Clone,
            ::core::marker::Copy,
            ::core::fmt::Debug,
            ::core::cmp::PartialEq,
            ::core::cmp::Eq,
            ::core::cmp::PartialOrd,
            ::core::cmp::Ord,
            ::core::hash::Hash,
        )]
        #[repr(#repr)]
        #(#attrs)*
        #visibility enum #name {
            #(#variants,)*
        }

        #[allow(dead_code)]
        impl #name {
            /// Returns the element's underlying value.
            #[inline(always)]
            #[must_use]
            pub const fn to_underlying(self) -> #repr {
                self as #repr
            }

            /// Returns the element with the given underlying value, if there is
            /// one.
            #[inline]
            #[must_use]
            pub const fn from_underlying(value: #repr) -> ::core::option::Option<Self> {
                #(
                    if value == Self::#variant_names as #repr {
                        return ::core::option::Option::Some(Self::#variant_names);
                    }
                )*
                ::core::option::Option::None
            }
        }

        impl #crate_path::Element for #name {
            type Repr = #repr;

            #[inline(always)]
            fn to_underlying(self) -> #repr {
                Self::to_underlying(self)
            }

            #[inline(always)]
            fn from_underlying(value: #repr) -> ::core::option::Option<Self> {
                Self::from_underlying(value)
            }
        }

        impl #crate_path::DefaultBase for #name {
            const DEFAULT_BASE: Self = match Self::from_underlying(0) {
                ::core::option::Option::Some(element) => element,
                ::core::option::Option::None => ::core::panic!(#no_default_base),
            };
        }
    })
}

fn generate_struct(
    cfg: &Config,
    attrs: Vec<Attribute>,
    visibility: Visibility,
    input: ast::Struct,
) -> Result<TokenStream> {
    let name = input.name;
    let struct_width = input.width.base10_parse()?;
    let BitintTypeInfo {
        primitive_type,
        bitint_type,
    } = cfg.type_info_for_width(struct_width, input.width.span())?;

    let crate_path = &cfg.crate_path;
    let width = Literal::u32_unsuffixed(struct_width as u32);
    let is_primitive_width = [8, 16, 32, 64, 128].contains(&struct_width);
    let max_value = Literal::u128_unsuffixed(if struct_width == 128 {
        u128::MAX
    } else {
        (1 << struct_width) - 1
    });

    let (from_primitive_method, from_primitive_impl) = if is_primitive_width {
        let from_primitive_method = quote! {
            /// Creates a mask from a primitive value.
            ///
            /// This zero-cost conversion is a convenience alias for
            /// converting through the `bitint` type.
            #[inline(always)]
            #[must_use]
            pub const fn from_primitive(value: #primitive_type) -> Self {
                Self::from_bitint(#bitint_type::from_primitive(value))
            }
        };
        let from_primitive_impl = quote! {
            impl ::core::convert::From<#primitive_type> for #name {
                #[inline(always)]
                fn from(value: #primitive_type) -> Self {
                    Self::from_primitive(value)
                }
            }
        };
        (from_primitive_method, from_primitive_impl)
    } else {
        let from_primitive_method = TokenStream::new();
        let from_primitive_impl = quote! {
            impl ::core::convert::TryFrom<#primitive_type> for #name {
                type Error = #crate_path::bitint::RangeError;

                #[inline(always)]
                fn try_from(value: #primitive_type) -> ::core::result::Result<Self, Self::Error> {
                    ::core::result::Result::Ok(Self::from_bitint(
                        ::core::convert::TryFrom::try_from(value)?
                    ))
                }
            }
        };
        (from_primitive_method, from_primitive_impl)
    };

    // Named mask values.
    let out_of_range = LitStr::new(
        &format!("a `{name}` constant does not fit in {struct_width} bit(s)"),
        name.span(),
    );
    let literal_check = if struct_width == 128 {
        TokenStream::new()
    } else {
        quote! {
            if value > #max_value {
                ::core::panic!(#out_of_range);
            }
        }
    };
    let consts = input.consts.iter().map(|const_| {
        let attrs = &const_.attrs;
        let visibility = &const_.visibility;
        let const_name = &const_.name;
        let value = &const_.value;
        quote_spanned! {value.span()=>
            #(#attrs)*
            #visibility const #const_name: Self = Self::from_literal(#value);
        }
    });
    // Associated consts are evaluated only on use; these force the range
    // check at the declaration.
    let const_checks: Vec<_> = if struct_width == 128 {
        Vec::new()
    } else {
        input
            .consts
            .iter()
            .map(|const_| {
                let cfgs = const_
                    .attrs
                    .iter()
                    .filter(|attr| attr.path().is_ident("cfg"));
                let const_name = &const_.name;
                quote_spanned! {const_.value.span()=>
                    #(#cfgs)*
                    const _: #name = #name::#const_name;
                }
            })
            .collect()
    };

    // One `Base` impl per element type the mask holds.
    let mut base_impls = Vec::new();
    let mut dual_role = false;
    let mut seen = HashSet::new();
    for binding in input.bindings.iter().flat_map(|b| b.elements.iter()) {
        let element = if binding.is_self() {
            dual_role = true;
            name.to_token_stream()
        } else {
            binding.element.to_token_stream()
        };
        if !seen.insert(element.to_string()) {
            return Err(Error::new(
                binding.span(),
                "each element type may be listed only once",
            ));
        }
        let base = match &binding.base {
            Some(base) => base.path.to_token_stream(),
            None => quote! { <#element as #crate_path::DefaultBase>::DEFAULT_BASE },
        };
        base_impls.push(quote_spanned! {binding.span()=>
            impl #crate_path::Base<#element> for #name {
                const BASE: #element = #base;
            }
        });
    }

    let element_items = if dual_role {
        let element_from_underlying = if is_primitive_width {
            quote! {
                ::core::option::Option::Some(Self::from_bitint(#bitint_type::from_primitive(value)))
            }
        } else {
            quote! {
                if value > #max_value {
                    ::core::option::Option::None
                } else {
                    ::core::option::Option::Some(Self::from_bitint(#bitint_type::new_masked(value)))
                }
            }
        };
        quote! {
            #[allow(dead_code)]
            impl #name {
                /// Returns the mask's bits as an element's underlying value.
                #[inline(always)]
                #[must_use]
                pub const fn to_underlying(self) -> #primitive_type {
                    self.to_primitive()
                }

                /// Returns the element with the given underlying value, if it
                /// fits in the mask's width.
                #[inline]
                #[must_use]
                pub const fn from_underlying(value: #primitive_type) -> ::core::option::Option<Self> {
                    #element_from_underlying
                }
            }

            impl #crate_path::Element for #name {
                type Repr = #primitive_type;

                #[inline(always)]
                fn to_underlying(self) -> #primitive_type {
                    Self::to_underlying(self)
                }

                #[inline(always)]
                fn from_underlying(value: #primitive_type) -> ::core::option::Option<Self> {
                    Self::from_underlying(value)
                }
            }

            impl #crate_path::DefaultBase for #name {
                const DEFAULT_BASE: Self = <Self as #crate_path::Mask>::ZERO;
            }
        }
    } else {
        TokenStream::new()
    };

    Ok(quote! {
        #[derive(
            ::core::clone::Clone,
            ::core::marker::Copy,
            ::core::fmt::Debug,
            ::core::cmp::PartialEq,
            ::core::cmp::Eq,
            ::core::hash::Hash,
        )]
        #[repr(transparent)]
        #(#attrs)*
        #visibility struct #name {
            value: #bitint_type,
        }

        #[allow(dead_code)]
        impl #name {
            #(#consts)*

            #[inline(always)]
            const fn from_literal(value: u128) -> Self {
                #literal_check
                Self::from_bitint(#bitint_type::new_masked(value as #primitive_type))
            }

            /// Creates a mask from a `bitint` value.
            ///
            /// This is a zero-cost conversion.
            #[inline(always)]
            #[must_use]
            pub const fn from_bitint(value: #bitint_type) -> Self {
                Self { value }
            }

            #from_primitive_method

            /// Converts the mask to a `bitint`.
            ///
            /// This is a zero-cost conversion.
            #[inline(always)]
            #[must_use]
            pub const fn to_bitint(self) -> #bitint_type {
                self.value
            }

            /// Converts the mask to the primitive type.
            ///
            /// This zero-cost conversion is a convenience alias for converting
            /// through the `bitint` type.
            #[inline(always)]
            #[must_use]
            pub const fn to_primitive(self) -> #primitive_type {
                self.to_bitint().to_primitive()
            }
        }

        impl ::core::convert::From<#bitint_type> for #name {
            #[inline(always)]
            fn from(value: #bitint_type) -> Self {
                Self::from_bitint(value)
            }
        }

        impl ::core::convert::From<#name> for #bitint_type {
            #[inline(always)]
            fn from(value: #name) -> Self {
                value.to_bitint()
            }
        }

        #from_primitive_impl

        impl ::core::convert::From<#name> for #primitive_type {
            #[inline(always)]
            fn from(value: #name) -> Self {
                value.to_primitive()
            }
        }

        impl #crate_path::Mask for #name {
            type Bitint = #bitint_type;

            const WIDTH: u32 = #width;

            const ZERO: Self = Self {
                value: <#bitint_type as #crate_path::bitint::UBitint>::ZERO,
            };

            #[inline(always)]
            fn from_bits(bits: u128) -> Self {
                Self::from_bitint(<#bitint_type as #crate_path::bitint::UBitint>::new_masked(
                    bits as #primitive_type,
                ))
            }

            #[inline(always)]
            fn to_bits(self) -> u128 {
                self.to_primitive() as u128
            }
        }

        #(#const_checks)*

        #(#base_impls)*

        #element_items
    })
}
