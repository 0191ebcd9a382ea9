use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    braced, parenthesized, token, Attribute, Expr, Ident, LitInt, Path, Result, Token, Type,
    Visibility,
};

pub struct Input {
    _paren_token: token::Paren,
    pub crate_path: Path,
    _comma_token: Token![,],
    pub items: Vec<Item>,
}

impl Parse for Input {
    fn parse(input: ParseStream) -> Result<Self> {
        let content;
        Ok(Input {
            _paren_token: parenthesized!(content in input),
            crate_path: content.parse()?,
            _comma_token: content.parse()?,
            items: {
                let mut items = Vec::new();
                while !content.is_empty() {
                    items.push(content.parse()?);
                }
                items
            },
        })
    }
}

pub struct Item {
    pub attrs: Vec<Attribute>,
    pub visibility: Visibility,
    pub kind: ItemKind,
}

pub enum ItemKind {
    Struct(Struct),
    Enum(Enum),
}

impl Item {
    pub fn name(&self) -> &Ident {
        match &self.kind {
            ItemKind::Struct(struct_) => &struct_.name,
            ItemKind::Enum(enum_) => &enum_.name,
        }
    }
}

impl Parse for Item {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            attrs: input.call(Attribute::parse_outer)?,
            visibility: input.parse()?,
            kind: {
                let lookahead = input.lookahead1();
                if lookahead.peek(Token![struct]) {
                    Ok(ItemKind::Struct(input.parse()?))
                } else if lookahead.peek(Token![enum]) {
                    Ok(ItemKind::Enum(input.parse()?))
                } else {
                    Err(lookahead.error())
                }
            }?,
        })
    }
}

/// A mask declaration: `struct Name: width for A, B = B::X { const ... }`.
pub struct Struct {
    _struct_token: Token![struct],
    pub name: Ident,
    _colon_token: Token![:],
    pub width: LitInt,
    pub bindings: Option<Bindings>,
    _brace_token: token::Brace,
    pub consts: Vec<Const>,
}

impl Parse for Struct {
    fn parse(input: ParseStream) -> Result<Self> {
        let body;
        Ok(Self {
            _struct_token: input.parse()?,
            name: input.parse()?,
            _colon_token: input.parse()?,
            width: input.parse()?,
            bindings: {
                if input.peek(Token![for]) {
                    Some(input.parse()?)
                } else {
                    None
                }
            },
            _brace_token: braced!(body in input),
            consts: {
                let mut consts = Vec::new();
                while !body.is_empty() {
                    consts.push(body.parse()?);
                }
                consts
            },
        })
    }
}

pub struct Bindings {
    _for_token: Token![for],
    pub elements: Punctuated<Binding, Token![,]>,
}

impl Parse for Bindings {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            _for_token: input.parse()?,
            elements: Punctuated::parse_separated_nonempty(input)?,
        })
    }
}

/// One element type a mask holds, with an optional registered base.
pub struct Binding {
    pub element: Type,
    pub base: Option<BindingBase>,
}

impl Binding {
    pub fn is_self(&self) -> bool {
        matches!(
            &self.element,
            Type::Path(type_path) if type_path.qself.is_none() && type_path.path.is_ident("Self"),
        )
    }

    pub fn span(&self) -> Span {
        match &self.base {
            Some(base) => self
                .element
                .span()
                .join(base.path.span())
                .unwrap_or(self.element.span()),
            None => self.element.span(),
        }
    }
}

impl Parse for Binding {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            element: input.parse()?,
            base: {
                if input.peek(Token![=]) {
                    Some(input.parse()?)
                } else {
                    None
                }
            },
        })
    }
}

pub struct BindingBase {
    _eq_token: Token![=],
    pub path: Path,
}

impl Parse for BindingBase {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            _eq_token: input.parse()?,
            path: input.parse()?,
        })
    }
}

/// A named mask value: `const NAME = expr;`.
pub struct Const {
    pub attrs: Vec<Attribute>,
    pub visibility: Visibility,
    _const_token: Token![const],
    pub name: Ident,
    _eq_token: Token![=],
    pub value: Expr,
    _semi_token: Token![;],
}

impl Parse for Const {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            attrs: input.call(Attribute::parse_outer)?,
            visibility: input.parse()?,
            _const_token: input.parse()?,
            name: input.parse()?,
            _eq_token: input.parse()?,
            value: input.parse()?,
            _semi_token: input.parse()?,
        })
    }
}

/// An element declaration: `enum Name: repr { Variant, ... }`.
pub struct Enum {
    _enum_token: Token![enum],
    pub name: Ident,
    _colon_token: Token![:],
    pub repr: Ident,
    _brace_token: token::Brace,
    pub variants: Punctuated<Variant, Token![,]>,
}

impl Parse for Enum {
    fn parse(input: ParseStream) -> Result<Self> {
        let body;
        Ok(Self {
            _enum_token: input.parse()?,
            name: input.parse()?,
            _colon_token: input.parse()?,
            repr: input.parse()?,
            _brace_token: braced!(body in input),
            variants: body.parse_terminated(Variant::parse, Token![,])?,
        })
    }
}

pub struct Variant {
    pub attrs: Vec<Attribute>,
    pub name: Ident,
    pub discriminant: Option<Discriminant>,
}

impl Parse for Variant {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            attrs: input.call(Attribute::parse_outer)?,
            name: input.parse()?,
            discriminant: {
                if input.peek(Token![=]) {
                    Some(input.parse()?)
                } else {
                    None
                }
            },
        })
    }
}

pub struct Discriminant {
    _eq_token: Token![=],
    pub value: Expr,
}

impl Parse for Discriminant {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            _eq_token: input.parse()?,
            value: input.parse()?,
        })
    }
}
