use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream, Result as ParseResult},
    parse2, Error, ImplItem, ItemImpl, ItemStruct, Path, TraitItemFn, Type,
};

use crate::misc::AttribsEx;

/// Parsed code inside the mock! macro
pub(crate) struct Parsed {
    pub ty: ItemStruct,
    pub impls: Vec<ParsedImpl>,
}

/// One `impl Trait for Type { ... }` block of the mock! macro
pub(crate) struct ParsedImpl {
    pub trait_: Path,
    pub items: Vec<ImplItem>,
    pub methods: Vec<TraitItemFn>,
}

impl ParsedImpl {
    fn new(impl_: ItemImpl) -> ParseResult<Self> {
        let Some((None, trait_, _)) = impl_.trait_ else {
            return Err(Error::new_spanned(
                &impl_.self_ty,
                "Expected implementation of a trait!",
            ));
        };

        if !impl_.generics.params.is_empty() || impl_.generics.where_clause.is_some() {
            return Err(Error::new_spanned(
                &impl_.generics,
                "Generic trait implementations are not supported!",
            ));
        }

        let mut items = Vec::new();
        let mut methods = Vec::new();

        for item in impl_.items {
            match item {
                ImplItem::Verbatim(ts) => methods.push(Self::parse_method(ts)?),
                ImplItem::Fn(f) => {
                    return Err(Error::new_spanned(
                        &f.sig,
                        "Mocked methods must not have a body!",
                    ))
                }
                item => items.push(item),
            }
        }

        Ok(Self {
            trait_,
            items,
            methods,
        })
    }

    fn parse_method(ts: TokenStream) -> ParseResult<TraitItemFn> {
        let method = parse2::<TraitItemFn>(ts)?;

        if method.default.is_some() {
            return Err(Error::new_spanned(
                &method.sig,
                "Mocked methods must not have a body!",
            ));
        }

        Ok(method)
    }
}

impl Parse for Parsed {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let ty = input.parse::<ItemStruct>()?;

        if !ty.generics.params.is_empty() {
            return Err(Error::new_spanned(
                &ty.generics,
                "Generic mock types are not supported!",
            ));
        }

        ty.mockup_flags(&[])?;

        let mut impls = Vec::new();
        while !input.is_empty() {
            let impl_ = input.parse::<ItemImpl>()?;

            let ident = match &*impl_.self_ty {
                Type::Path(p) if p.qself.is_none() => p.path.get_ident(),
                _ => None,
            };

            if ident != Some(&ty.ident) {
                return Err(Error::new_spanned(
                    &impl_.self_ty,
                    "Implementing mock traits for different type in the same mock!{} block is not supported!",
                ));
            }

            impls.push(ParsedImpl::new(impl_)?);
        }

        Ok(Self { ty, impls })
    }
}

impl ToTokens for Parsed {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.ty.clone().remove_mockup_attrs().to_tokens(tokens);
    }
}
