use convert_case::{Case, Casing};
use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote, ToTokens};
use syn::{
    parse::Result as ParseResult, Error, FnArg, Pat, PatIdent, PatType, Path, ReturnType,
    Signature, TraitItemFn, Type, TypeReference,
};

use crate::misc::{format_accessor, format_method_token, AttribsEx, IterEx};

/// A single mocked method with everything needed to render its method
/// token, its trait implementation and its accessors.
pub(crate) struct MockMethod {
    pub trait_: Path,
    pub sig: Signature,
    pub ident_token: Ident,
    pub ident_accessor: Ident,
    pub ident_as_accessor: Ident,
    pub args: Vec<MockArg>,
    pub output: Type,
    pub output_kind: OutputKind,
    pub no_default: bool,
    pub name: String,
}

/// One parameter of a mocked method.
pub(crate) struct MockArg {
    /// Name of the parameter inside the generated method.
    pub ident: Ident,

    /// Type of the parameter in the recorded argument tuple.
    pub recorded: Type,

    /// Expression that turns the parameter into its recorded value.
    pub snapshot: TokenStream,
}

/// How the produced value is handed to the caller.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum OutputKind {
    /// Returned by value.
    Value,

    /// `&T` borrowed from a `&self` receiver.
    Shared,

    /// `&T` borrowed from a `&mut self` receiver.
    SharedFromMut,

    /// `&mut T` borrowed from a `&mut self` receiver.
    Exclusive,
}

impl MockMethod {
    pub(crate) fn new(trait_: &Path, method: TraitItemFn, mockup: &Ident) -> ParseResult<Self> {
        let no_default = !method.mockup_flags(&["no_default"])?.is_empty();
        let TraitItemFn { mut sig, .. } = method.remove_mockup_attrs();

        let Some(receiver) = sig.receiver() else {
            return Err(Error::new_spanned(
                &sig,
                "Mocked methods need a `self` receiver!",
            ));
        };
        let receiver_mut = match (&receiver.reference, &receiver.mutability) {
            (Some(_), Some(_)) => Some(true),
            (Some(_), None) => Some(false),
            (None, _) => None,
        };

        if sig.generics.type_params().next().is_some()
            || sig.generics.const_params().next().is_some()
        {
            return Err(Error::new_spanned(
                &sig.generics,
                "Generic methods are not supported!",
            ));
        }

        if let Some(asyncness) = &sig.asyncness {
            return Err(Error::new_spanned(asyncness, "Async methods are not supported!"));
        }

        let (output, output_kind) = match &sig.output {
            ReturnType::Default => (Type::Verbatim(quote!(())), OutputKind::Value),
            ReturnType::Type(_, t) => match &**t {
                Type::Reference(r) if !is_static(r) => {
                    let kind = match (receiver_mut, r.mutability.is_some()) {
                        (Some(false), false) => OutputKind::Shared,
                        (Some(true), false) => OutputKind::SharedFromMut,
                        (Some(true), true) => OutputKind::Exclusive,
                        (Some(false), true) => {
                            return Err(Error::new_spanned(
                                t,
                                "Methods returning `&mut` references need a `&mut self` receiver!",
                            ))
                        }
                        (None, _) => {
                            return Err(Error::new_spanned(
                                t,
                                "Methods returning references need a `&self` or `&mut self` receiver!",
                            ))
                        }
                    };

                    (referent(&r.elem), kind)
                }
                t => (t.clone(), OutputKind::Value),
            },
        };

        let mut args = Vec::new();
        for input in &mut sig.inputs {
            let FnArg::Typed(pat_type) = input else {
                continue;
            };

            let arg = MockArg::new(args.len(), pat_type, mockup)?;

            *pat_type = pat_type.clone().remove_mockup_attrs();
            pat_type.pat = Box::new(Pat::Ident(PatIdent {
                attrs: Vec::new(),
                by_ref: None,
                mutability: None,
                ident: arg.ident.clone(),
                subpat: None,
            }));

            args.push(arg);
        }

        let ident = &sig.ident;
        let trait_name = trait_
            .segments
            .last()
            .map(|s| s.ident.to_string())
            .unwrap_or_default();

        Ok(Self {
            trait_: trait_.clone(),
            ident_token: format_method_token(ident, trait_),
            ident_accessor: format_accessor(ident, None),
            ident_as_accessor: format_accessor(ident, Some(trait_)),
            name: format!("{trait_name}::{ident}"),
            sig,
            args,
            output,
            output_kind,
            no_default,
        })
    }

    /// Name of the field of the mock object that keeps the returned values
    /// of a method returning a reference.
    pub(crate) fn ident_output_slot(&self) -> Option<Ident> {
        (self.output_kind != OutputKind::Value).then(|| {
            format_ident!(
                "output_{}",
                self.ident_token.to_string().to_case(Case::Snake)
            )
        })
    }

    /// Render the method token type and its `Method` implementation.
    pub(crate) fn render_token(&self, mockup: &Ident) -> TokenStream {
        let Self {
            ident_token,
            args,
            output,
            output_kind,
            no_default,
            name,
            trait_,
            sig,
            ..
        } = self;

        let args = args.iter().map(|a| &a.recorded).tuple();
        let doc = format!(
            "Token of the mocked method `{}::{}`.",
            trait_.to_token_stream(),
            sig.ident
        );

        let default_action = if *no_default {
            quote!(None)
        } else {
            quote!(Some(|_| ::std::default::Default::default()))
        };

        let returns_reference = (*output_kind != OutputKind::Value).then(|| {
            quote! {
                const RETURNS_REFERENCE: bool = true;
            }
        });

        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy)]
            pub struct #ident_token;

            impl #mockup::Method for #ident_token {
                type Args = #args;
                type Output = #output;

                const NAME: &'static str = #name;

                #returns_reference

                #[allow(clippy::default_trait_access)]
                fn default_action() -> Option<fn(Self::Args) -> Self::Output> {
                    #default_action
                }
            }
        }
    }

    /// Render the implementation of the method inside the trait implementation
    /// of the mock object.
    pub(crate) fn render_impl(&self) -> TokenStream {
        let Self {
            sig,
            ident_token,
            args,
            output_kind,
            ..
        } = self;

        let snapshot = args.iter().map(|a| &a.snapshot).tuple();
        let slot = self.ident_output_slot();

        let body = match output_kind {
            OutputKind::Value => quote! {
                self.mock_state.invoke::<method::#ident_token>(#snapshot)
            },
            OutputKind::Shared => quote! {
                ::std::borrow::Borrow::borrow(
                    self.mock_state.invoke_ref::<method::#ident_token>(&self.#slot, #snapshot)
                )
            },
            OutputKind::SharedFromMut => quote! {
                ::std::borrow::Borrow::borrow(
                    &*self.mock_state.invoke_mut::<method::#ident_token>(&mut self.#slot, #snapshot)
                )
            },
            OutputKind::Exclusive => quote! {
                ::std::borrow::BorrowMut::borrow_mut(
                    self.mock_state.invoke_mut::<method::#ident_token>(&mut self.#slot, #snapshot)
                )
            },
        };

        quote! {
            #sig {
                #body
            }
        }
    }

    /// Render the accessors to the [`Member`] handle of this method.
    pub(crate) fn render_accessors(&self, mockup: &Ident, unique: bool) -> TokenStream {
        let Self {
            ident_token,
            ident_accessor,
            ident_as_accessor,
            name,
            ..
        } = self;

        let doc = format!("Stub and check the calls of `{name}`.");
        let accessor = |ident: &Ident| {
            quote! {
                #[doc = #doc]
                pub fn #ident(&self) -> #mockup::Member<'_, method::#ident_token> {
                    #mockup::Member::new(&self.mock_state)
                }
            }
        };

        let as_accessor = accessor(ident_as_accessor);
        let short_accessor = unique.then(|| accessor(ident_accessor));

        quote! {
            #as_accessor
            #short_accessor
        }
    }
}

fn is_static(r: &TypeReference) -> bool {
    r.lifetime.as_ref().is_some_and(|l| l.ident == "static")
}

/// Type that is stored for a returned reference to `elem`. Unsized types
/// like `str` or slices are stored as their owned counterpart.
fn referent(elem: &Type) -> Type {
    match elem {
        Type::Slice(_) => Type::Verbatim(quote!(<#elem as ::std::borrow::ToOwned>::Owned)),
        Type::Path(p) if p.qself.is_none() && p.path.is_ident("str") => {
            Type::Verbatim(quote!(<#elem as ::std::borrow::ToOwned>::Owned))
        }
        elem => elem.clone(),
    }
}

impl MockArg {
    fn new(index: usize, pat_type: &PatType, mockup: &Ident) -> ParseResult<Self> {
        let ident = format_ident!("arg{}", index, span = Span::call_site());
        let by_ref = !pat_type.mockup_flags(&["by_ref"])?.is_empty();

        let (recorded, snapshot) = match &*pat_type.ty {
            Type::Reference(r) if by_ref => {
                let elem = &r.elem;

                (
                    Type::Verbatim(quote!(#mockup::Ref<#elem>)),
                    quote!(#mockup::Ref::new(#ident)),
                )
            }
            Type::Reference(r) => {
                let elem = &r.elem;

                (
                    Type::Verbatim(quote!(<#elem as ::std::borrow::ToOwned>::Owned)),
                    quote!(::std::borrow::ToOwned::to_owned(&*#ident)),
                )
            }
            ty if by_ref => {
                return Err(Error::new_spanned(
                    ty,
                    "`by_ref` can only be used for reference parameters!",
                ))
            }
            Type::ImplTrait(ty) => {
                return Err(Error::new_spanned(
                    ty,
                    "`impl Trait` parameters are not supported!",
                ))
            }
            ty => (ty.clone(), ident.to_token_stream()),
        };

        Ok(Self {
            ident,
            recorded,
            snapshot,
        })
    }
}
