use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    parse2,
    punctuated::Punctuated,
    token::Comma,
    Expr, ExprCall, Path, Result as ParseResult, Type,
};

use crate::misc::{format_accessor, ident_mockup};

#[derive(Debug, Clone, Copy)]
pub enum CallMode {
    When,
    Invoked,
}

pub fn exec(input: TokenStream, mode: CallMode) -> TokenStream {
    let call = match parse2::<Call>(input) {
        Ok(call) => call,
        Err(err) => return err.to_compile_error(),
    };

    match (mode, &call.seq) {
        (CallMode::When, Some(seq)) => syn::Error::new_spanned(
            seq,
            "A sequence can only be passed to `invoked!`",
        )
        .to_compile_error(),
        (mode, _) => call.render(mode),
    }
}

/// `[seq,] obj [as Trait], method(args...)`
struct Call {
    seq: Option<Expr>,
    obj: Expr,
    as_trait: Option<Path>,
    method: Ident,
    args: Punctuated<Expr, Comma>,
}

impl Parse for Call {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let mut exprs = Punctuated::<Expr, Comma>::parse_terminated(input)?
            .into_iter()
            .collect::<Vec<_>>();

        let Some(Expr::Call(call)) = exprs.pop() else {
            return Err(input.error("Expect a method call as last argument"));
        };
        let ExprCall { func, args, .. } = call;

        let method = match *func {
            Expr::Path(p) if p.path.get_ident().is_some() => p.path.get_ident().cloned(),
            _ => None,
        };
        let Some(method) = method else {
            return Err(input.error("Expect method identifier"));
        };

        let (seq, obj) = match exprs.len() {
            1 => (None, exprs.remove(0)),
            2 => {
                let obj = exprs.remove(1);

                (Some(exprs.remove(0)), obj)
            }
            _ => return Err(input.error("Expect `[sequence,] object [as Trait], method(args..)`")),
        };

        let (obj, as_trait) = match obj {
            Expr::Cast(o) => match *o.ty {
                Type::Path(t) => (*o.expr, Some(t.path)),
                _ => return Err(input.error("Expect trait path")),
            },
            obj => (obj, None),
        };

        Ok(Self {
            seq,
            obj,
            as_trait,
            method,
            args,
        })
    }
}

impl Call {
    fn render(&self, mode: CallMode) -> TokenStream {
        let Self {
            seq,
            obj,
            as_trait,
            method,
            args,
        } = self;

        let mockup = ident_mockup();
        let accessor = format_accessor(method, as_trait.as_ref());

        let matcher = if args.is_empty() {
            quote!(#mockup::matcher::no_args())
        } else {
            let args = args.iter().map(|a| {
                if matches!(a, Expr::Infer(_)) || a.to_token_stream().to_string() == "_" {
                    quote!(#mockup::matcher::any())
                } else {
                    a.to_token_stream()
                }
            });

            quote!(#mockup::matcher::multi((#( #args, )*)))
        };

        let tokens = match (mode, seq) {
            (CallMode::When, _) => quote!(#obj.#accessor().when(#matcher)),
            (CallMode::Invoked, None) => quote!(#obj.#accessor().invoked(#matcher)),
            (CallMode::Invoked, Some(seq)) => {
                quote!(#obj.#accessor().invoked_in(&mut #seq, #matcher))
            }
        };

        #[cfg(feature = "debug")]
        println!("\n{mode:?}:\n{tokens:#}\n");

        tokens
    }
}
