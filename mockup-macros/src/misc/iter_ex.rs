use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

pub trait IterEx {
    /// Render the items as tuple: `()`, `(a,)` or `(a, b,)`.
    fn tuple(self) -> TokenStream;
}

impl<X> IterEx for X
where
    X: IntoIterator,
    X::Item: ToTokens,
{
    fn tuple(self) -> TokenStream {
        let iter = self.into_iter();

        quote!((#( #iter, )*))
    }
}
