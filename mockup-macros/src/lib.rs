#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions)]

use call::CallMode;
use proc_macro::TokenStream;

mod call;
mod misc;
mod mock;

#[proc_macro]
pub fn mock(input: TokenStream) -> TokenStream {
    mock::exec(input.into()).into()
}

#[proc_macro]
pub fn when(input: TokenStream) -> TokenStream {
    call::exec(input.into(), CallMode::When).into()
}

#[proc_macro]
pub fn invoked(input: TokenStream) -> TokenStream {
    call::exec(input.into(), CallMode::Invoked).into()
}
