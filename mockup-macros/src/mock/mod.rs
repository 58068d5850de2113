mod mock_method;
mod mock_module;
mod parsed;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::parse2;

use mock_module::MockModule;
use parsed::Parsed;

pub(crate) fn exec(input: TokenStream) -> TokenStream {
    let parsed = match parse2::<Parsed>(input) {
        Ok(parsed) => parsed,
        Err(err) => return err.to_compile_error(),
    };

    let tokens = match MockModule::new(parsed) {
        Ok(module) => module.into_token_stream(),
        Err(err) => return err.to_compile_error(),
    };

    #[cfg(feature = "debug")]
    println!("\nmock!:\n{tokens:#}\n");

    tokens
}
