mod attribs_ex;
mod iter_ex;

use convert_case::{Case, Casing};
use proc_macro2::Ident;
use quote::format_ident;
use syn::Path;

pub(crate) use attribs_ex::AttribsEx;
pub(crate) use iter_ex::IterEx;

fn format_trait(t: &Path) -> String {
    t.segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("_")
        .replace(|c: char| !c.is_alphanumeric(), "_")
}

pub(crate) fn format_accessor(method: &Ident, as_trait: Option<&Path>) -> Ident {
    if let Some(t) = as_trait {
        format_ident!("as_{}_mock_{}", format_trait(t).to_case(Case::Snake), method)
    } else {
        format_ident!("mock_{}", method)
    }
}

pub(crate) fn format_method_token(method: &Ident, trait_: &Path) -> Ident {
    format_ident!(
        "{}",
        format!("{}_{}", format_trait(trait_), method).to_case(Case::Pascal)
    )
}

pub(crate) fn format_mock_module(ident: &Ident) -> Ident {
    format_ident!("mock_{}", ident.to_string().to_case(Case::Snake))
}

pub(crate) fn format_mock_type(ident: &Ident) -> Ident {
    format_ident!("{}Mock", ident)
}

#[cfg(feature = "force-name")]
pub(crate) fn ident_mockup() -> Ident {
    format_ident!("mockup")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_mockup() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("mockup") {
        Ok(FoundCrate::Itself) => format_ident!("crate"),
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Err(_) => format_ident!("mockup"),
    }
}
