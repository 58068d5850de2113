use proc_macro2::Ident;
use syn::{
    parse::{ParseStream, Result as ParseResult},
    punctuated::Punctuated,
    token::Comma,
    Attribute, Error, ItemStruct, Meta, PatType, Path, TraitItemFn,
};

/* AttribsEx */

pub trait AttribsEx: Sized {
    fn derives(&self, _ident: &str) -> bool {
        false
    }

    /// Get the flags of all `#[mockup(...)]` attributes. Every flag that is
    /// not contained in `allowed` is reported as error.
    fn mockup_flags(&self, allowed: &[&str]) -> ParseResult<Vec<Ident>>;

    fn remove_mockup_attrs(self) -> Self;
}

fn list_contains(attr: &Attribute, path: &str, ident: &str) -> bool {
    match &attr.meta {
        Meta::List(ml) if attr.path().is_ident(path) => {
            let mut ret = false;

            let _ = ml.parse_args_with(|p: ParseStream<'_>| {
                if let Ok(ml) = Punctuated::<Path, Comma>::parse_separated_nonempty(p) {
                    ret = ml.iter().any(|p| p.is_ident(ident));
                }

                Ok(())
            });

            ret
        }
        _ => false,
    }
}

impl AttribsEx for Vec<Attribute> {
    fn derives(&self, ident: &str) -> bool {
        self.iter().any(|attr| list_contains(attr, "derive", ident))
    }

    fn mockup_flags(&self, allowed: &[&str]) -> ParseResult<Vec<Ident>> {
        let mut ret = Vec::new();

        for attr in self.iter().filter(|a| a.path().is_ident("mockup")) {
            let flags = attr.parse_args_with(Punctuated::<Ident, Comma>::parse_terminated)?;

            for flag in flags {
                if !allowed.iter().any(|a| flag == *a) {
                    let msg = if allowed.is_empty() {
                        format!("Unknown mockup attribute `{flag}`, none is supported here")
                    } else {
                        format!(
                            "Unknown mockup attribute `{flag}`, expected one of: {}",
                            allowed.join(", ")
                        )
                    };

                    return Err(Error::new_spanned(&flag, msg));
                }

                ret.push(flag);
            }
        }

        Ok(ret)
    }

    fn remove_mockup_attrs(mut self) -> Self {
        self.retain(|a| !a.path().is_ident("mockup"));

        self
    }
}

impl AttribsEx for ItemStruct {
    fn derives(&self, ident: &str) -> bool {
        self.attrs.derives(ident)
    }

    fn mockup_flags(&self, allowed: &[&str]) -> ParseResult<Vec<Ident>> {
        self.attrs.mockup_flags(allowed)
    }

    fn remove_mockup_attrs(mut self) -> Self {
        self.attrs = self.attrs.remove_mockup_attrs();

        self
    }
}

impl AttribsEx for TraitItemFn {
    fn mockup_flags(&self, allowed: &[&str]) -> ParseResult<Vec<Ident>> {
        self.attrs.mockup_flags(allowed)
    }

    fn remove_mockup_attrs(mut self) -> Self {
        self.attrs = self.attrs.remove_mockup_attrs();

        self
    }
}

impl AttribsEx for PatType {
    fn mockup_flags(&self, allowed: &[&str]) -> ParseResult<Vec<Ident>> {
        self.attrs.mockup_flags(allowed)
    }

    fn remove_mockup_attrs(mut self) -> Self {
        self.attrs = self.attrs.remove_mockup_attrs();

        self
    }
}
