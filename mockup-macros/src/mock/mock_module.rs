use std::collections::HashMap;

use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::{parse::Result as ParseResult, ImplItem, Path};

use crate::misc::{format_mock_module, format_mock_type, ident_mockup, AttribsEx};

use super::{mock_method::MockMethod, parsed::Parsed};

/// Everything generated by one mock! macro: the mocked type itself and the
/// module containing the mock object, the method tokens and the trait
/// implementations.
pub(crate) struct MockModule {
    parsed: Parsed,
    mockup: Ident,
    impls: Vec<MockImpl>,
}

struct MockImpl {
    trait_: Path,
    items: Vec<ImplItem>,
    methods: Vec<MockMethod>,
}

impl MockModule {
    pub(crate) fn new(mut parsed: Parsed) -> ParseResult<Self> {
        let mockup = ident_mockup();

        let impls = parsed
            .impls
            .drain(..)
            .map(|impl_| {
                let methods = impl_
                    .methods
                    .into_iter()
                    .map(|method| MockMethod::new(&impl_.trait_, method, &mockup))
                    .collect::<ParseResult<Vec<_>>>()?;

                Ok(MockImpl {
                    trait_: impl_.trait_,
                    items: impl_.items,
                    methods,
                })
            })
            .collect::<ParseResult<Vec<_>>>()?;

        Ok(Self {
            parsed,
            mockup,
            impls,
        })
    }

    fn methods(&self) -> impl Iterator<Item = &MockMethod> {
        self.impls.iter().flat_map(|impl_| impl_.methods.iter())
    }
}

impl ToTokens for MockModule {
    #[allow(clippy::too_many_lines)]
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            parsed,
            mockup,
            impls,
        } = self;

        let vis = &parsed.ty.vis;
        let ident_state = &parsed.ty.ident;
        let ident_module = format_mock_module(ident_state);
        let ident_mock = format_mock_type(ident_state);

        let mut name_count = HashMap::<String, usize>::new();
        for method in self.methods() {
            *name_count.entry(method.sig.ident.to_string()).or_default() += 1;
        }

        let method_tokens = self.methods().map(|method| method.render_token(mockup));
        let accessors = self.methods().map(|method| {
            let unique = name_count.get(&method.sig.ident.to_string()) == Some(&1);

            method.render_accessors(mockup, unique)
        });

        let output_slots = self
            .methods()
            .filter_map(|method| Some((method.ident_output_slot()?, &method.ident_token)))
            .collect::<Vec<_>>();
        let slot_fields = output_slots.iter().map(|(ident, token)| {
            quote! {
                #ident: #mockup::OutputSlot<<method::#token as #mockup::Method>::Output>,
            }
        });
        let slot_inits = output_slots.iter().map(|(ident, _)| {
            quote! {
                #ident: #mockup::OutputSlot::new(),
            }
        });

        let trait_impls = impls.iter().map(|impl_| {
            let MockImpl {
                trait_,
                items,
                methods,
            } = impl_;

            let methods = methods.iter().map(MockMethod::render_impl);

            quote! {
                impl #trait_ for Mock {
                    #( #items )*
                    #( #methods )*
                }
            }
        });

        let default_impl = parsed.ty.derives("Default").then(|| {
            quote! {
                impl Mock {
                    /// Create a new mock object wrapping the default value
                    /// of the mocked type.
                    pub fn new() -> Self {
                        #[allow(clippy::default_trait_access)]
                        Self::from_state(Default::default())
                    }
                }

                impl Default for Mock {
                    fn default() -> Self {
                        Self::new()
                    }
                }
            }
        });

        let doc_module = format!(
            "Implements the mock object for [`{ident_state}`] generated by the `mock!` macro."
        );

        tokens.extend(quote! {
            #parsed

            #vis use #ident_module::Mock as #ident_mock;

            #[doc = #doc_module]
            #vis mod #ident_module {
                use std::fmt::{Debug, Formatter, Result as FmtResult};
                use std::ops::{Deref, DerefMut};

                #[allow(clippy::wildcard_imports)]
                use super::*;

                /// Mocked version of the type the `mock!` macro was executed on.
                ///
                /// The mock object dereferences to the wrapped object. All
                /// actions and recorded calls are dropped together with it.
                #[must_use]
                pub struct Mock {
                    /// The object the mock was created from.
                    pub state: #ident_state,

                    mock_state: #mockup::MockState,

                    #( #slot_fields )*
                }

                impl Mock {
                    /// Create a new [`Mock`] instance from the passed `state` object.
                    pub fn from_state(state: #ident_state) -> Self {
                        Self {
                            state,
                            mock_state: #mockup::MockState::new(),
                            #( #slot_inits )*
                        }
                    }

                    #( #accessors )*
                }

                #default_impl

                impl #mockup::Mocked for Mock {
                    type State = #ident_state;

                    fn mock_state(&self) -> &#mockup::MockState {
                        &self.mock_state
                    }

                    fn into_state(self) -> Self::State {
                        self.state
                    }
                }

                impl #mockup::Mockable for #ident_state {
                    type Mock = Mock;

                    fn into_mock(self) -> Self::Mock {
                        Mock::from_state(self)
                    }
                }

                impl Deref for Mock {
                    type Target = #ident_state;

                    fn deref(&self) -> &Self::Target {
                        &self.state
                    }
                }

                impl DerefMut for Mock {
                    fn deref_mut(&mut self) -> &mut Self::Target {
                        &mut self.state
                    }
                }

                impl Debug for Mock {
                    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                        f.debug_struct("Mock")
                            .field("mock_state", &self.mock_state)
                            .finish_non_exhaustive()
                    }
                }

                /// Tokens of the mocked methods.
                pub mod method {
                    #[allow(clippy::wildcard_imports)]
                    use super::*;

                    #( #method_tokens )*
                }

                #( #trait_impls )*
            }
        });
    }
}
