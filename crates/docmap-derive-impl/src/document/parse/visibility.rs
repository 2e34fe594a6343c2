// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust field visibility to accessor visibility.
//!
//! | Rust | Descriptor |
//! |------|------------|
//! | `pub` | `Public` |
//! | `pub(crate)` | `Protected` |
//! | private, `pub(self)` | `Private` |
//! | `pub(super)`, `pub(in path)` | `Restricted`, rejected when compiled |

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::Visibility;

/// Accessor visibility of a derived field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldVisibility {
    /// Direct access.
    Public,
    /// Crate-visible.
    Protected,
    /// Module-private.
    Private,
    /// Any other scope, as written.
    Restricted(String)
}

impl FieldVisibility {
    /// Classify a syn visibility.
    pub fn from_syn(vis: &Visibility) -> Self {
        match vis {
            Visibility::Public(_) => Self::Public,
            Visibility::Inherited => Self::Private,
            Visibility::Restricted(restricted) if restricted.in_token.is_none() => {
                if restricted.path.is_ident("crate") {
                    Self::Protected
                } else if restricted.path.is_ident("self") {
                    Self::Private
                } else {
                    Self::Restricted(restricted.path.to_token_stream().to_string())
                }
            }
            Visibility::Restricted(restricted) => Self::Restricted(format!(
                "in {}",
                restricted.path.to_token_stream().to_string().replace(' ', "")
            ))
        }
    }

    /// Expression evaluating to `docmap::reflection::Visibility`.
    pub fn to_tokens(&self) -> TokenStream {
        match self {
            Self::Public => quote! { ::docmap::reflection::Visibility::Public },
            Self::Protected => quote! { ::docmap::reflection::Visibility::Protected },
            Self::Private => quote! { ::docmap::reflection::Visibility::Private },
            Self::Restricted(scope) => quote! {
                ::docmap::reflection::Visibility::Restricted(::std::string::String::from(#scope))
            }
        }
    }
}
