// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `index` / `index(type = "..", options = "..")` | Root document |
//! | `object` | Embeddable as a single object |
//! | `nested` | Embeddable as a nested collection |
//! | `extends = Parent` | Inherit fields and methods of `Parent` |
//! | `methods(getX, setX)` | Accessor methods the struct provides |
//!
//! `index`, `object` and `nested` are mutually exclusive. A struct with none
//! of them can still serve as a parent through `extends`. Every name in
//! `methods(...)` must be a non-generic associated function of the struct;
//! the generated code refers to each one, so a missing method fails to
//! compile.

use darling::{
    FromDeriveInput, FromMeta,
    util::{Override, PathList}
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Ident};

use super::options::RawOptions;

/// Arguments of `index(...)`.
#[derive(Debug, Clone, Default, FromMeta)]
pub struct IndexAttrs {
    /// Explicit document type.
    #[darling(rename = "type")]
    pub document_type: Option<String>,

    /// Root-level mapping options.
    #[darling(default)]
    pub options: RawOptions
}

/// Raw `#[document(...)]` attributes.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(document))]
pub struct DocumentAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// `index` or `index(...)`.
    #[darling(default)]
    pub index: Option<Override<IndexAttrs>>,

    /// `object`.
    #[darling(default)]
    pub object: bool,

    /// `nested`.
    #[darling(default)]
    pub nested: bool,

    /// `extends = Parent`.
    #[darling(default)]
    pub extends: Option<syn::Path>,

    /// `methods(...)`.
    #[darling(default)]
    pub methods: PathList
}

/// Class annotation of a derived struct.
#[derive(Debug, Clone)]
pub enum ClassKind {
    /// `index`.
    Index(IndexAttrs),
    /// `object`.
    Object,
    /// `nested`.
    Nested,
    /// No class annotation.
    Plain
}

impl DocumentAttrs {
    /// Resolve the class kind, rejecting conflicting markers.
    pub fn kind(&self) -> darling::Result<ClassKind> {
        let mut kinds = Vec::new();
        if let Some(index) = &self.index {
            kinds.push(ClassKind::Index(index.clone().unwrap_or_default()));
        }
        if self.object {
            kinds.push(ClassKind::Object);
        }
        if self.nested {
            kinds.push(ClassKind::Nested);
        }

        if kinds.len() > 1 {
            return Err(darling::Error::custom(
                "a document can be only one of `index`, `object` or `nested`"
            )
            .with_span(&self.ident));
        }
        Ok(kinds.pop().unwrap_or(ClassKind::Plain))
    }

    /// Methods listed in `methods(...)`.
    ///
    /// # Errors
    ///
    /// Every entry that is a path rather than a plain method name.
    pub fn method_idents(&self) -> darling::Result<Vec<Ident>> {
        let mut errors = darling::Error::accumulator();
        let idents = self
            .methods
            .iter()
            .filter_map(|path| {
                errors.handle(path.get_ident().cloned().ok_or_else(|| {
                    darling::Error::custom("expected a method name").with_span(path)
                }))
            })
            .collect();
        errors.finish_with(idents)
    }
}

impl ClassKind {
    /// Builder call attaching the class annotation, empty for plain classes.
    pub fn to_tokens(&self) -> TokenStream {
        let annotation = match self {
            Self::Index(index) => {
                let with_type = index
                    .document_type
                    .as_ref()
                    .map(|ty| quote! { .with_type(#ty) });
                let with_options = (!index.options.is_empty()).then(|| {
                    let options = index.options.to_tokens();
                    quote! { .with_options(#options) }
                });
                quote! {
                    ::docmap::annotation::ClassAnnotation::Index(
                        ::docmap::annotation::Index::default() #with_type #with_options
                    )
                }
            }
            Self::Object => quote! { ::docmap::annotation::ClassAnnotation::ObjectType },
            Self::Nested => quote! { ::docmap::annotation::ClassAnnotation::NestedType },
            Self::Plain => return TokenStream::new()
        };
        quote! { .with_annotation(#annotation) }
    }
}
