// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Document derive macro.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator, DocumentDef)
//! ├── class.rs      - #[document(...)] via darling
//! ├── field.rs      - #[property], #[embedded], #[hash_map], meta markers
//! ├── options.rs    - options = "<json>" validation and re-emission
//! └── visibility.rs - Rust visibility to accessor visibility
//! ```
//!
//! # Data Structures
//!
//! ```text
//! DocumentDef
//! ├── ident: Ident            (struct name)
//! ├── generics: Generics
//! ├── kind: ClassKind         (Index, Object, Nested, Plain)
//! ├── extends: Option<Path>   (parent struct)
//! ├── methods: Vec<Ident>     (declared accessors)
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident
//!         ├── declared_type: String
//!         ├── visibility: FieldVisibility
//!         └── annotations: Vec<AnnotationDef>
//! ```

mod class;
mod field;
mod options;
mod visibility;

pub use class::{ClassKind, DocumentAttrs};
use darling::FromDeriveInput;
pub use field::{AnnotationDef, FieldDef};
use syn::{DeriveInput, GenericParam, Generics, Ident, Path};

/// Fully parsed document struct.
#[derive(Debug)]
pub struct DocumentDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Class annotation.
    pub kind: ClassKind,

    /// Parent struct.
    pub extends: Option<Path>,

    /// Accessor methods listed in `methods(...)`.
    pub methods: Vec<Ident>,

    /// Named fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl DocumentDef {
    /// Parse a derive input.
    ///
    /// # Errors
    ///
    /// Container attribute errors, conflicting class kinds, type or const
    /// parameters and every malformed field attribute, accumulated.
    ///
    /// Type and const parameters are rejected because a class name is
    /// derived from the struct name alone; lifetimes are allowed.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = DocumentAttrs::from_derive_input(input)?;

        let syn::Data::Struct(data) = &input.data else {
            return Err(
                darling::Error::custom("Document can only be derived for structs")
                    .with_span(&input.ident)
            );
        };
        let syn::Fields::Named(named) = &data.fields else {
            return Err(
                darling::Error::custom("Document requires named fields").with_span(&input.ident)
            );
        };

        let mut errors = darling::Error::accumulator();
        for param in &attrs.generics.params {
            let ident = match param {
                GenericParam::Type(param) => &param.ident,
                GenericParam::Const(param) => &param.ident,
                GenericParam::Lifetime(_) => continue
            };
            errors.push(
                darling::Error::custom("Document does not support type or const parameters")
                    .with_span(ident)
            );
        }
        let kind = errors.handle(attrs.kind());
        let methods = errors.handle(attrs.method_idents());
        let fields: Vec<FieldDef> = named
            .named
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field)))
            .collect();

        errors.finish()?;
        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            kind: kind.unwrap_or(ClassKind::Plain),
            extends: attrs.extends,
            methods: methods.unwrap_or_default(),
            fields
        })
    }

    /// Structs this one depends on: the parent, then embedded targets.
    pub fn dependencies(&self) -> Vec<&Path> {
        let mut dependencies: Vec<&Path> = self.extends.iter().collect();
        for path in self
            .fields
            .iter()
            .flat_map(|field| &field.annotations)
            .filter_map(AnnotationDef::embedded_class)
        {
            if !dependencies.contains(&path) {
                dependencies.push(path);
            }
        }
        dependencies
    }
}
