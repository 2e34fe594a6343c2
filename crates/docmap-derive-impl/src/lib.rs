// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod document;

use proc_macro::TokenStream;

/// Derive macro describing a struct to the docmap mapping compiler.
///
/// # Overview
///
/// Generates an implementation of `docmap::Reflect`: the struct's
/// fully-qualified class name, a `ClassDescriptor` built from its fields and
/// attributes, and a `register` function that adds the struct, its parent and
/// every embedded struct to a `ClassRegistry`.
///
/// # Class Attributes
///
/// Configure the class using `#[document(...)]`:
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `index` | Root document stored in an index |
/// | `index(type = "..", options = "<json>")` | Root document with explicit type and root options |
/// | `object` | Embeddable, mapped as `object` |
/// | `nested` | Embeddable, mapped as `nested` |
/// | `extends = Parent` | Inherit fields and methods of another derived struct |
/// | `methods(getX, setX)` | Accessor methods for non-public fields |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[property(type = "..", name = "..", options = "<json>")]` | Plain schema field |
/// | `#[embedded(class = Target, name = "..", multiple, options = "<json>")]` | Embedded struct |
/// | `#[hash_map(name = "..", options = "<json>")]` | Open set of keys, always `{type: nested, dynamic: true}` |
/// | `#[id]` | `_id` meta field |
/// | `#[routing]` / `#[routing(required)]` | `_routing` meta field |
/// | `#[version]` | `_version` meta field |
///
/// Fields without any of these are not part of the document.
///
/// # Visibility
///
/// | Field | Access |
/// |-------|--------|
/// | `pub` | direct |
/// | `pub(crate)`, private | through `get`/`set` (or `is` for `bool`) methods listed in `methods(...)` |
/// | `pub(super)`, `pub(in ..)` | rejected when the mapping is compiled |
///
/// Every method named in `methods(...)` is referenced from the generated
/// code, so a misspelled or missing accessor fails to compile. Accessors must
/// not be generic.
///
/// # Generics
///
/// Lifetimes are supported. Type and const parameters are rejected: the class
/// name comes from the struct name alone, so every instantiation would share
/// one descriptor.
///
/// # Example
///
/// ```rust,ignore
/// use docmap::{ClassRegistry, Document, DocumentParser, Reflect};
///
/// #[derive(Document)]
/// #[document(object)]
/// pub struct Author {
///     #[property(type = "text")]
///     pub name: String,
/// }
///
/// #[derive(Document)]
/// #[document(index, methods(getSlug, setSlug))]
/// pub struct Post {
///     #[id]
///     pub id: String,
///
///     #[property(type = "text", options = r#"{"analyzer": "english"}"#)]
///     pub title: String,
///
///     #[property(type = "keyword")]
///     slug: String,
///
///     #[embedded(class = Author)]
///     pub author: Author,
/// }
///
/// #[allow(non_snake_case)]
/// impl Post {
///     pub fn getSlug(&self) -> &str { &self.slug }
///     pub fn setSlug(&mut self, slug: String) { self.slug = slug; }
/// }
///
/// let mut registry = ClassRegistry::new();
/// registry.register::<Post>();
///
/// let mapping = DocumentParser::new(registry).parse(Post::CLASS_NAME)?;
/// assert_eq!(mapping.document_type, "post");
/// ```
#[proc_macro_derive(
    Document,
    attributes(document, property, embedded, hash_map, id, routing, version)
)]
pub fn derive_document(input: TokenStream) -> TokenStream {
    document::derive(input)
}
