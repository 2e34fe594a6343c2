// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Reflect` implementation generation.
//!
//! For
//!
//! ```rust,ignore
//! #[derive(Document)]
//! #[document(index, methods(getSlug, setSlug))]
//! pub struct Post {
//!     #[property(type = "keyword")]
//!     slug: String,
//!     #[embedded(class = Author)]
//!     pub author: Author,
//! }
//! ```
//!
//! the macro generates
//!
//! ```rust,ignore
//! impl ::docmap::reflection::Reflect for Post {
//!     const CLASS_NAME: &'static str = concat!(module_path!(), "::", "Post");
//!
//!     fn descriptor() -> ClassDescriptor {
//!         let _ = Self::getSlug;
//!         let _ = Self::setSlug;
//!         ClassDescriptor::new(Self::CLASS_NAME)
//!             .with_annotation(ClassAnnotation::Index(Index::default()))
//!             .with_methods(["getSlug", "setSlug"])
//!             .with_field(FieldDescriptor::new("slug", Visibility::Private)...)
//!             .with_field(FieldDescriptor::new("author", Visibility::Public)...)
//!     }
//!
//!     fn register(registry: &mut ClassRegistry) {
//!         if registry.contains(Self::CLASS_NAME) {
//!             return;
//!         }
//!         registry.insert(Self::descriptor());
//!         <Author as Reflect>::register(registry);
//!     }
//! }
//! ```
//!
//! The struct is inserted before its dependencies so that a cycle of
//! embeddings stops at the first repeated class. The `let _ = Self::..`
//! lines make a method listed in `methods(...)` but never defined a compile
//! error at the listed name.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use super::parse::{DocumentDef, FieldDef};

/// Generate the `Reflect` implementation.
pub fn generate(document: &DocumentDef) -> TokenStream {
    let ident = &document.ident;
    let class_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = document.generics.split_for_impl();

    let parent = document.extends.as_ref().map(|parent| {
        quote! { .with_parent(<#parent as ::docmap::reflection::Reflect>::CLASS_NAME) }
    });
    let annotation = document.kind.to_tokens();
    let methods = (!document.methods.is_empty()).then(|| {
        let names = document.methods.iter().map(ToString::to_string);
        quote! { .with_methods([#(#names),*]) }
    });
    let method_checks = document
        .methods
        .iter()
        .map(|method| quote_spanned! { method.span()=> let _ = Self::#method; });
    let fields = document.fields.iter().map(FieldDef::to_tokens);
    let dependencies = document.dependencies();

    quote! {
        #[automatically_derived]
        impl #impl_generics ::docmap::reflection::Reflect for #ident #ty_generics #where_clause {
            const CLASS_NAME: &'static str =
                ::core::concat!(::core::module_path!(), "::", #class_name);

            fn descriptor() -> ::docmap::reflection::ClassDescriptor {
                #(#method_checks)*
                ::docmap::reflection::ClassDescriptor::new(
                    <Self as ::docmap::reflection::Reflect>::CLASS_NAME
                )
                #parent
                #annotation
                #methods
                #(.with_field(#fields))*
            }

            fn register(registry: &mut ::docmap::reflection::ClassRegistry) {
                if registry.contains(<Self as ::docmap::reflection::Reflect>::CLASS_NAME) {
                    return;
                }
                registry.insert(<Self as ::docmap::reflection::Reflect>::descriptor());
                #(<#dependencies as ::docmap::reflection::Reflect>::register(registry);)*
            }
        }
    }
}
