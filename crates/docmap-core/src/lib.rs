// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime for docmap.
//!
//! Compiles annotated document classes into search-engine index mappings,
//! alias tables for object/document conversion, and the set of analyzers a
//! mapping depends on. Most users go through the `docmap` facade crate and
//! `#[derive(Document)]`; this crate also works standalone with hand-written
//! or JSON-loaded descriptors.
//!
//! # Overview
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`caser`] | snake/camel/Pascal case conversion |
//! | [`annotation`] | `Property`, `Embedded`, `HashMapField`, meta fields, `Index` |
//! | [`reflection`] | [`ReflectionProvider`], [`ClassRegistry`], [`Reflect`] |
//! | [`parser`] | [`DocumentParser`], the mapping compiler |
//! | [`collector`] | [`MetadataCollector`], document type lookup |
//! | [`manager`] | [`ManagerFactory`], [`ManagerRegistry`], configuration |
//! | [`error`] | [`Error`], [`Result`] |
//!
//! # Usage
//!
//! ```rust
//! use docmap_core::prelude::*;
//!
//! let mut registry = ClassRegistry::new();
//! registry
//!     .insert(
//!         ClassDescriptor::new("shop::Product")
//!             .with_annotation(ClassAnnotation::Index(Index::default()))
//!             .with_field(FieldDescriptor::public("name").with_annotation(Property::new("text")))
//!             .with_field(
//!                 FieldDescriptor::public("brand").with_annotation(Embedded::new("shop::Brand"))
//!             )
//!     )
//!     .insert(
//!         ClassDescriptor::new("shop::Brand")
//!             .with_annotation(ClassAnnotation::ObjectType)
//!             .with_field(FieldDescriptor::public("label").with_annotation(Property::new("keyword")))
//!     );
//!
//! let mut parser = DocumentParser::new(registry);
//! let document = parser.parse("shop::Product")?;
//!
//! assert_eq!(document.document_type, "product");
//! assert_eq!(document.mapping["properties"]["brand"]["type"], "object");
//! assert_eq!(document.aliases["brand"].namespace.as_deref(), Some("shop::Brand"));
//! # Ok::<(), docmap_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
pub mod caser;
pub mod collector;
pub mod error;
pub mod manager;
pub mod parser;
pub mod prelude;
pub mod reflection;

pub use collector::{Documents, MetadataCollector};
pub use error::{Error, Result};
pub use manager::{
    AnalysisSettings, ConnectionConfig, DocmapConfig, Manager, ManagerConfig, ManagerFactory,
    ManagerRegistry, Repository
};
pub use parser::{DocumentMapping, DocumentParser};
pub use reflection::{ClassRegistry, Reflect, ReflectionProvider};
/// Re-export serde_json for generated code.
pub use serde_json;
