// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class introspection consumed by the mapping compiler.
//!
//! Rust has no runtime reflection, so classes are described up front by
//! [`ClassDescriptor`]s. They come either from `#[derive(Document)]`, through
//! the [`Reflect`] trait, or from JSON sidecar files loaded into a
//! [`ClassRegistry`].
//!
//! # Architecture
//!
//! ```text
//! reflection.rs (ReflectionProvider, Reflect)
//! ├── descriptor.rs - ClassDescriptor, FieldDescriptor, Visibility
//! └── registry.rs   - ClassRegistry (inheritance-aware provider)
//! ```
//!
//! The compiler depends only on [`ReflectionProvider`]; any other source of
//! class metadata can implement it.

mod descriptor;
mod registry;

pub use descriptor::{ClassDescriptor, FieldDescriptor, FieldInfo, Visibility, short_name};
pub use registry::ClassRegistry;

use crate::{
    annotation::{ClassAnnotation, ClassAnnotationKind, FieldAnnotation, FieldAnnotationKind},
    error::Result
};

/// Source of class metadata.
pub trait ReflectionProvider {
    /// Fields of `class`, child declarations first, then parent-only fields.
    ///
    /// A field redeclared by a child hides the parent declaration.
    fn list_fields(&self, class: &str) -> Result<Vec<FieldInfo>>;

    /// Whether `class` or one of its parents declares `method`.
    fn has_method(&self, class: &str, method: &str) -> Result<bool>;

    /// Annotation of the given kind on a field, looked up from `class`
    /// (normally the declaring class) upwards.
    fn field_annotation(
        &self,
        class: &str,
        field: &str,
        kind: FieldAnnotationKind
    ) -> Result<Option<FieldAnnotation>>;

    /// Annotation of the given kind on `class` itself.
    fn class_annotation(
        &self,
        class: &str,
        kind: ClassAnnotationKind
    ) -> Result<Option<ClassAnnotation>>;
}

/// Types that can describe themselves to a [`ClassRegistry`].
///
/// Implemented by `#[derive(Document)]`.
pub trait Reflect {
    /// Fully-qualified class name.
    const CLASS_NAME: &'static str;

    /// Descriptor of this class alone.
    fn descriptor() -> ClassDescriptor;

    /// Register this class and every class it depends on.
    ///
    /// Implementations must return early when the class is already present
    /// so that cyclic embeddings terminate.
    fn register(registry: &mut ClassRegistry) {
        if !registry.contains(Self::CLASS_NAME) {
            registry.insert(Self::descriptor());
        }
    }
}
