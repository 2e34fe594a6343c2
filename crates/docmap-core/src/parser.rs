// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapping compiler.
//!
//! [`DocumentParser`] walks a document class through a
//! [`ReflectionProvider`] and produces three artifacts:
//!
//! | Output | Method | Consumer |
//! |--------|--------|----------|
//! | Index mapping | [`build_properties`](DocumentParser::build_properties), [`object_mapping`](DocumentParser::object_mapping) | index creation |
//! | Alias table | [`aliases`](DocumentParser::aliases) | object/document conversion |
//! | Analyzer set | [`analyzers`](DocumentParser::analyzers) | index settings |
//!
//! [`parse`](DocumentParser::parse) bundles all of them for a root document.
//!
//! # Architecture
//!
//! ```text
//! parser.rs (DocumentParser, DocumentMapping)
//! ├── alias.rs      - alias table resolution, meta fields
//! ├── accessors.rs  - getter/setter inference
//! ├── properties.rs - object mappings and schema properties
//! ├── analyzers.rs  - analyzer harvesting
//! └── cache.rs      - per-class memoization
//! ```
//!
//! # Field Classification
//!
//! Each field is classified by the first annotation found in the order
//! `Property`, `Embedded`, `HashMap`. When meta fields are collected, the
//! order continues with `Id`, `Routing`, `Version`. Fields matching nothing
//! are not part of the document.
//!
//! # Caching
//!
//! Field lists, alias tables and object mappings are computed at most once
//! per class and live as long as the parser. Create a new parser to pick up
//! changed descriptors.

mod accessors;
mod alias;
mod analyzers;
mod cache;
mod properties;

use std::{collections::BTreeSet, sync::Arc};

pub use accessors::Accessors;
pub use alias::{AliasEntry, AliasTable, MetaFields, PropertyType};
pub use cache::ParserCache;
pub use properties::{FieldFilter, ObjectMapping};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    annotation::{
        Annotation, ClassAnnotation, ClassAnnotationKind, FieldAnnotation, FieldAnnotationKind,
        Fragment, hoist_options
    },
    caser::to_snake_case,
    error::{Error, Result},
    reflection::{FieldInfo, ReflectionProvider, short_name}
};

/// Everything compiled for one root document class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMapping {
    /// Fully-qualified class name.
    pub class: String,

    /// Short class name.
    pub short_name: String,

    /// Document type: `Index.type` or snake_case of the short name.
    pub document_type: String,

    /// Root mapping: `properties`, meta field settings and root options.
    pub mapping: Fragment,

    /// Alias table including meta field markers.
    pub aliases: AliasTable,

    /// Meta field settings keyed by meta field name.
    pub meta_fields: MetaFields,

    /// Analyzers referenced anywhere in the document.
    pub analyzers: BTreeSet<String>,

    /// Embedded classes reachable from the document.
    pub objects: BTreeSet<String>
}

/// Compiles class descriptions into index mappings and alias tables.
///
/// # Example
///
/// ```rust
/// use docmap_core::{
///     annotation::{ClassAnnotation, Property},
///     parser::DocumentParser,
///     reflection::{ClassDescriptor, ClassRegistry, FieldDescriptor}
/// };
///
/// let mut registry = ClassRegistry::new();
/// registry.insert(
///     ClassDescriptor::new("app::Post")
///         .with_annotation(ClassAnnotation::Index(Default::default()))
///         .with_field(FieldDescriptor::public("title").with_annotation(Property::new("text")))
/// );
///
/// let mut parser = DocumentParser::new(registry);
/// let document = parser.parse("app::Post").unwrap();
/// assert_eq!(document.document_type, "post");
/// assert_eq!(document.mapping["properties"]["title"]["type"], "text");
/// ```
#[derive(Debug)]
pub struct DocumentParser<P> {
    provider: P,
    cache:    ParserCache
}

impl<P: ReflectionProvider> DocumentParser<P> {
    /// Parser with an empty cache.
    pub fn new(provider: P) -> Self {
        Self::with_cache(provider, ParserCache::new())
    }

    /// Parser reusing a previously populated cache.
    pub const fn with_cache(provider: P, cache: ParserCache) -> Self {
        Self {
            provider,
            cache
        }
    }

    /// Underlying reflection provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Per-class cache.
    pub const fn cache(&self) -> &ParserCache {
        &self.cache
    }

    /// Split into provider and cache.
    pub fn into_parts(self) -> (P, ParserCache) {
        (self.provider, self.cache)
    }

    /// Compile a root document class.
    ///
    /// # Errors
    ///
    /// [`Error::NotADocument`] when the class lacks `Index`, plus every
    /// configuration error of the class tree.
    pub fn parse(&mut self, class: &str) -> Result<DocumentMapping> {
        let index = match self
            .provider
            .class_annotation(class, ClassAnnotationKind::Index)?
        {
            Some(ClassAnnotation::Index(index)) => index,
            _ => return Err(Error::NotADocument(class.to_owned()))
        };

        let (aliases, meta_fields) = self.aliases_with_meta_fields(class)?;
        let properties = self.build_properties(class, &FieldFilter::All)?;
        let analyzers = self.analyzers(class)?;
        let objects = self.objects(class)?;

        let mut mapping = Fragment::new();
        mapping.insert("properties".into(), Value::Object(properties));
        for (name, settings) in &meta_fields {
            if !settings.is_empty() {
                mapping.insert(name.clone(), Value::Object(settings.clone()));
            }
        }
        let mut root_options = index.dump(&[]);
        hoist_options(&mut root_options);
        mapping.extend(root_options);

        let short = short_name(class).to_owned();
        let document_type = index
            .document_type
            .clone()
            .unwrap_or_else(|| to_snake_case(&short));

        debug!(
            class,
            document_type = %document_type,
            aliases = aliases.len(),
            analyzers = analyzers.len(),
            "compiled document mapping"
        );

        Ok(DocumentMapping {
            class: class.to_owned(),
            short_name: short,
            document_type,
            mapping,
            aliases,
            meta_fields,
            analyzers,
            objects
        })
    }

    /// Embedded classes reachable from `class`, each listed once.
    pub fn objects(&mut self, class: &str) -> Result<BTreeSet<String>> {
        let mut objects = BTreeSet::new();
        self.collect_objects(class, &mut objects)?;
        Ok(objects)
    }

    fn collect_objects(&mut self, class: &str, objects: &mut BTreeSet<String>) -> Result<()> {
        for field in self.fields(class)?.iter() {
            if let Some(FieldAnnotation::Embedded(embedded)) = self.classify(field)?
                && objects.insert(embedded.class.clone())
            {
                self.collect_objects(&embedded.class, objects)?;
            }
        }
        Ok(())
    }

    /// Cached field list of `class`.
    fn fields(&mut self, class: &str) -> Result<Arc<[FieldInfo]>> {
        if let Some(fields) = self.cache.fields.get(class) {
            return Ok(Arc::clone(fields));
        }
        let fields: Arc<[FieldInfo]> = self.provider.list_fields(class)?.into();
        self.cache
            .fields
            .insert(class.to_owned(), Arc::clone(&fields));
        Ok(fields)
    }

    /// First content annotation of a field, in priority order.
    fn classify(&self, field: &FieldInfo) -> Result<Option<FieldAnnotation>> {
        self.first_annotation(field, &FieldAnnotationKind::CONTENT)
    }

    /// First meta annotation of a field, in priority order.
    fn classify_meta(&self, field: &FieldInfo) -> Result<Option<FieldAnnotation>> {
        self.first_annotation(field, &FieldAnnotationKind::META)
    }

    fn first_annotation(
        &self,
        field: &FieldInfo,
        kinds: &[FieldAnnotationKind]
    ) -> Result<Option<FieldAnnotation>> {
        for &kind in kinds {
            if let Some(annotation) =
                self.provider
                    .field_annotation(&field.declaring_class, &field.name, kind)?
            {
                return Ok(Some(annotation));
            }
        }
        Ok(None)
    }
}

/// Push `class` on the resolution stack, failing if it is already there.
fn enter(stack: &mut Vec<String>, class: &str) -> Result<()> {
    if let Some(start) = stack.iter().position(|c| c == class) {
        let mut path = stack[start..].to_vec();
        path.push(class.to_owned());
        return Err(Error::EmbeddingCycle {
            path
        });
    }
    stack.push(class.to_owned());
    Ok(())
}

#[cfg(test)]
mod tests;
