// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema properties and object mappings.
//!
//! # Node Assembly
//!
//! For every classified field, in order:
//!
//! 1. `node = annotation.dump()`
//! 2. `Embedded`: the target's `{type, properties}` is merged over `node`
//! 3. `options` are hoisted to the top level, overriding computed keys
//! 4. `HashMap`: `{type: "nested", dynamic: true}` is merged over everything
//! 5. `properties[name] = node`, last field wins on name collisions

use std::{collections::BTreeSet, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};

use super::{DocumentParser, enter};
use crate::{
    annotation::{ClassAnnotationKind, FieldAnnotation, Fragment, hoist_options, merge_recursive},
    error::{Accumulator, Error, Result},
    reflection::ReflectionProvider
};

/// Mapping of an embeddable class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMapping {
    /// `object` or `nested`.
    #[serde(rename = "type")]
    pub ty: String,

    /// Schema properties of the class.
    pub properties: Fragment
}

impl ObjectMapping {
    /// `{type, properties}` as a schema fragment.
    #[must_use]
    pub fn to_fragment(&self) -> Fragment {
        let mut fragment = Fragment::new();
        fragment.insert("type".into(), Value::String(self.ty.clone()));
        fragment.insert("properties".into(), Value::Object(self.properties.clone()));
        fragment
    }
}

/// Which fields [`DocumentParser::build_properties`] considers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldFilter {
    /// Every field.
    #[default]
    All,
    /// Every field except these.
    Exclude(BTreeSet<String>),
    /// Only these fields.
    Only(BTreeSet<String>)
}

impl FieldFilter {
    /// Filter from a name list and an include-only flag.
    pub fn new<I, S>(names: I, include_only: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        let names = names.into_iter().map(Into::into).collect();
        if include_only {
            Self::Only(names)
        } else {
            Self::Exclude(names)
        }
    }

    /// Whether the field named `name` passes.
    #[must_use]
    pub fn admits(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exclude(names) => !names.contains(name),
            Self::Only(names) => names.contains(name)
        }
    }
}

fn hash_map_schema() -> Fragment {
    let mut schema = Fragment::new();
    schema.insert("type".into(), Value::String("nested".into()));
    schema.insert("dynamic".into(), Value::Bool(true));
    schema
}

impl<P: ReflectionProvider> DocumentParser<P> {
    /// `{type, properties}` of an embeddable class, computed once and cached.
    ///
    /// # Errors
    ///
    /// [`Error::MissingObjectAnnotation`] when the class carries neither
    /// `ObjectType` nor `NestedType`, [`Error::EmbeddingCycle`] when it
    /// embeds itself.
    pub fn object_mapping(&mut self, class: &str) -> Result<Arc<ObjectMapping>> {
        self.resolve_object_mapping(class, &mut Vec::new())
    }

    /// Schema properties of `class`.
    pub fn build_properties(&mut self, class: &str, filter: &FieldFilter) -> Result<Fragment> {
        self.properties(class, filter, &mut Vec::new())
    }

    fn resolve_object_mapping(
        &mut self,
        class: &str,
        stack: &mut Vec<String>
    ) -> Result<Arc<ObjectMapping>> {
        if let Some(mapping) = self.cache.objects.get(class) {
            trace!(class, "object mapping cache hit");
            return Ok(Arc::clone(mapping));
        }

        let ty = self
            .object_type(class)?
            .ok_or_else(|| Error::MissingObjectAnnotation(class.to_owned()))?;

        enter(stack, class)?;
        let properties = self.properties(class, &FieldFilter::All, stack);
        stack.pop();

        let mapping = Arc::new(ObjectMapping {
            ty:         ty.to_owned(),
            properties: properties?
        });
        debug!(class, ty, properties = mapping.properties.len(), "compiled object mapping");
        self.cache
            .objects
            .insert(class.to_owned(), Arc::clone(&mapping));
        Ok(mapping)
    }

    fn object_type(&self, class: &str) -> Result<Option<&'static str>> {
        for kind in [ClassAnnotationKind::ObjectType, ClassAnnotationKind::NestedType] {
            if let Some(annotation) = self.provider.class_annotation(class, kind)? {
                return Ok(annotation.object_type());
            }
        }
        Ok(None)
    }

    fn properties(
        &mut self,
        class: &str,
        filter: &FieldFilter,
        stack: &mut Vec<String>
    ) -> Result<Fragment> {
        let mut errors = Accumulator::new();
        let mut schema = Fragment::new();

        let fields = self.fields(class)?;
        for field in fields.iter().filter(|field| filter.admits(&field.name)) {
            let Some(annotation) = errors.handle(self.classify(field)).flatten() else {
                continue;
            };

            let name = annotation.resolved_name(&field.name);
            let mut node = annotation.dump();

            if let FieldAnnotation::Embedded(embedded) = &annotation {
                match self.resolve_object_mapping(&embedded.class, stack) {
                    Ok(object) => merge_recursive(&mut node, object.to_fragment()),
                    Err(err) => {
                        errors.push(err);
                        continue;
                    }
                }
            }

            hoist_options(&mut node);

            if matches!(annotation, FieldAnnotation::HashMap(_)) {
                merge_recursive(&mut node, hash_map_schema());
            }

            if schema.insert(name.clone(), Value::Object(node)).is_some() {
                warn!(class, name = %name, field = %field.name, "schema name collision, last field wins");
            }
        }

        errors.finish_with(schema)
    }
}
