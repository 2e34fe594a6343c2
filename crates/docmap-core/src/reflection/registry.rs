// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory [`ReflectionProvider`] backed by [`ClassDescriptor`]s.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path
};

use serde::Deserialize;
use tracing::debug;

use super::{ClassDescriptor, FieldInfo, Reflect, ReflectionProvider};
use crate::{
    annotation::{ClassAnnotation, ClassAnnotationKind, FieldAnnotation, FieldAnnotationKind},
    error::{Error, Result}
};

/// One sidecar file: a single descriptor or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptorFile {
    One(Box<ClassDescriptor>),
    Many(Vec<ClassDescriptor>)
}

/// Registry of class descriptors keyed by fully-qualified name.
///
/// Inserting a descriptor under an existing name replaces it.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: BTreeMap<String, ClassDescriptor>
}

impl ClassRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a derived type and everything it depends on.
    pub fn register<T: Reflect>(&mut self) -> &mut Self {
        T::register(self);
        self
    }

    /// Insert a descriptor.
    pub fn insert(&mut self, descriptor: ClassDescriptor) -> &mut Self {
        self.classes.insert(descriptor.name.clone(), descriptor);
        self
    }

    /// Whether `class` is registered.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Descriptor of `class`.
    pub fn get(&self, class: &str) -> Result<&ClassDescriptor> {
        self.classes
            .get(class)
            .ok_or_else(|| Error::UnknownClass(class.to_owned()))
    }

    /// Registered class names, sorted.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Parse one sidecar document (a descriptor or a list) and insert it.
    pub fn load_json(&mut self, json: &str) -> Result<&mut Self> {
        match serde_json::from_str::<DescriptorFile>(json)? {
            DescriptorFile::One(descriptor) => {
                self.insert(*descriptor);
            }
            DescriptorFile::Many(descriptors) => {
                for descriptor in descriptors {
                    self.insert(descriptor);
                }
            }
        }
        Ok(self)
    }

    /// Build a registry from one sidecar document.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut registry = Self::new();
        registry.load_json(json)?;
        Ok(registry)
    }

    /// Load every `*.json` file directly under `root`, in file name order.
    pub fn load_dir(&mut self, root: impl AsRef<Path>) -> Result<&mut Self> {
        let root = root.as_ref();
        let mut paths = fs::read_dir(root)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        paths.retain(|path| path.extension().is_some_and(|ext| ext == "json"));
        paths.sort();

        for path in &paths {
            debug!(path = %path.display(), "loading class descriptors");
            self.load_json(&fs::read_to_string(path)?)?;
        }
        Ok(self)
    }

    /// `class` followed by its ancestors, nearest first.
    fn lineage(&self, class: &str) -> Result<Vec<&ClassDescriptor>> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(class);

        while let Some(name) = current {
            if !seen.insert(name) {
                return Err(Error::InheritanceCycle(name.to_owned()));
            }
            let descriptor = self.get(name)?;
            chain.push(descriptor);
            current = descriptor.parent.as_deref();
        }
        Ok(chain)
    }
}

impl ReflectionProvider for ClassRegistry {
    fn list_fields(&self, class: &str) -> Result<Vec<FieldInfo>> {
        let mut seen = HashSet::new();
        let mut fields = Vec::new();

        for descriptor in self.lineage(class)? {
            for field in &descriptor.fields {
                if seen.insert(field.name.as_str()) {
                    fields.push(FieldInfo {
                        name:            field.name.clone(),
                        declaring_class: descriptor.name.clone(),
                        visibility:      field.visibility.clone(),
                        declared_type:   field.declared_type.clone()
                    });
                }
            }
        }
        Ok(fields)
    }

    fn has_method(&self, class: &str, method: &str) -> Result<bool> {
        Ok(self
            .lineage(class)?
            .iter()
            .any(|descriptor| descriptor.methods.contains(method)))
    }

    fn field_annotation(
        &self,
        class: &str,
        field: &str,
        kind: FieldAnnotationKind
    ) -> Result<Option<FieldAnnotation>> {
        let declared = self
            .lineage(class)?
            .into_iter()
            .find_map(|descriptor| descriptor.fields.iter().find(|f| f.name == field));

        Ok(declared.and_then(|f| {
            f.annotations
                .iter()
                .find(|annotation| annotation.kind() == kind)
                .cloned()
        }))
    }

    fn class_annotation(
        &self,
        class: &str,
        kind: ClassAnnotationKind
    ) -> Result<Option<ClassAnnotation>> {
        Ok(self
            .get(class)?
            .annotation
            .as_ref()
            .filter(|annotation| annotation.kind() == kind)
            .cloned())
    }
}
