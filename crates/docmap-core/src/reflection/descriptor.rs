// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static class descriptions.
//!
//! A descriptor serializes to the sidecar JSON format:
//!
//! ```json
//! {
//!   "name": "app::User",
//!   "parent": "app::Base",
//!   "annotation": {"annotation": "index", "type": "user"},
//!   "methods": ["getEmail", "setEmail"],
//!   "fields": [
//!     {
//!       "name": "email",
//!       "visibility": "private",
//!       "declared_type": "String",
//!       "annotations": [{"annotation": "property", "type": "keyword"}]
//!     }
//!   ]
//! }
//! ```

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::annotation::{ClassAnnotation, FieldAnnotation};

/// Field visibility as seen by accessor inference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Readable and writable directly.
    Public,
    /// Crate-visible; accessed through getter/setter.
    Protected,
    /// Accessed through getter/setter.
    #[default]
    Private,
    /// Any other scope, e.g. `pub(super)`. Not mappable.
    Restricted(String)
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Protected => f.write_str("protected"),
            Self::Private => f.write_str("private"),
            Self::Restricted(scope) => write!(f, "restricted({scope})")
        }
    }
}

/// Declared field of a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared.
    pub name: String,

    /// Field visibility.
    #[serde(default)]
    pub visibility: Visibility,

    /// Declared type, if known. `bool`/`boolean` enable is-getters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<String>,

    /// Annotations in declaration order.
    #[serde(default)]
    pub annotations: Vec<FieldAnnotation>
}

impl FieldDescriptor {
    /// Field without annotations.
    #[must_use]
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            declared_type: None,
            annotations: Vec::new()
        }
    }

    /// Public field.
    #[must_use]
    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }

    /// Private field.
    #[must_use]
    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Private)
    }

    /// Set the declared type.
    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.declared_type = Some(ty.into());
        self
    }

    /// Attach an annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<FieldAnnotation>) -> Self {
        self.annotations.push(annotation.into());
        self
    }
}

/// Everything known about one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Fully-qualified class name.
    pub name: String,

    /// Parent class whose fields and methods are inherited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Class-level annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<ClassAnnotation>,

    /// Fields declared by this class.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Methods declared by this class.
    #[serde(default)]
    pub methods: BTreeSet<String>
}

impl ClassDescriptor {
    /// Empty descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            parent:     None,
            annotation: None,
            fields:     Vec::new(),
            methods:    BTreeSet::new()
        }
    }

    /// Set the parent class.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the class annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: ClassAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Add a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Add methods.
    #[must_use]
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.methods.extend(methods.into_iter().map(Into::into));
        self
    }

    /// Last path segment of the class name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        short_name(&self.name)
    }
}

/// Last segment of a `::`, `\` or `.` separated class name.
#[must_use]
pub fn short_name(class: &str) -> &str {
    class
        .rsplit(|c| c == ':' || c == '\\' || c == '.')
        .next()
        .unwrap_or(class)
}

/// Field as returned by [`ReflectionProvider::list_fields`](super::ReflectionProvider::list_fields).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field name.
    pub name:            String,
    /// Class that declares the field.
    pub declaring_class: String,
    /// Field visibility.
    pub visibility:      Visibility,
    /// Declared type, if known.
    pub declared_type:   Option<String>
}

impl FieldInfo {
    /// Whether the declared type is boolean.
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self.declared_type.as_deref(), Some("bool" | "boolean"))
    }
}
