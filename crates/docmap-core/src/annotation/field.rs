// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Content field annotations.
//!
//! | Annotation | Attribute | Schema |
//! |------------|-----------|--------|
//! | [`Property`] | `#[property(type = "text")]` | `{type, ...options}` |
//! | [`Embedded`] | `#[embedded(class = Address)]` | target's `{type, properties}` |
//! | [`HashMapField`] | `#[hash_map]` | `{type: "nested", dynamic: true}` |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Annotation;

/// Scalar property mapped to a single schema field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Schema field name. Defaults to snake_case of the field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Engine field type, e.g. `text`, `keyword`, `long`.
    #[serde(rename = "type", default)]
    pub ty: String,

    /// Raw engine options, flattened into the schema node.
    #[serde(default)]
    pub options: Map<String, Value>
}

impl Property {
    /// Property of the given engine type.
    #[must_use]
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            name:    None,
            ty:      ty.into(),
            options: Map::new()
        }
    }

    /// Set an explicit schema name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the raw options.
    #[must_use]
    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = options;
        self
    }

    /// Add one raw option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl Annotation for Property {}

/// Field holding an object (or list of objects) described by another class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embedded {
    /// Fully-qualified name of the target class.
    pub class: String,

    /// Schema field name. Defaults to snake_case of the field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the field holds a collection of objects.
    #[serde(default)]
    pub multiple: bool,

    /// Raw engine options, flattened into the schema node.
    #[serde(default)]
    pub options: Map<String, Value>
}

impl Embedded {
    /// Embed the given class.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class:    class.into(),
            name:     None,
            multiple: false,
            options:  Map::new()
        }
    }

    /// Set an explicit schema name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark as a collection.
    #[must_use]
    pub const fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Replace the raw options.
    #[must_use]
    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = options;
        self
    }
}

impl Annotation for Embedded {
    // `multiple` only feeds the alias table.
    const HIDDEN: &'static [&'static str] = &["multiple"];
}

/// Open set of keys mapped as a dynamic nested object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HashMapField {
    /// Schema field name. Defaults to snake_case of the field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Raw engine options. A declared `type` or `dynamic` never survives.
    #[serde(default)]
    pub options: Map<String, Value>
}

impl HashMapField {
    /// Marker type recorded in alias entries.
    pub const ALIAS_TYPE: &'static str = "hash_map";

    /// Set an explicit schema name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the raw options.
    #[must_use]
    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = options;
        self
    }
}

impl Annotation for HashMapField {}
