// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotation model: typed descriptors for field and class metadata.
//!
//! # Architecture
//!
//! ```text
//! annotation.rs (dump contract, kinds)
//! ├── field.rs  - Property, Embedded, HashMapField
//! ├── meta.rs   - MetaField (Id, Routing, Version)
//! └── class.rs  - Index, ObjectType, NestedType
//! ```
//!
//! # Dump Contract
//!
//! Every annotation turns into a flat schema fragment through
//! [`Annotation::dump`]:
//!
//! | Step | Effect |
//! |------|--------|
//! | 1 | Take every declared attribute |
//! | 2 | Drop falsy values (`""`, `null`, `[]`, `{}`, `0`), keep all booleans |
//! | 3 | Remove `class`, `name`, kind-specific internals and caller excludes |
//! | 4 | Re-key attribute names through [`to_snake_case`] |

mod class;
mod field;
mod meta;

pub use class::{ClassAnnotation, ClassAnnotationKind, Index};
pub use field::{Embedded, HashMapField, Property};
pub use meta::{MetaField, MetaKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::caser::to_snake_case;

/// Attributes no annotation ever dumps.
pub const INTERNAL_KEYS: &[&str] = &["class", "name"];

/// Key whose contents are hoisted into the surrounding schema node.
pub const OPTIONS_KEY: &str = "options";

/// Schema fragment produced by [`Annotation::dump`].
pub type Fragment = Map<String, Value>;

/// Shared behavior of all annotation kinds.
pub trait Annotation: Serialize {
    /// Kind-specific attributes excluded from [`dump`](Self::dump) in addition
    /// to [`INTERNAL_KEYS`].
    const HIDDEN: &'static [&'static str] = &[];

    /// Produce the normalized schema fragment for this annotation.
    fn dump(&self, exclude: &[&str]) -> Fragment {
        let Ok(Value::Object(attributes)) = serde_json::to_value(self) else {
            return Fragment::new();
        };

        attributes
            .into_iter()
            .filter(|(_, value)| !is_falsy(value))
            .filter(|(key, _)| {
                let key = key.as_str();
                !INTERNAL_KEYS.contains(&key) && !Self::HIDDEN.contains(&key) && !exclude.contains(&key)
            })
            .map(|(key, value)| (to_snake_case(&key), value))
            .collect()
    }
}

/// Falsy test used by [`Annotation::dump`]. Booleans are never falsy.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(_) => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty()
    }
}

/// Move the contents of `options` to the top level of `node`.
///
/// Raw options override computed keys on collision; the `options` key itself
/// is removed.
pub fn hoist_options(node: &mut Fragment) {
    if let Some(Value::Object(options)) = node.remove(OPTIONS_KEY) {
        node.extend(options);
    }
}

/// Recursively merge `overlay` into `base`; `overlay` wins on scalar keys.
pub fn merge_recursive(base: &mut Fragment, overlay: Fragment) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_recursive(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Kind of field annotation, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldAnnotationKind {
    /// [`Property`].
    Property,
    /// [`Embedded`].
    Embedded,
    /// [`HashMapField`].
    HashMap,
    /// [`MetaField`] of kind [`MetaKind::Id`].
    Id,
    /// [`MetaField`] of kind [`MetaKind::Routing`].
    Routing,
    /// [`MetaField`] of kind [`MetaKind::Version`].
    Version
}

impl FieldAnnotationKind {
    /// Content kinds, tried first to last.
    pub const CONTENT: [Self; 3] = [Self::Property, Self::Embedded, Self::HashMap];

    /// Meta kinds, tried first to last when collecting meta fields.
    pub const META: [Self; 3] = [Self::Id, Self::Routing, Self::Version];
}

/// Any annotation that can be attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "annotation", rename_all = "snake_case")]
pub enum FieldAnnotation {
    /// Scalar property.
    Property(Property),
    /// Embedded object or nested object list.
    Embedded(Embedded),
    /// Open set of keys.
    HashMap(HashMapField),
    /// Document identity metadata.
    Meta(MetaField)
}

impl FieldAnnotation {
    /// Kind of this annotation.
    #[must_use]
    pub const fn kind(&self) -> FieldAnnotationKind {
        match self {
            Self::Property(_) => FieldAnnotationKind::Property,
            Self::Embedded(_) => FieldAnnotationKind::Embedded,
            Self::HashMap(_) => FieldAnnotationKind::HashMap,
            Self::Meta(meta) => meta.kind.annotation_kind()
        }
    }

    /// Schema name: explicit, or snake_case of the field name.
    #[must_use]
    pub fn resolved_name(&self, field: &str) -> String {
        let explicit = match self {
            Self::Property(a) => a.name.as_deref(),
            Self::Embedded(a) => a.name.as_deref(),
            Self::HashMap(a) => a.name.as_deref(),
            Self::Meta(a) => return a.get_name()
        };
        explicit.map_or_else(|| to_snake_case(field), str::to_owned)
    }

    /// Schema fragment of a content annotation. Meta fields have none.
    #[must_use]
    pub fn dump(&self) -> Fragment {
        match self {
            Self::Property(a) => a.dump(&[]),
            Self::Embedded(a) => a.dump(&[]),
            Self::HashMap(a) => a.dump(&[]),
            Self::Meta(a) => a.dump(&[])
        }
    }
}

impl From<Property> for FieldAnnotation {
    fn from(value: Property) -> Self {
        Self::Property(value)
    }
}

impl From<Embedded> for FieldAnnotation {
    fn from(value: Embedded) -> Self {
        Self::Embedded(value)
    }
}

impl From<HashMapField> for FieldAnnotation {
    fn from(value: HashMapField) -> Self {
        Self::HashMap(value)
    }
}

impl From<MetaField> for FieldAnnotation {
    fn from(value: MetaField) -> Self {
        Self::Meta(value)
    }
}
