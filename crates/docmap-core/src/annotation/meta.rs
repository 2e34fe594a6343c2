// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Meta field annotations: document identity rather than content.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Annotation, FieldAnnotationKind};

/// Which meta field an annotation marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaKind {
    /// `_id`.
    Id,
    /// `_routing`.
    Routing,
    /// `_version`.
    Version
}

impl MetaKind {
    /// Engine name of the meta field.
    #[must_use]
    pub const fn engine_name(self) -> &'static str {
        match self {
            Self::Id => "_id",
            Self::Routing => "_routing",
            Self::Version => "_version"
        }
    }

    /// Matching lookup kind.
    #[must_use]
    pub const fn annotation_kind(self) -> FieldAnnotationKind {
        match self {
            Self::Id => FieldAnnotationKind::Id,
            Self::Routing => FieldAnnotationKind::Routing,
            Self::Version => FieldAnnotationKind::Version
        }
    }
}

/// Meta field annotation (`#[id]`, `#[routing]`, `#[version]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaField {
    /// Meta field kind.
    pub kind: MetaKind,

    /// Explicit name overriding [`MetaKind::engine_name`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Engine-specific settings, independent of [`Annotation::dump`].
    #[serde(default)]
    pub settings: Map<String, Value>
}

impl MetaField {
    /// `_id` marker.
    #[must_use]
    pub fn id() -> Self {
        Self::of(MetaKind::Id)
    }

    /// `_routing` marker; `required` is reported in the settings.
    #[must_use]
    pub fn routing(required: bool) -> Self {
        let mut field = Self::of(MetaKind::Routing);
        field.settings.insert("required".into(), Value::Bool(required));
        field
    }

    /// `_version` marker.
    #[must_use]
    pub fn version() -> Self {
        Self::of(MetaKind::Version)
    }

    fn of(kind: MetaKind) -> Self {
        Self {
            kind,
            name: None,
            settings: Map::new()
        }
    }

    /// Set an explicit name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Explicit name, or the engine default for the kind.
    #[must_use]
    pub fn get_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.kind.engine_name().to_owned())
    }

    /// Engine settings for this meta field.
    #[must_use]
    pub const fn get_settings(&self) -> &Map<String, Value> {
        &self.settings
    }
}

impl Annotation for MetaField {
    const HIDDEN: &'static [&'static str] = &["kind"];
}
