// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class-level annotations. A class carries at most one of them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Annotation;

/// Root document stored in an index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Index {
    /// Document type. Defaults to snake_case of the short class name.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    /// Raw root-level mapping options, e.g. `dynamic`.
    #[serde(default)]
    pub options: Map<String, Value>
}

impl Index {
    /// Set the document type.
    #[must_use]
    pub fn with_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = Some(document_type.into());
        self
    }

    /// Replace the root-level options.
    #[must_use]
    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = options;
        self
    }
}

impl Annotation for Index {
    const HIDDEN: &'static [&'static str] = &["type"];
}

/// Kind of class annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassAnnotationKind {
    /// [`ClassAnnotation::Index`].
    Index,
    /// [`ClassAnnotation::ObjectType`].
    ObjectType,
    /// [`ClassAnnotation::NestedType`].
    NestedType
}

/// Annotation attached to a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "annotation", rename_all = "snake_case")]
pub enum ClassAnnotation {
    /// Root document.
    Index(Index),
    /// Single embedded object, mapped as `object`.
    ObjectType,
    /// Embedded object list, mapped as `nested`.
    NestedType
}

impl ClassAnnotation {
    /// Kind of this annotation.
    #[must_use]
    pub const fn kind(&self) -> ClassAnnotationKind {
        match self {
            Self::Index(_) => ClassAnnotationKind::Index,
            Self::ObjectType => ClassAnnotationKind::ObjectType,
            Self::NestedType => ClassAnnotationKind::NestedType
        }
    }

    /// Engine type of an embeddable class: `object` or `nested`.
    #[must_use]
    pub const fn object_type(&self) -> Option<&'static str> {
        match self {
            Self::Index(_) => None,
            Self::ObjectType => Some("object"),
            Self::NestedType => Some("nested")
        }
    }
}
