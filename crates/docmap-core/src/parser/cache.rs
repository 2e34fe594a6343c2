// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-class memoization owned by a [`DocumentParser`](super::DocumentParser).

use std::{collections::HashMap, sync::Arc};

use super::{AliasTable, ObjectMapping};
use crate::reflection::FieldInfo;

/// Per-class caches keyed by fully-qualified class name.
///
/// Entries are written once and never invalidated. Hand a cache from one
/// parser to the next with [`DocumentParser::into_parts`] and
/// [`DocumentParser::with_cache`] to keep warm results.
///
/// [`DocumentParser::into_parts`]: super::DocumentParser::into_parts
/// [`DocumentParser::with_cache`]: super::DocumentParser::with_cache
#[derive(Debug, Clone, Default)]
pub struct ParserCache {
    pub(super) fields:  HashMap<String, Arc<[FieldInfo]>>,
    pub(super) aliases: HashMap<String, Arc<AliasTable>>,
    pub(super) objects: HashMap<String, Arc<ObjectMapping>>
}

impl ParserCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the field list of `class` is cached.
    #[must_use]
    pub fn has_fields(&self, class: &str) -> bool {
        self.fields.contains_key(class)
    }

    /// Whether the alias table of `class` is cached.
    #[must_use]
    pub fn has_aliases(&self, class: &str) -> bool {
        self.aliases.contains_key(class)
    }

    /// Whether the object mapping of `class` is cached.
    #[must_use]
    pub fn has_object_mapping(&self, class: &str) -> bool {
        self.objects.contains_key(class)
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.aliases.is_empty() && self.objects.is_empty()
    }
}
