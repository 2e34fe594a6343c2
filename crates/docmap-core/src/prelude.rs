// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use docmap_core::prelude::*;
//! ```

pub use crate::{
    AnalysisSettings, ConnectionConfig, DocmapConfig, DocumentMapping, DocumentParser, Error,
    Manager, ManagerConfig, ManagerFactory, ManagerRegistry, MetadataCollector, Reflect,
    ReflectionProvider, Repository,
    annotation::{
        ClassAnnotation, Embedded, FieldAnnotation, HashMapField, Index, MetaField, Property
    },
    parser::{AliasEntry, AliasTable, FieldFilter, PropertyType},
    reflection::{ClassDescriptor, ClassRegistry, FieldDescriptor, Visibility}
};
