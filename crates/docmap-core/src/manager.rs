// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Managers and repositories built from compiled mappings.
//!
//! A manager owns one index: its connection, the analysis components its
//! documents reference, and one [`Repository`] per document type. Managers
//! are built once, at startup, from [`DocmapConfig`]:
//!
//! ```text
//! DocmapConfig
//! ├── analysis ─────────────┐
//! ├── connections[name] ────┤
//! └── managers[name]        │
//!       └── mappings ──► ManagerFactory::create ──► Manager
//!                              │                     ├── index_body()
//!                              ▼                     └── repositories
//!                       MetadataCollector             └── Repository (per type)
//! ```
//!
//! The manager named `default` is also reachable through
//! [`ManagerRegistry::default_manager`].

mod analysis;
mod config;

use std::{collections::BTreeMap, sync::Arc};

pub use analysis::AnalysisSettings;
pub use config::{ConnectionConfig, DEFAULT_NAME, DocmapConfig, ManagerConfig};
use serde_json::{Map, Value};
use tracing::info;

use crate::{
    collector::MetadataCollector,
    error::{Accumulator, Error, Result},
    parser::{AliasTable, DocumentMapping},
    reflection::ReflectionProvider
};

/// Access point for one document type.
#[derive(Debug, Clone)]
pub struct Repository {
    mapping: Arc<DocumentMapping>
}

impl Repository {
    /// Repository over a compiled document.
    #[must_use]
    pub const fn new(mapping: Arc<DocumentMapping>) -> Self {
        Self {
            mapping
        }
    }

    /// Document type served by this repository.
    #[must_use]
    pub fn document_type(&self) -> &str {
        &self.mapping.document_type
    }

    /// Fully-qualified document class.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.mapping.class
    }

    /// Alias table for object/document conversion.
    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        &self.mapping.aliases
    }

    /// Compiled document.
    #[must_use]
    pub fn mapping(&self) -> &DocumentMapping {
        &self.mapping
    }
}

/// One index with its repositories.
#[derive(Debug, Clone)]
pub struct Manager {
    name:         String,
    connection:   ConnectionConfig,
    analysis:     AnalysisSettings,
    repositories: BTreeMap<String, Repository>
}

impl Manager {
    /// Manager name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Connection of the managed index.
    #[must_use]
    pub const fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    /// Name of the managed index.
    #[must_use]
    pub fn index_name(&self) -> &str {
        &self.connection.index_name
    }

    /// Analysis components referenced by the managed documents.
    #[must_use]
    pub const fn analysis(&self) -> &AnalysisSettings {
        &self.analysis
    }

    /// Repository of `document_type`.
    #[must_use]
    pub fn repository(&self, document_type: &str) -> Option<&Repository> {
        self.repositories.get(document_type)
    }

    /// Repository of the document class `class`.
    #[must_use]
    pub fn repository_for_class(&self, class: &str) -> Option<&Repository> {
        self.repositories
            .values()
            .find(|repository| repository.class() == class)
    }

    /// Repositories in document type order.
    pub fn repositories(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.values()
    }

    /// Body of the index-creation request.
    ///
    /// ```json
    /// {
    ///   "settings": { "number_of_shards": 1, "analysis": { ... } },
    ///   "mappings": { "product": { "properties": { ... } } }
    /// }
    /// ```
    #[must_use]
    pub fn index_body(&self) -> Value {
        let mut settings = self.connection.settings.clone();
        if !self.analysis.is_empty() {
            settings.insert("analysis".into(), self.analysis.to_value());
        }

        let mappings: Map<String, Value> = self
            .repositories
            .iter()
            .map(|(document_type, repository)| {
                (
                    document_type.clone(),
                    Value::Object(repository.mapping.mapping.clone())
                )
            })
            .collect();

        let mut body = Map::new();
        body.insert("settings".into(), Value::Object(settings));
        body.insert("mappings".into(), Value::Object(mappings));
        Value::Object(body)
    }
}

/// Builds managers from declared mapping sets.
#[derive(Debug)]
pub struct ManagerFactory<P> {
    collector: MetadataCollector<P>
}

impl<P: ReflectionProvider> ManagerFactory<P> {
    /// Factory compiling through `collector`.
    pub const fn new(collector: MetadataCollector<P>) -> Self {
        Self {
            collector
        }
    }

    /// Build the manager `name` over `connection`.
    ///
    /// # Errors
    ///
    /// Every compilation error of the declared mappings, and
    /// [`Error::DuplicateDocumentType`].
    pub fn create<I, S>(
        &mut self,
        name: &str,
        connection: ConnectionConfig,
        analysis: &AnalysisSettings,
        mappings: I
    ) -> Result<Manager>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let documents = self.collector.collect(mappings)?;

        let analyzers = documents
            .values()
            .flat_map(|document| document.analyzers.iter().map(String::as_str));
        let analysis = analysis.select(analyzers);

        let repositories: BTreeMap<String, Repository> = documents
            .into_iter()
            .map(|(document_type, mapping)| (document_type, Repository::new(mapping)))
            .collect();

        info!(
            manager = name,
            index = %connection.index_name,
            repositories = repositories.len(),
            "manager built"
        );

        Ok(Manager {
            name: name.to_owned(),
            connection,
            analysis,
            repositories
        })
    }

    /// Release the collector.
    pub fn into_collector(self) -> MetadataCollector<P> {
        self.collector
    }
}

/// Every configured manager by name.
#[derive(Debug, Clone, Default)]
pub struct ManagerRegistry {
    managers: BTreeMap<String, Manager>
}

impl ManagerRegistry {
    /// Build every manager declared in `config`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownConnection`] for managers naming a missing connection,
    /// plus every error of [`ManagerFactory::create`]. Findings of all
    /// managers are reported together.
    pub fn build<P: ReflectionProvider>(
        config: &DocmapConfig,
        factory: &mut ManagerFactory<P>
    ) -> Result<Self> {
        let mut errors = Accumulator::new();
        let mut managers = BTreeMap::new();

        for (name, manager) in &config.managers {
            let Some(connection) = config.connections.get(&manager.connection) else {
                errors.push(Error::UnknownConnection {
                    manager:    name.clone(),
                    connection: manager.connection.clone()
                });
                continue;
            };
            if let Some(built) = errors.handle(factory.create(
                name,
                connection.clone(),
                &config.analysis,
                &manager.mappings
            )) {
                managers.insert(name.clone(), built);
            }
        }

        errors.finish_with(Self {
            managers
        })
    }

    /// Manager `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Manager> {
        self.managers.get(name)
    }

    /// The manager named `default`.
    #[must_use]
    pub fn default_manager(&self) -> Option<&Manager> {
        self.get(DEFAULT_NAME)
    }

    /// Manager names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.managers.keys().map(String::as_str)
    }

    /// Number of managers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.managers.len()
    }

    /// Whether no manager is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }
}
