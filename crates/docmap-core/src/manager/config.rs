// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Configuration for connections and managers.
//!
//! ```json
//! {
//!   "analysis": { "analyzer": { "folding": { "tokenizer": "standard" } } },
//!   "connections": {
//!     "default": { "hosts": ["127.0.0.1:9200"], "index_name": "shop",
//!                  "settings": { "number_of_shards": 1 } }
//!   },
//!   "managers": {
//!     "default": { "connection": "default", "mappings": ["shop::Product"] }
//!   }
//! }
//! ```

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::AnalysisSettings;
use crate::error::Result;

/// Name of the connection and manager used when none is given.
pub const DEFAULT_NAME: &str = "default";

const DEFAULT_HOST: &str = "127.0.0.1:9200";

fn default_hosts() -> Vec<String> {
    vec![DEFAULT_HOST.to_owned()]
}

fn default_connection() -> String {
    DEFAULT_NAME.to_owned()
}

/// One search-engine index and how to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Engine hosts, `host:port`.
    #[serde(default = "default_hosts")]
    pub hosts: Vec<String>,

    /// Index managed through this connection.
    pub index_name: String,

    /// Index settings, e.g. `number_of_shards`.
    #[serde(default)]
    pub settings: Map<String, Value>
}

impl ConnectionConfig {
    /// Connection to `index_name` on the default host.
    #[must_use]
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            hosts:      default_hosts(),
            index_name: index_name.into(),
            settings:   Map::new()
        }
    }
}

/// Declared mappings of one manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Connection name.
    #[serde(default = "default_connection")]
    pub connection: String,

    /// Fully-qualified document classes.
    #[serde(default)]
    pub mappings: Vec<String>
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            connection: default_connection(),
            mappings:   Vec::new()
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocmapConfig {
    /// Analysis components shared by all managers.
    pub analysis: AnalysisSettings,

    /// Connections by name.
    pub connections: BTreeMap<String, ConnectionConfig>,

    /// Managers by name.
    pub managers: BTreeMap<String, ManagerConfig>
}

impl DocmapConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
