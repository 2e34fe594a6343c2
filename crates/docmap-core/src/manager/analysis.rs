// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Index analysis settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

/// Named analysis components, shared by every manager.
///
/// Each map is keyed by component name and holds the engine definition, as
/// in the `settings.analysis` section of an index-creation body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Custom analyzers.
    pub analyzer:    Map<String, Value>,
    /// Custom tokenizers.
    pub tokenizer:   Map<String, Value>,
    /// Token filters.
    pub filter:      Map<String, Value>,
    /// Character filters.
    pub char_filter: Map<String, Value>,
    /// Keyword normalizers.
    pub normalizer:  Map<String, Value>
}

impl AnalysisSettings {
    /// Subset needed by `analyzers`.
    ///
    /// Keeps each named analyzer that has a definition, plus the tokenizer,
    /// filters and char filters it references. Names without a definition
    /// are engine built-ins and are skipped. Normalizers are kept as a whole
    /// since mappings reference them outside the analyzer set.
    pub fn select<'a, I>(&self, analyzers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>
    {
        let mut selected = Self {
            normalizer: self.normalizer.clone(),
            ..Self::default()
        };

        for name in analyzers {
            let Some(definition) = self.analyzer.get(name) else {
                trace!(analyzer = name, "no custom definition, assuming built-in");
                continue;
            };
            selected
                .analyzer
                .insert(name.to_owned(), definition.clone());

            copy_referenced(definition.get("tokenizer"), &self.tokenizer, &mut selected.tokenizer);
            copy_referenced(definition.get("filter"), &self.filter, &mut selected.filter);
            copy_referenced(
                definition.get("char_filter"),
                &self.char_filter,
                &mut selected.char_filter
            );
        }

        selected
    }

    /// Whether no component is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.analyzer.is_empty()
            && self.tokenizer.is_empty()
            && self.filter.is_empty()
            && self.char_filter.is_empty()
            && self.normalizer.is_empty()
    }

    /// Settings as the `analysis` JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut analysis = Map::new();
        for (key, components) in [
            ("analyzer", &self.analyzer),
            ("tokenizer", &self.tokenizer),
            ("filter", &self.filter),
            ("char_filter", &self.char_filter),
            ("normalizer", &self.normalizer)
        ] {
            if !components.is_empty() {
                analysis.insert(key.to_owned(), Value::Object(components.clone()));
            }
        }
        Value::Object(analysis)
    }
}

/// Copy the components named by `reference` (a name or a list of names).
fn copy_referenced(reference: Option<&Value>, source: &Map<String, Value>, target: &mut Map<String, Value>) {
    let names: Vec<&str> = match reference {
        Some(Value::String(name)) => vec![name.as_str()],
        Some(Value::Array(names)) => names.iter().filter_map(Value::as_str).collect(),
        _ => return
    };
    for name in names {
        if let Some(definition) = source.get(name) {
            target.insert(name.to_owned(), definition.clone());
        }
    }
}
