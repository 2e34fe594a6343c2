// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Analyzer harvesting.
//!
//! Index settings must define every analyzer a mapping references before the
//! index is created. Analyzers are read from `Property` options:
//!
//! ```text
//! options.analyzer
//! options.search_analyzer
//! options.fields.<sub>.analyzer
//! options.fields.<sub>.search_analyzer
//! ```

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::{DocumentParser, enter};
use crate::{
    annotation::FieldAnnotation,
    error::{Accumulator, Result},
    reflection::ReflectionProvider
};

const ANALYZER_KEYS: [&str; 2] = ["analyzer", "search_analyzer"];

fn harvest(options: &Map<String, Value>, analyzers: &mut BTreeSet<String>) {
    for key in ANALYZER_KEYS {
        if let Some(Value::String(name)) = options.get(key) {
            analyzers.insert(name.clone());
        }
    }
}

impl<P: ReflectionProvider> DocumentParser<P> {
    /// Every analyzer referenced by `class` and the classes it embeds.
    pub fn analyzers(&mut self, class: &str) -> Result<BTreeSet<String>> {
        let mut analyzers = BTreeSet::new();
        self.collect_analyzers(class, &mut analyzers, &mut Vec::new())?;
        Ok(analyzers)
    }

    fn collect_analyzers(
        &mut self,
        class: &str,
        analyzers: &mut BTreeSet<String>,
        stack: &mut Vec<String>
    ) -> Result<()> {
        enter(stack, class)?;
        let mut errors = Accumulator::new();

        let fields = errors.handle(self.fields(class)).unwrap_or_default();
        for field in fields.iter() {
            match errors.handle(self.classify(field)).flatten() {
                Some(FieldAnnotation::Property(property)) => {
                    harvest(&property.options, analyzers);
                    if let Some(Value::Object(sub_fields)) = property.options.get("fields") {
                        for sub_field in sub_fields.values() {
                            if let Value::Object(sub_options) = sub_field {
                                harvest(sub_options, analyzers);
                            }
                        }
                    }
                }
                Some(FieldAnnotation::Embedded(embedded)) => {
                    errors.handle(self.collect_analyzers(&embedded.class, analyzers, stack));
                }
                _ => {}
            }
        }

        stack.pop();
        errors.finish()
    }
}
