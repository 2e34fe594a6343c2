// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata collection for a set of configured document classes.
//!
//! The collector sits between configuration and the managers: it takes the
//! class names a manager declares, compiles each through one shared
//! [`DocumentParser`], and indexes the results by document type.
//!
//! ```text
//! ["shop::Product", "shop::Order"]
//!            │
//!            ▼
//! MetadataCollector::collect
//!            │
//!            ▼
//! { "product" → DocumentMapping, "order" → DocumentMapping }
//! ```

use std::{collections::HashMap, path::Path, sync::Arc};

use tracing::trace;

use crate::{
    error::{Accumulator, Error, Result},
    parser::{DocumentMapping, DocumentParser},
    reflection::{ClassRegistry, ReflectionProvider}
};

/// Compiled documents keyed by document type.
pub type Documents = std::collections::BTreeMap<String, Arc<DocumentMapping>>;

/// Compiles configured document classes and memoizes the results.
#[derive(Debug)]
pub struct MetadataCollector<P> {
    parser:    DocumentParser<P>,
    documents: HashMap<String, Arc<DocumentMapping>>
}

impl MetadataCollector<ClassRegistry> {
    /// Collector over every descriptor file found under `root`.
    ///
    /// # Errors
    ///
    /// Propagates I/O and JSON errors from [`ClassRegistry::load_dir`].
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self> {
        let mut registry = ClassRegistry::new();
        registry.load_dir(root)?;
        Ok(Self::new(DocumentParser::new(registry)))
    }
}

impl<P: ReflectionProvider> MetadataCollector<P> {
    /// Collector compiling through `parser`.
    pub fn new(parser: DocumentParser<P>) -> Self {
        Self {
            parser,
            documents: HashMap::new()
        }
    }

    /// Underlying parser.
    pub const fn parser(&self) -> &DocumentParser<P> {
        &self.parser
    }

    /// Compiled document of `class`, compiling it on first use.
    pub fn document(&mut self, class: &str) -> Result<Arc<DocumentMapping>> {
        if let Some(document) = self.documents.get(class) {
            trace!(class, "document cache hit");
            return Ok(Arc::clone(document));
        }
        let document = Arc::new(self.parser.parse(class)?);
        self.documents
            .insert(class.to_owned(), Arc::clone(&document));
        Ok(document)
    }

    /// Compile every class in `classes` and key the results by document type.
    ///
    /// Failures of individual classes are gathered and reported together.
    ///
    /// # Errors
    ///
    /// Any compilation error, and [`Error::DuplicateDocumentType`] when two
    /// classes share a document type.
    pub fn collect<I, S>(&mut self, classes: I) -> Result<Documents>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let mut errors = Accumulator::new();
        let mut documents = Documents::new();

        for class in classes {
            let Some(document) = errors.handle(self.document(class.as_ref())) else {
                continue;
            };
            match documents.get(&document.document_type) {
                Some(first) if first.class != document.class => {
                    errors.push(Error::DuplicateDocumentType {
                        document_type: document.document_type.clone(),
                        first:         first.class.clone(),
                        second:        document.class.clone()
                    });
                }
                Some(_) => {}
                None => {
                    documents.insert(document.document_type.clone(), document);
                }
            }
        }

        errors.finish_with(documents)
    }

    /// Release the parser, dropping memoized documents.
    pub fn into_parser(self) -> DocumentParser<P> {
        self.parser
    }
}
