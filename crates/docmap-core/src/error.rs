// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Configuration errors raised while compiling document mappings.
//!
//! Every variant is fatal: mappings are compiled before anything is sent to
//! the search engine, and a class that fails to compile never produces a
//! partial mapping or alias table.
//!
//! Field-level findings for one class are gathered with [`Accumulator`] and
//! surfaced together as [`Error::Multiple`].

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal mapping configuration error.
#[derive(Debug, Error)]
pub enum Error {
    /// No descriptor is registered under this class name.
    #[error("class `{0}` is not registered")]
    UnknownClass(String),

    /// Field visibility is neither public, protected nor private.
    #[error("wrong property type `{visibility}` for field `{field}` in class `{class}`")]
    WrongPropertyType {
        /// Declaring class.
        class:      String,
        /// Field name.
        field:      String,
        /// Visibility as written.
        visibility: String
    },

    /// Private or protected field without a setter.
    #[error(
        "missing setter `{setter}` for field `{field}` in class `{class}`, add it or make the field public"
    )]
    MissingSetter {
        /// Class the accessor is looked up on.
        class:  String,
        /// Field name.
        field:  String,
        /// Expected setter name.
        setter: String
    },

    /// Private or protected field without a getter (or is-getter for booleans).
    #[error(
        "missing getter `{getter}`{} for field `{field}` in class `{class}`, add it or make the field public",
        is_getter.as_ref().map(|name| format!(" or is-getter `{name}`")).unwrap_or_default()
    )]
    MissingGetter {
        /// Class the accessor is looked up on.
        class:     String,
        /// Field name.
        field:     String,
        /// Expected getter name.
        getter:    String,
        /// Boolean fallback getter name, if the field is boolean.
        is_getter: Option<String>
    },

    /// Embedded target lacks both `ObjectType` and `NestedType`.
    #[error("class `{0}` must have ObjectType or NestedType annotation")]
    MissingObjectAnnotation(String),

    /// Root class lacks the `Index` annotation.
    #[error("class `{0}` is not a document, add the Index annotation")]
    NotADocument(String),

    /// A class embeds itself, directly or transitively.
    #[error("embedding cycle detected: {}", path.join(" -> "))]
    EmbeddingCycle {
        /// Classes on the cycle, first and last are the same.
        path: Vec<String>
    },

    /// A class inherits from itself.
    #[error("inheritance cycle detected at class `{0}`")]
    InheritanceCycle(String),

    /// Two configured documents resolve to the same document type.
    #[error("document type `{document_type}` is declared by both `{first}` and `{second}`")]
    DuplicateDocumentType {
        /// Colliding document type.
        document_type: String,
        /// Class registered first.
        first:         String,
        /// Class registered second.
        second:        String
    },

    /// Manager configuration references a connection that does not exist.
    #[error("manager `{manager}` references unknown connection `{connection}`")]
    UnknownConnection {
        /// Manager name.
        manager:    String,
        /// Missing connection name.
        connection: String
    },

    /// Malformed descriptor or configuration JSON.
    #[error("invalid descriptor: {0}")]
    Json(#[from] serde_json::Error),

    /// Descriptor directory could not be read.
    #[error("failed to read descriptors: {0}")]
    Io(#[from] std::io::Error),

    /// Several independent findings for the same compilation.
    #[error("{} mapping errors:\n{}", .0.len(), render_all(.0))]
    Multiple(Vec<Error>)
}

fn render_all(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Error {
    /// Flatten nested [`Error::Multiple`] into a plain list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Error> {
        match self {
            Self::Multiple(errors) => errors.into_iter().flat_map(Self::into_vec).collect(),
            other => vec![other]
        }
    }

    /// Number of individual findings carried by this error.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Multiple(errors) => errors.iter().map(Self::len).sum(),
            _ => 1
        }
    }

    /// Always `false`; an error carries at least one finding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Collects errors while the caller keeps going.
///
/// Modeled on `darling::error::Accumulator`: call [`handle`](Self::handle) on
/// every fallible step and [`finish`](Self::finish) once at the end.
#[derive(Debug, Default)]
pub struct Accumulator {
    errors: Vec<Error>
}

impl Accumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new()
        }
    }

    /// Record the error, if any, and return the success value.
    pub fn handle<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    /// Record an error.
    ///
    /// A finding identical to one already recorded is dropped, so a broken
    /// class reached through several fields is reported once.
    pub fn push(&mut self, error: Error) {
        for error in error.into_vec() {
            let message = error.to_string();
            if !self.errors.iter().any(|seen| seen.to_string() == message) {
                self.errors.push(error);
            }
        }
    }

    /// Return `value` when nothing was recorded.
    pub fn finish_with<T>(self, value: T) -> Result<T> {
        let mut errors = self.errors;
        match errors.len() {
            0 => Ok(value),
            1 => Err(errors.remove(0)),
            _ => Err(Error::Multiple(errors))
        }
    }

    /// Return `Ok(())` when nothing was recorded.
    pub fn finish(self) -> Result<()> {
        self.finish_with(())
    }
}
