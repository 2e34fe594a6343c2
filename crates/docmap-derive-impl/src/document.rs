// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Document derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! document.rs (orchestrator)
//! │
//! ├── parse/      → Attribute parsing (DocumentDef, FieldDef, AnnotationDef)
//! │
//! └── reflect.rs  → impl Reflect (CLASS_NAME, descriptor, register)
//! ```

mod parse;
mod reflect;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::DocumentDef;

/// Main entry point for the Document derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match DocumentDef::from_derive_input(&input) {
        Ok(document) => reflect::generate(&document).into(),
        Err(err) => err.write_errors().into()
    }
}
