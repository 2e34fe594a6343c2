// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Raw `options = "<json>"` values.
//!
//! Options are validated as a JSON object while the macro expands, then
//! re-emitted as code building the same `serde_json::Map`, so the generated
//! descriptor never parses JSON at runtime.

use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;
use serde_json::{Map, Value};
use syn::LitStr;

/// Parsed raw options object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawOptions(pub Map<String, Value>);

impl RawOptions {
    /// Parse a JSON object literal.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not valid JSON or not an object.
    pub fn parse(json: &str) -> Result<Self, String> {
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => Err("options must be a JSON object".to_owned()),
            Err(err) => Err(format!("invalid options JSON: {err}"))
        }
    }

    /// Parse from a string literal, spanning errors on the literal.
    pub fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        Self::parse(&lit.value()).map_err(|message| syn::Error::new(lit.span(), message))
    }

    /// Whether no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expression evaluating to the options map.
    #[must_use]
    pub fn to_tokens(&self) -> TokenStream {
        map_tokens(&self.0)
    }
}

impl FromMeta for RawOptions {
    fn from_string(value: &str) -> darling::Result<Self> {
        Self::parse(value).map_err(darling::Error::custom)
    }
}

fn map_tokens(map: &Map<String, Value>) -> TokenStream {
    if map.is_empty() {
        return quote! { ::docmap::serde_json::Map::new() };
    }
    let entries = map.iter().map(|(key, value)| {
        let value = value_tokens(value);
        quote! { map.insert(::std::string::String::from(#key), #value); }
    });
    quote! {
        {
            let mut map = ::docmap::serde_json::Map::new();
            #(#entries)*
            map
        }
    }
}

fn value_tokens(value: &Value) -> TokenStream {
    match value {
        Value::Null => quote! { ::docmap::serde_json::Value::Null },
        Value::Bool(b) => quote! { ::docmap::serde_json::Value::Bool(#b) },
        Value::Number(number) => {
            if let Some(n) = number.as_u64() {
                quote! { ::docmap::serde_json::Value::from(#n) }
            } else if let Some(n) = number.as_i64() {
                quote! { ::docmap::serde_json::Value::from(#n) }
            } else {
                let n = number.as_f64().unwrap_or_default();
                quote! { ::docmap::serde_json::Value::from(#n) }
            }
        }
        Value::String(s) => quote! {
            ::docmap::serde_json::Value::String(::std::string::String::from(#s))
        },
        Value::Array(items) => {
            let items = items.iter().map(value_tokens);
            quote! { ::docmap::serde_json::Value::Array(::std::vec![#(#items),*]) }
        }
        Value::Object(map) => {
            let map = map_tokens(map);
            quote! { ::docmap::serde_json::Value::Object(#map) }
        }
    }
}
