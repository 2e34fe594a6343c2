// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use docmap::{ClassRegistry, Document, DocumentParser, Reflect};

#[derive(Document)]
#[document(object)]
pub struct Address {
    #[property(type = "keyword")]
    pub city: String,
}

#[derive(Document)]
#[document(nested)]
pub struct Line {
    #[property(type = "integer")]
    pub quantity: u32,
}

#[derive(Document)]
#[document(index(type = "purchase", options = r#"{"dynamic": "strict"}"#))]
pub struct Order {
    #[embedded(class = Address)]
    pub shipping: Address,

    #[embedded(class = Line, multiple)]
    pub lines: Vec<Line>,

    #[hash_map(name = "extra")]
    pub attributes: HashMap<String, String>,
}

fn main() {
    let mut registry = ClassRegistry::new();
    registry.register::<Order>();
    assert_eq!(registry.len(), 3);

    let document = DocumentParser::new(registry)
        .parse(Order::CLASS_NAME)
        .unwrap();
    assert_eq!(document.document_type, "purchase");
    assert_eq!(document.mapping["dynamic"], "strict");
    assert_eq!(document.mapping["properties"]["lines"]["type"], "nested");
    assert_eq!(document.mapping["properties"]["extra"]["dynamic"], true);
}
