// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use docmap::{ClassRegistry, Document, DocumentParser, Reflect};

#[derive(Document)]
pub struct Timestamped {
    #[property(type = "date")]
    pub created: String,

    #[property(type = "text")]
    pub label: String,
}

#[derive(Document)]
#[document(index, extends = Timestamped)]
pub struct Event {
    #[property(type = "keyword")]
    pub label: String,
}

fn main() {
    let mut registry = ClassRegistry::new();
    registry.register::<Event>();
    assert!(registry.contains(Timestamped::CLASS_NAME));

    let document = DocumentParser::new(registry)
        .parse(Event::CLASS_NAME)
        .unwrap();
    assert_eq!(document.mapping["properties"]["label"]["type"], "keyword");
    assert_eq!(document.mapping["properties"]["created"]["type"], "date");
}
