// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use docmap::{ClassRegistry, Document, DocumentParser, Reflect};

#[derive(Document)]
#[document(index(type = "snippet"))]
pub struct Snippet<'a> {
    #[property(type = "text")]
    pub body: &'a str,

    #[property(type = "keyword")]
    pub language: &'a str,
}

fn main() {
    let mut registry = ClassRegistry::new();
    registry.register::<Snippet<'static>>();
    assert!(Snippet::CLASS_NAME.ends_with("::Snippet"));

    let document = DocumentParser::new(registry)
        .parse(Snippet::CLASS_NAME)
        .unwrap();
    assert_eq!(document.document_type, "snippet");
    assert_eq!(document.mapping["properties"]["language"]["type"], "keyword");
}
