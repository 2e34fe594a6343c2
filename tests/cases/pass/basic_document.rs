// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use docmap::{ClassRegistry, Document, DocumentParser, Reflect};

#[derive(Document)]
#[document(index)]
pub struct Article {
    #[id]
    pub id: String,

    #[property(type = "text", options = r#"{"analyzer": "english", "boost": 2}"#)]
    pub title: String,

    #[property(type = "keyword", name = "tag_list")]
    pub tags: Vec<String>,

    pub cached_html: String,
}

fn main() {
    let mut registry = ClassRegistry::new();
    registry.register::<Article>();

    let document = DocumentParser::new(registry)
        .parse(Article::CLASS_NAME)
        .unwrap();
    assert_eq!(document.document_type, "article");
    assert_eq!(document.mapping["properties"]["title"]["boost"], 2);
    assert!(document.aliases.contains_key("tag_list"));
}
