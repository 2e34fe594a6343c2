// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value, json};

use super::*;
use crate::{
    annotation::{Embedded, HashMapField, Index, MetaField, Property},
    reflection::{ClassDescriptor, ClassRegistry, FieldDescriptor, Visibility}
};

fn options(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("options must be an object")
    }
}

fn index() -> ClassAnnotation {
    ClassAnnotation::Index(Index::default())
}

/// Blog post with an embedded author, nested comments and a private,
/// accessor-backed field.
fn blog() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    registry
        .insert(
            ClassDescriptor::new("blog::Post")
                .with_annotation(index())
                .with_methods(["getSlug", "setSlug", "isPublished", "setPublished"])
                .with_field(
                    FieldDescriptor::public("title").with_annotation(
                        Property::new("text").with_options(options(json!({
                            "analyzer": "english",
                            "fields": {
                                "raw": {"type": "keyword"},
                                "folded": {"type": "text", "analyzer": "folding", "search_analyzer": "english"}
                            }
                        })))
                    )
                )
                .with_field(
                    FieldDescriptor::private("slug")
                        .with_type("String")
                        .with_annotation(Property::new("keyword"))
                )
                .with_field(
                    FieldDescriptor::private("published")
                        .with_type("bool")
                        .with_annotation(Property::new("boolean"))
                )
                .with_field(
                    FieldDescriptor::public("author")
                        .with_annotation(Embedded::new("blog::Author"))
                )
                .with_field(
                    FieldDescriptor::public("comments")
                        .with_annotation(Embedded::new("blog::Comment").multiple())
                )
                .with_field(FieldDescriptor::public("scratch"))
        )
        .insert(
            ClassDescriptor::new("blog::Author")
                .with_annotation(ClassAnnotation::ObjectType)
                .with_field(
                    FieldDescriptor::public("displayName").with_annotation(Property::new("text"))
                )
        )
        .insert(
            ClassDescriptor::new("blog::Comment")
                .with_annotation(ClassAnnotation::NestedType)
                .with_field(
                    FieldDescriptor::public("body").with_annotation(
                        Property::new("text").with_option("analyzer", "english")
                    )
                )
        );
    registry
}

#[test]
fn default_name_is_snake_case() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::User")
            .with_annotation(index())
            .with_field(FieldDescriptor::public("firstName").with_annotation(Property::new("text")))
    );
    let aliases = DocumentParser::new(registry).aliases("app::User").unwrap();
    let entry = &aliases["first_name"];
    assert_eq!(entry.property_name, "firstName");
    assert_eq!(entry.ty.as_deref(), Some("text"));
}

#[test]
fn snake_case_names_with_digits_are_kept() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::Customer")
            .with_annotation(index())
            .with_field(FieldDescriptor::public("address_line2").with_annotation(Property::new("text")))
            .with_field(FieldDescriptor::public("zip5").with_annotation(Property::new("keyword")))
    );
    let document = DocumentParser::new(registry).parse("app::Customer").unwrap();

    assert_eq!(
        document.aliases.keys().map(String::as_str).collect::<Vec<_>>(),
        ["address_line2", "zip5"]
    );
    assert_eq!(
        document.mapping["properties"],
        json!({"address_line2": {"type": "text"}, "zip5": {"type": "keyword"}})
    );
}

#[test]
fn public_field_has_no_accessors() {
    let aliases = DocumentParser::new(blog()).aliases("blog::Post").unwrap();
    let title = &aliases["title"];
    assert_eq!(title.property_type, PropertyType::Public);
    assert!(title.methods.is_none());
}

#[test]
fn private_field_always_has_accessors() {
    let aliases = DocumentParser::new(blog()).aliases("blog::Post").unwrap();
    let slug = &aliases["slug"];
    assert_eq!(slug.property_type, PropertyType::Private);
    assert_eq!(
        slug.methods,
        Some(Accessors {
            getter: "getSlug".into(),
            setter: "setSlug".into()
        })
    );
}

#[test]
fn boolean_falls_back_to_is_getter() {
    let aliases = DocumentParser::new(blog()).aliases("blog::Post").unwrap();
    assert_eq!(
        aliases["published"].methods,
        Some(Accessors {
            getter: "isPublished".into(),
            setter: "setPublished".into()
        })
    );
}

#[test]
fn protected_field_is_private_in_alias_table() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::User")
            .with_methods(["getEmail", "setEmail"])
            .with_field(
                FieldDescriptor::new("email", Visibility::Protected)
                    .with_annotation(Property::new("keyword"))
            )
    );
    let aliases = DocumentParser::new(registry).aliases("app::User").unwrap();
    assert_eq!(aliases["email"].property_type, PropertyType::Private);
}

#[test]
fn unannotated_fields_are_ignored() {
    let mut parser = DocumentParser::new(blog());
    let aliases = parser.aliases("blog::Post").unwrap();
    assert!(!aliases.contains_key("scratch"));
    let properties = parser.build_properties("blog::Post", &FieldFilter::All).unwrap();
    assert!(!properties.contains_key("scratch"));
}

#[test]
fn embedded_merge_produces_object_schema() {
    let mut parser = DocumentParser::new(blog());
    let properties = parser.build_properties("blog::Post", &FieldFilter::All).unwrap();
    assert_eq!(
        properties["author"],
        json!({"type": "object", "properties": {"display_name": {"type": "text"}}})
    );
    assert_eq!(
        properties["comments"],
        json!({
            "type": "nested",
            "properties": {"body": {"type": "text", "analyzer": "english"}}
        })
    );
}

#[test]
fn embedded_alias_entry_carries_target() {
    let aliases = DocumentParser::new(blog()).aliases("blog::Post").unwrap();
    let comments = &aliases["comments"];
    assert_eq!(comments.ty.as_deref(), Some("nested"));
    assert_eq!(comments.multiple, Some(true));
    assert_eq!(comments.namespace.as_deref(), Some("blog::Comment"));
    assert!(comments.is_embedded());
    let nested = comments.aliases.as_ref().unwrap();
    assert_eq!(nested["body"].property_name, "body");

    let author = &aliases["author"];
    assert_eq!(author.ty.as_deref(), Some("object"));
    assert_eq!(author.multiple, Some(false));
}

#[test]
fn alias_table_serializes_in_camel_case() {
    let aliases = DocumentParser::new(blog()).aliases("blog::Post").unwrap();
    let json = serde_json::to_value(&*aliases).unwrap();
    assert_eq!(
        json["slug"],
        json!({
            "propertyName": "slug",
            "propertyType": "private",
            "type": "keyword",
            "isHashMap": false,
            "methods": {"getter": "getSlug", "setter": "setSlug"}
        })
    );
}

#[test]
fn hash_map_override_ignores_declared_options() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::Product")
            .with_annotation(index())
            .with_field(
                FieldDescriptor::public("attributes").with_annotation(
                    HashMapField::default()
                        .with_options(options(json!({"type": "keyword", "dynamic": "strict"})))
                )
            )
    );
    let mut parser = DocumentParser::new(registry);
    let properties = parser.build_properties("app::Product", &FieldFilter::All).unwrap();
    assert_eq!(properties["attributes"], json!({"type": "nested", "dynamic": true}));

    let aliases = parser.aliases("app::Product").unwrap();
    assert!(aliases["attributes"].is_hash_map);
    assert_eq!(aliases["attributes"].ty.as_deref(), Some("hash_map"));
}

#[test]
fn raw_options_become_siblings() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::Product").with_field(
            FieldDescriptor::public("name")
                .with_annotation(Property::new("text").with_option("boost", 2))
        )
    );
    let properties = DocumentParser::new(registry)
        .build_properties("app::Product", &FieldFilter::All)
        .unwrap();
    assert_eq!(properties["name"], json!({"type": "text", "boost": 2}));
}

#[test]
fn raw_options_override_computed_keys() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::Product").with_field(
            FieldDescriptor::public("code")
                .with_annotation(Property::new("text").with_option("type", "keyword"))
        )
    );
    let properties = DocumentParser::new(registry)
        .build_properties("app::Product", &FieldFilter::All)
        .unwrap();
    assert_eq!(properties["code"], json!({"type": "keyword"}));
}

#[test]
fn missing_setter_is_fatal() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::User")
            .with_annotation(index())
            .with_methods(["getEmail"])
            .with_field(FieldDescriptor::private("email").with_annotation(Property::new("keyword")))
    );
    let mut parser = DocumentParser::new(registry);
    let err = parser.aliases("app::User").unwrap_err();
    match err {
        Error::MissingSetter {
            class,
            field,
            setter
        } => {
            assert_eq!(class, "app::User");
            assert_eq!(field, "email");
            assert_eq!(setter, "setEmail");
        }
        other => panic!("unexpected error: {other}")
    }
    assert!(!parser.cache().has_aliases("app::User"));
    assert!(parser.parse("app::User").is_err());
}

#[test]
fn missing_getter_is_fatal() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::User")
            .with_methods(["setActive"])
            .with_field(
                FieldDescriptor::private("active")
                    .with_type("bool")
                    .with_annotation(Property::new("boolean"))
            )
    );
    let err = DocumentParser::new(registry).aliases("app::User").unwrap_err();
    assert!(matches!(
        err,
        Error::MissingGetter { ref getter, is_getter: Some(ref is), .. }
            if getter == "getActive" && is == "isActive"
    ));
}

#[test]
fn all_findings_of_a_class_are_reported() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::User")
            .with_field(FieldDescriptor::private("email").with_annotation(Property::new("keyword")))
            .with_field(
                FieldDescriptor::new("secret", Visibility::Restricted("super".into()))
                    .with_annotation(Property::new("keyword"))
            )
    );
    let err = DocumentParser::new(registry).aliases("app::User").unwrap_err();
    let findings = err.into_vec();
    assert_eq!(findings.len(), 3);
    assert!(findings.iter().any(|e| matches!(e, Error::MissingSetter { .. })));
    assert!(findings.iter().any(|e| matches!(e, Error::MissingGetter { .. })));
    assert!(findings.iter().any(|e| matches!(
        e,
        Error::WrongPropertyType { field, .. } if field == "secret"
    )));
}

#[test]
fn broken_object_embedded_twice_is_reported_once() {
    let mut registry = ClassRegistry::new();
    registry
        .insert(
            ClassDescriptor::new("app::Order")
                .with_annotation(index())
                .with_field(
                    FieldDescriptor::public("billing").with_annotation(Embedded::new("app::Address"))
                )
                .with_field(
                    FieldDescriptor::public("shipping").with_annotation(Embedded::new("app::Address"))
                )
        )
        .insert(
            ClassDescriptor::new("app::Address")
                .with_annotation(ClassAnnotation::ObjectType)
                .with_field(
                    FieldDescriptor::private("city").with_annotation(Property::new("keyword"))
                )
        );
    let findings = DocumentParser::new(registry)
        .parse("app::Order")
        .unwrap_err()
        .into_vec();

    assert_eq!(findings.len(), 2);
    assert!(matches!(findings[0], Error::MissingSetter { ref class, .. } if class == "app::Address"));
    assert!(matches!(findings[1], Error::MissingGetter { ref field, .. } if field == "city"));
}

#[test]
fn embedded_target_without_object_annotation_is_fatal() {
    let mut registry = ClassRegistry::new();
    registry
        .insert(
            ClassDescriptor::new("app::Order")
                .with_annotation(index())
                .with_field(FieldDescriptor::public("line").with_annotation(Embedded::new("app::Line")))
        )
        .insert(ClassDescriptor::new("app::Line"));
    let mut parser = DocumentParser::new(registry);
    assert!(matches!(
        parser.object_mapping("app::Line"),
        Err(Error::MissingObjectAnnotation(class)) if class == "app::Line"
    ));
    assert!(matches!(
        parser.build_properties("app::Order", &FieldFilter::All),
        Err(Error::MissingObjectAnnotation(_))
    ));
    assert!(matches!(
        parser.parse("app::Order"),
        Err(Error::MissingObjectAnnotation(_))
    ));
}

#[test]
fn embedding_cycle_is_fatal() {
    let mut registry = ClassRegistry::new();
    registry
        .insert(
            ClassDescriptor::new("app::Node")
                .with_annotation(ClassAnnotation::ObjectType)
                .with_field(FieldDescriptor::public("link").with_annotation(Embedded::new("app::Link")))
        )
        .insert(
            ClassDescriptor::new("app::Link")
                .with_annotation(ClassAnnotation::ObjectType)
                .with_field(FieldDescriptor::public("node").with_annotation(Embedded::new("app::Node")))
        );
    let mut parser = DocumentParser::new(registry);

    match parser.object_mapping("app::Node") {
        Err(Error::EmbeddingCycle {
            path
        }) => assert_eq!(path, vec!["app::Node", "app::Link", "app::Node"]),
        other => panic!("expected cycle, got {other:?}")
    }
    assert!(matches!(
        parser.analyzers("app::Node"),
        Err(Error::EmbeddingCycle { .. })
    ));
    assert!(parser.aliases("app::Node").is_err());
}

#[test]
fn embedding_same_class_twice_is_not_a_cycle() {
    let mut registry = ClassRegistry::new();
    registry
        .insert(
            ClassDescriptor::new("app::Shipment")
                .with_annotation(index())
                .with_field(FieldDescriptor::public("from").with_annotation(Embedded::new("app::Address")))
                .with_field(FieldDescriptor::public("to").with_annotation(Embedded::new("app::Address")))
        )
        .insert(
            ClassDescriptor::new("app::Address")
                .with_annotation(ClassAnnotation::ObjectType)
                .with_field(FieldDescriptor::public("city").with_annotation(Property::new("keyword")))
        );
    let document = DocumentParser::new(registry).parse("app::Shipment").unwrap();
    assert_eq!(
        document.mapping["properties"]["from"],
        document.mapping["properties"]["to"]
    );
    assert_eq!(document.objects.len(), 1);
}

#[test]
fn analyzers_are_deduplicated_across_tree() {
    let analyzers = DocumentParser::new(blog()).analyzers("blog::Post").unwrap();
    assert_eq!(
        analyzers.into_iter().collect::<Vec<_>>(),
        vec!["english".to_owned(), "folding".to_owned()]
    );
}

#[test]
fn same_analyzer_twice_yields_one_entry() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::Article")
            .with_field(
                FieldDescriptor::public("title")
                    .with_annotation(Property::new("text").with_option("analyzer", "snowball"))
            )
            .with_field(
                FieldDescriptor::public("lead")
                    .with_annotation(Property::new("text").with_option("analyzer", "snowball"))
            )
    );
    let analyzers = DocumentParser::new(registry).analyzers("app::Article").unwrap();
    assert_eq!(analyzers.len(), 1);
}

#[test]
fn child_redeclaration_wins_in_alias_table() {
    let mut registry = ClassRegistry::new();
    registry
        .insert(
            ClassDescriptor::new("app::Base")
                .with_field(FieldDescriptor::public("label").with_annotation(Property::new("text")))
                .with_field(FieldDescriptor::public("created").with_annotation(Property::new("date")))
        )
        .insert(
            ClassDescriptor::new("app::Tag").with_parent("app::Base").with_field(
                FieldDescriptor::public("label")
                    .with_annotation(Property::new("keyword").with_name("tag_label"))
            )
        );
    let aliases = DocumentParser::new(registry).aliases("app::Tag").unwrap();
    assert!(!aliases.contains_key("label"));
    assert_eq!(aliases["tag_label"].ty.as_deref(), Some("keyword"));
    assert_eq!(aliases["created"].ty.as_deref(), Some("date"));
}

#[test]
fn name_collision_last_field_wins() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::Item")
            .with_field(
                FieldDescriptor::public("first").with_annotation(Property::new("text").with_name("dup"))
            )
            .with_field(
                FieldDescriptor::public("second")
                    .with_annotation(Property::new("keyword").with_name("dup"))
            )
    );
    let mut parser = DocumentParser::new(registry);
    let aliases = parser.aliases("app::Item").unwrap();
    assert_eq!(aliases.len(), 1);
    assert_eq!(aliases["dup"].property_name, "second");
    let properties = parser.build_properties("app::Item", &FieldFilter::All).unwrap();
    assert_eq!(properties["dup"], json!({"type": "keyword"}));
}

#[test]
fn classification_priority_property_first() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::Item").with_field(
            FieldDescriptor::public("data")
                .with_annotation(HashMapField::default())
                .with_annotation(Property::new("keyword"))
        )
    );
    let aliases = DocumentParser::new(registry).aliases("app::Item").unwrap();
    assert!(!aliases["data"].is_hash_map);
    assert_eq!(aliases["data"].ty.as_deref(), Some("keyword"));
}

#[test]
fn field_filter_exclude_and_only() {
    let mut parser = DocumentParser::new(blog());
    let excluded = parser
        .build_properties("blog::Post", &FieldFilter::new(["author", "comments"], false))
        .unwrap();
    assert!(excluded.contains_key("title"));
    assert!(!excluded.contains_key("author"));

    let only = parser
        .build_properties("blog::Post", &FieldFilter::new(["slug"], true))
        .unwrap();
    assert_eq!(only.keys().collect::<Vec<_>>(), vec!["slug"]);
}

#[test]
fn meta_fields_only_when_collected() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::Order")
            .with_annotation(index())
            .with_field(FieldDescriptor::public("id").with_annotation(MetaField::id()))
            .with_field(FieldDescriptor::public("tenant").with_annotation(MetaField::routing(true)))
            .with_field(FieldDescriptor::public("total").with_annotation(Property::new("double")))
    );
    let mut parser = DocumentParser::new(registry);

    let (aliases, meta) = parser.aliases_with_meta_fields("app::Order").unwrap();
    assert_eq!(aliases["_id"].property_name, "id");
    assert_eq!(aliases["_routing"].property_name, "tenant");
    assert!(aliases["_id"].ty.is_none());
    assert_eq!(meta["_routing"], options(json!({"required": true})));
    assert!(meta["_id"].is_empty());
    assert!(!parser.cache().has_aliases("app::Order"));

    let plain = parser.aliases("app::Order").unwrap();
    assert_eq!(plain.keys().collect::<Vec<_>>(), vec!["total"]);
    assert!(parser.cache().has_aliases("app::Order"));
}

#[test]
fn parse_assembles_root_mapping() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("shop::ProductVariant")
            .with_annotation(ClassAnnotation::Index(
                Index::default().with_options(options(json!({"dynamic": "strict"})))
            ))
            .with_field(FieldDescriptor::public("id").with_annotation(MetaField::id()))
            .with_field(FieldDescriptor::public("shop").with_annotation(MetaField::routing(true)))
            .with_field(FieldDescriptor::public("sku").with_annotation(Property::new("keyword")))
    );
    let document = DocumentParser::new(registry).parse("shop::ProductVariant").unwrap();

    assert_eq!(document.short_name, "ProductVariant");
    assert_eq!(document.document_type, "product_variant");
    assert_eq!(
        Value::Object(document.mapping),
        json!({
            "properties": {"sku": {"type": "keyword"}},
            "_routing": {"required": true},
            "dynamic": "strict"
        })
    );
    assert!(document.aliases.contains_key("_id"));
    assert!(document.objects.is_empty());
}

#[test]
fn parse_uses_explicit_document_type() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("shop::Product")
            .with_annotation(ClassAnnotation::Index(Index::default().with_type("item")))
    );
    let document = DocumentParser::new(registry).parse("shop::Product").unwrap();
    assert_eq!(document.document_type, "item");
    assert_eq!(Value::Object(document.mapping), json!({"properties": {}}));
}

#[test]
fn parse_rejects_non_documents() {
    let mut parser = DocumentParser::new(blog());
    assert!(matches!(
        parser.parse("blog::Author"),
        Err(Error::NotADocument(class)) if class == "blog::Author"
    ));
}

#[test]
fn parse_collects_objects_and_analyzers() {
    let document = DocumentParser::new(blog()).parse("blog::Post").unwrap();
    assert_eq!(
        document.objects.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["blog::Author", "blog::Comment"]
    );
    assert!(document.analyzers.contains("english"));
}

#[test]
fn compiling_twice_is_identical() {
    let first = DocumentParser::new(blog()).parse("blog::Post").unwrap();
    let second = DocumentParser::new(blog()).parse("blog::Post").unwrap();
    assert_eq!(
        serde_json::to_string(&first.mapping).unwrap(),
        serde_json::to_string(&second.mapping).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&first.aliases).unwrap(),
        serde_json::to_string(&second.aliases).unwrap()
    );
}

#[test]
fn caches_are_populated_once() {
    let mut parser = DocumentParser::new(blog());
    assert!(parser.cache().is_empty());
    let first = parser.object_mapping("blog::Author").unwrap();
    assert!(parser.cache().has_object_mapping("blog::Author"));
    assert!(parser.cache().has_fields("blog::Author"));
    let second = parser.object_mapping("blog::Author").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let (registry, cache) = parser.into_parts();
    let mut warm = DocumentParser::with_cache(registry, cache);
    let third = warm.object_mapping("blog::Author").unwrap();
    assert!(Arc::ptr_eq(&first, &third));
}

#[test]
fn unknown_embedded_class_is_fatal() {
    let mut registry = ClassRegistry::new();
    registry.insert(
        ClassDescriptor::new("app::Order")
            .with_field(FieldDescriptor::public("line").with_annotation(Embedded::new("app::Gone")))
    );
    assert!(matches!(
        DocumentParser::new(registry).aliases("app::Order"),
        Err(Error::UnknownClass(class)) if class == "app::Gone"
    ));
}
