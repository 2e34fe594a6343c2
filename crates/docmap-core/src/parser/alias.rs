// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Alias table resolution.
//!
//! The alias table maps schema field names to what a serializer needs to
//! read and write the matching struct field:
//!
//! ```text
//! "first_name" → { propertyName: "firstName", propertyType: "private",
//!                  type: "text", isHashMap: false,
//!                  methods: { getter: "getFirstName", setter: "setFirstName" } }
//! "address"    → { propertyName: "address", propertyType: "public",
//!                  type: "object", multiple: false, isHashMap: false,
//!                  aliases: { ... }, namespace: "app::Address" }
//! ```

use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{trace, warn};

use super::{Accessors, DocumentParser, enter};
use crate::{
    annotation::{FieldAnnotation, HashMapField},
    error::{Accumulator, Error, Result},
    reflection::{FieldInfo, ReflectionProvider, Visibility}
};

/// Alias table keyed by schema field name.
pub type AliasTable = BTreeMap<String, AliasEntry>;

/// Meta field settings keyed by meta field name (`_id`, `_routing`, ...).
pub type MetaFields = BTreeMap<String, Map<String, Value>>;

/// How a serializer reaches the struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Direct field access.
    Public,
    /// Access through [`Accessors`].
    Private
}

/// One row of the alias table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasEntry {
    /// Struct field name.
    pub property_name: String,

    /// Access mode.
    pub property_type: PropertyType,

    /// Property type, `object`/`nested` for embedded fields, `hash_map` for
    /// hash map fields.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,

    /// Whether the field is a hash map.
    pub is_hash_map: bool,

    /// Accessors of non-public fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Accessors>,

    /// Embedded fields: whether the field holds a collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,

    /// Embedded fields: alias table of the target class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<AliasTable>,

    /// Embedded fields: fully-qualified target class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>
}

impl AliasEntry {
    fn new(field: &FieldInfo, annotation: &FieldAnnotation) -> Self {
        let ty = match annotation {
            FieldAnnotation::Property(property) if !property.ty.is_empty() => {
                Some(property.ty.clone())
            }
            FieldAnnotation::HashMap(_) => Some(HashMapField::ALIAS_TYPE.to_owned()),
            _ => None
        };

        Self {
            property_name: field.name.clone(),
            property_type: PropertyType::Public,
            ty,
            is_hash_map: matches!(annotation, FieldAnnotation::HashMap(_)),
            methods: None,
            multiple: None,
            aliases: None,
            namespace: None
        }
    }

    /// Whether the entry describes an embedded object.
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.namespace.is_some()
    }
}

impl<P: ReflectionProvider> DocumentParser<P> {
    /// Alias table of `class`, computed once and cached.
    ///
    /// Meta fields are not part of this table.
    pub fn aliases(&mut self, class: &str) -> Result<Arc<AliasTable>> {
        self.cached_aliases(class, &mut Vec::new())
    }

    /// Alias table of `class` including meta field markers, plus the meta
    /// field settings.
    ///
    /// Always recomputed; the result never enters the shared cache.
    pub fn aliases_with_meta_fields(&mut self, class: &str) -> Result<(AliasTable, MetaFields)> {
        let mut meta_fields = MetaFields::new();
        let aliases = self.resolve_aliases(class, Some(&mut meta_fields), &mut Vec::new())?;
        Ok((aliases, meta_fields))
    }

    fn cached_aliases(&mut self, class: &str, stack: &mut Vec<String>) -> Result<Arc<AliasTable>> {
        if let Some(aliases) = self.cache.aliases.get(class) {
            trace!(class, "alias cache hit");
            return Ok(Arc::clone(aliases));
        }
        let aliases = Arc::new(self.resolve_aliases(class, None, stack)?);
        self.cache
            .aliases
            .insert(class.to_owned(), Arc::clone(&aliases));
        Ok(aliases)
    }

    fn resolve_aliases(
        &mut self,
        class: &str,
        mut meta_fields: Option<&mut MetaFields>,
        stack: &mut Vec<String>
    ) -> Result<AliasTable> {
        enter(stack, class)?;
        let mut errors = Accumulator::new();
        let mut table = AliasTable::new();

        let fields = errors.handle(self.fields(class)).unwrap_or_default();
        for field in fields.iter() {
            let Some(annotation) = errors.handle(self.classify(field)).flatten() else {
                if let Some(meta_fields) = meta_fields.as_deref_mut()
                    && let Some(Some(FieldAnnotation::Meta(meta))) =
                        errors.handle(self.classify_meta(field))
                {
                    let name = meta.get_name();
                    meta_fields.insert(name.clone(), meta.settings.clone());
                    let marker = FieldAnnotation::Meta(meta);
                    if let Some(entry) =
                        errors.handle(self.alias_entry(class, field, &marker, stack))
                    {
                        insert_alias(&mut table, class, name, entry);
                    }
                }
                continue;
            };

            let name = annotation.resolved_name(&field.name);
            if let Some(entry) = errors.handle(self.alias_entry(class, field, &annotation, stack)) {
                insert_alias(&mut table, class, name, entry);
            }
        }

        stack.pop();
        errors.finish_with(table)
    }

    /// Build the entry of one classified field.
    fn alias_entry(
        &mut self,
        class: &str,
        field: &FieldInfo,
        annotation: &FieldAnnotation,
        stack: &mut Vec<String>
    ) -> Result<AliasEntry> {
        let mut errors = Accumulator::new();
        let mut entry = AliasEntry::new(field, annotation);

        match &field.visibility {
            Visibility::Public => {}
            Visibility::Protected | Visibility::Private => {
                entry.property_type = PropertyType::Private;
                entry.methods = errors.handle(self.resolve_accessors(class, field));
            }
            Visibility::Restricted(_) => errors.push(Error::WrongPropertyType {
                class:      field.declaring_class.clone(),
                field:      field.name.clone(),
                visibility: field.visibility.to_string()
            })
        }

        if let FieldAnnotation::Embedded(embedded) = annotation
            && let Some(object) = errors.handle(self.object_mapping(&embedded.class))
        {
            entry.ty = Some(object.ty.clone());
            entry.multiple = Some(embedded.multiple);
            entry.aliases = errors
                .handle(self.cached_aliases(&embedded.class, stack))
                .map(|aliases| (*aliases).clone());
            entry.namespace = Some(embedded.class.clone());
        }

        errors.finish_with(entry)
    }
}

fn insert_alias(table: &mut AliasTable, class: &str, name: String, entry: AliasEntry) {
    let property = entry.property_name.clone();
    if let Some(previous) = table.insert(name.clone(), entry) {
        warn!(
            class,
            name = %name,
            previous = %previous.property_name,
            property = %property,
            "alias name collision, last field wins"
        );
    }
}
