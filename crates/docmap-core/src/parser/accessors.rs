// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Getter/setter inference for non-public fields.
//!
//! | Accessor | Expected name | Fallback |
//! |----------|---------------|----------|
//! | setter | `set{Field}` | none |
//! | getter | `get{Field}` | `is{Field}` for boolean fields |
//!
//! `{Field}` is the PascalCase field name, so `first_name` and `firstName`
//! both resolve to `setFirstName`.

use serde::{Deserialize, Serialize};

use super::DocumentParser;
use crate::{
    caser::to_pascal_case,
    error::{Accumulator, Error, Result},
    reflection::{FieldInfo, ReflectionProvider}
};

/// Accessor method names of a non-public field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessors {
    /// Getter method.
    pub getter: String,
    /// Setter method.
    pub setter: String
}

impl<P: ReflectionProvider> DocumentParser<P> {
    /// Infer accessors of `field` on `class`.
    ///
    /// Reports the missing setter and the missing getter together.
    pub(super) fn resolve_accessors(&self, class: &str, field: &FieldInfo) -> Result<Accessors> {
        let suffix = to_pascal_case(&field.name);
        let mut errors = Accumulator::new();

        let setter = format!("set{suffix}");
        if !self.provider.has_method(class, &setter)? {
            errors.push(Error::MissingSetter {
                class:  class.to_owned(),
                field:  field.name.clone(),
                setter: setter.clone()
            });
        }

        let getter = format!("get{suffix}");
        let is_getter = field.is_boolean().then(|| format!("is{suffix}"));
        let resolved = if self.provider.has_method(class, &getter)? {
            Some(getter.clone())
        } else {
            match is_getter {
                Some(ref is_getter) if self.provider.has_method(class, is_getter)? => {
                    Some(is_getter.clone())
                }
                _ => None
            }
        };

        match resolved {
            Some(getter) => errors.finish_with(Accessors {
                getter,
                setter
            }),
            None => {
                errors.push(Error::MissingGetter {
                    class: class.to_owned(),
                    field: field.name.clone(),
                    getter,
                    is_getter
                });
                errors.finish_with(Accessors {
                    getter: String::new(),
                    setter
                })
            }
        }
    }
}
