// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! Field attributes are marker-style and parsed by hand with
//! `parse_nested_meta`, the way syn intends for small attribute grammars.
//!
//! | Attribute | Annotation |
//! |-----------|------------|
//! | `#[property(type = "text", name = "..", options = "..")]` | `Property` |
//! | `#[embedded(class = Target, name = "..", multiple, options = "..")]` | `Embedded` |
//! | `#[hash_map]` / `#[hash_map(name = "..", options = "..")]` | `HashMapField` |
//! | `#[id]`, `#[version]` | `MetaField` |
//! | `#[routing]` / `#[routing(required)]` | `MetaField` with `{required}` |
//!
//! Every meta attribute also accepts `name = ".."`. Unrelated attributes are
//! ignored. A field may carry several annotations; the compiler picks one by
//! priority.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Attribute, Field, Ident, LitStr, Path, ext::IdentExt, meta::ParseNestedMeta};

use super::{options::RawOptions, visibility::FieldVisibility};

/// Meta annotation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKind {
    /// `#[id]`.
    Id,
    /// `#[routing]`.
    Routing,
    /// `#[version]`.
    Version
}

/// One parsed field annotation.
#[derive(Debug, Clone)]
pub enum AnnotationDef {
    /// `#[property(...)]`.
    Property {
        /// Property type.
        ty:      String,
        /// Explicit schema name.
        name:    Option<String>,
        /// Raw options.
        options: RawOptions
    },

    /// `#[embedded(...)]`.
    Embedded {
        /// Target struct.
        class:    Path,
        /// Explicit schema name.
        name:     Option<String>,
        /// Collection of targets.
        multiple: bool,
        /// Raw options.
        options:  RawOptions
    },

    /// `#[hash_map(...)]`.
    HashMap {
        /// Explicit schema name.
        name:    Option<String>,
        /// Raw options.
        options: RawOptions
    },

    /// `#[id]`, `#[routing]`, `#[version]`.
    Meta {
        /// Meta kind.
        kind:     MetaKind,
        /// Explicit meta name.
        name:     Option<String>,
        /// `routing(required)`.
        required: bool
    }
}

fn lit_string(meta: &ParseNestedMeta<'_>) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}

fn lit_options(meta: &ParseNestedMeta<'_>) -> syn::Result<RawOptions> {
    let lit: LitStr = meta.value()?.parse()?;
    RawOptions::from_lit(&lit)
}

fn option_tokens(options: &RawOptions) -> Option<TokenStream> {
    (!options.is_empty()).then(|| {
        let map = options.to_tokens();
        quote! { .with_options(#map) }
    })
}

fn name_tokens(name: Option<&String>) -> Option<TokenStream> {
    name.map(|name| quote! { .with_name(#name) })
}

impl AnnotationDef {
    /// Parse one attribute, returning `None` for unrelated attributes.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Option<Self>> {
        let path = attr.path();
        let parsed = if path.is_ident("property") {
            Self::parse_property(attr)?
        } else if path.is_ident("embedded") {
            Self::parse_embedded(attr)?
        } else if path.is_ident("hash_map") {
            Self::parse_hash_map(attr)?
        } else if path.is_ident("id") {
            Self::parse_meta(attr, MetaKind::Id)?
        } else if path.is_ident("routing") {
            Self::parse_meta(attr, MetaKind::Routing)?
        } else if path.is_ident("version") {
            Self::parse_meta(attr, MetaKind::Version)?
        } else {
            return Ok(None);
        };
        Ok(Some(parsed))
    }

    fn parse_property(attr: &Attribute) -> syn::Result<Self> {
        let mut ty = None;
        let mut name = None;
        let mut options = RawOptions::default();

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("type") {
                ty = Some(lit_string(&meta)?);
            } else if meta.path.is_ident("name") {
                name = Some(lit_string(&meta)?);
            } else if meta.path.is_ident("options") {
                options = lit_options(&meta)?;
            } else {
                return Err(syn::Error::new_spanned(
                    &meta.path,
                    "unknown property option, expected `type`, `name` or `options`"
                ));
            }
            Ok(())
        })?;

        let ty = ty.ok_or_else(|| {
            syn::Error::new_spanned(
                attr.path(),
                "property requires `type`, e.g. #[property(type = \"text\")]"
            )
        })?;
        Ok(Self::Property {
            ty,
            name,
            options
        })
    }

    fn parse_embedded(attr: &Attribute) -> syn::Result<Self> {
        let mut class = None;
        let mut name = None;
        let mut multiple = false;
        let mut options = RawOptions::default();

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("class") {
                class = Some(meta.value()?.parse::<Path>()?);
            } else if meta.path.is_ident("name") {
                name = Some(lit_string(&meta)?);
            } else if meta.path.is_ident("multiple") {
                multiple = true;
            } else if meta.path.is_ident("options") {
                options = lit_options(&meta)?;
            } else {
                return Err(syn::Error::new_spanned(
                    &meta.path,
                    "unknown embedded option, expected `class`, `name`, `multiple` or `options`"
                ));
            }
            Ok(())
        })?;

        let class = class.ok_or_else(|| {
            syn::Error::new_spanned(
                attr.path(),
                "embedded requires `class`, e.g. #[embedded(class = Address)]"
            )
        })?;
        Ok(Self::Embedded {
            class,
            name,
            multiple,
            options
        })
    }

    fn parse_hash_map(attr: &Attribute) -> syn::Result<Self> {
        let mut name = None;
        let mut options = RawOptions::default();

        if matches!(attr.meta, syn::Meta::List(_)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    name = Some(lit_string(&meta)?);
                } else if meta.path.is_ident("options") {
                    options = lit_options(&meta)?;
                } else {
                    return Err(syn::Error::new_spanned(
                        &meta.path,
                        "unknown hash_map option, expected `name` or `options`"
                    ));
                }
                Ok(())
            })?;
        }

        Ok(Self::HashMap {
            name,
            options
        })
    }

    fn parse_meta(attr: &Attribute, kind: MetaKind) -> syn::Result<Self> {
        let mut name = None;
        let mut required = false;

        if matches!(attr.meta, syn::Meta::List(_)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    name = Some(lit_string(&meta)?);
                } else if meta.path.is_ident("required") {
                    if kind != MetaKind::Routing {
                        return Err(syn::Error::new_spanned(
                            &meta.path,
                            "`required` is only supported on #[routing]"
                        ));
                    }
                    required = true;
                } else {
                    return Err(syn::Error::new_spanned(&meta.path, "unknown meta field option"));
                }
                Ok(())
            })?;
        }

        Ok(Self::Meta {
            kind,
            name,
            required
        })
    }

    /// Embedded target, if any.
    pub fn embedded_class(&self) -> Option<&Path> {
        match self {
            Self::Embedded {
                class, ..
            } => Some(class),
            _ => None
        }
    }

    /// Expression evaluating to the runtime annotation.
    pub fn to_tokens(&self) -> TokenStream {
        match self {
            Self::Property {
                ty,
                name,
                options
            } => {
                let name = name_tokens(name.as_ref());
                let options = option_tokens(options);
                quote! { ::docmap::annotation::Property::new(#ty) #name #options }
            }
            Self::Embedded {
                class,
                name,
                multiple,
                options
            } => {
                let name = name_tokens(name.as_ref());
                let multiple = multiple.then(|| quote! { .multiple() });
                let options = option_tokens(options);
                quote! {
                    ::docmap::annotation::Embedded::new(
                        <#class as ::docmap::reflection::Reflect>::CLASS_NAME
                    ) #name #multiple #options
                }
            }
            Self::HashMap {
                name,
                options
            } => {
                let name = name_tokens(name.as_ref());
                let options = option_tokens(options);
                quote! {
                    <::docmap::annotation::HashMapField as ::std::default::Default>::default()
                        #name #options
                }
            }
            Self::Meta {
                kind,
                name,
                required
            } => {
                let name = name_tokens(name.as_ref());
                let constructor = match kind {
                    MetaKind::Id => quote! { id() },
                    MetaKind::Routing => quote! { routing(#required) },
                    MetaKind::Version => quote! { version() }
                };
                quote! { ::docmap::annotation::MetaField::#constructor #name }
            }
        }
    }
}

/// Render a type without token spacing, e.g. `Vec<&'a str>`.
fn compact_type(ty: &syn::Type) -> String {
    let spaced = ty.to_token_stream().to_string();
    let chars: Vec<char> = spaced.chars().collect();
    let word = |c: char| c.is_alphanumeric() || c == '_' || c == '\'';
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            c != ' ' || (i > 0 && i + 1 < chars.len() && word(chars[i - 1]) && word(chars[i + 1]))
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Field definition with all parsed annotations.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Declared type as written, with whitespace kept only between words.
    pub declared_type: String,

    /// Field visibility.
    pub visibility: FieldVisibility,

    /// Annotations in declaration order.
    pub annotations: Vec<AnnotationDef>
}

impl FieldDef {
    /// Parse a named struct field.
    ///
    /// # Errors
    ///
    /// Every malformed annotation attribute on the field, accumulated.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Document fields must be named").with_span(field)
        })?;

        let mut errors = darling::Error::accumulator();
        let annotations = field
            .attrs
            .iter()
            .filter_map(|attr| errors.handle(AnnotationDef::from_attr(attr).map_err(Into::into)))
            .flatten()
            .collect();

        errors.finish_with(Self {
            ident,
            declared_type: compact_type(&field.ty),
            visibility: FieldVisibility::from_syn(&field.vis),
            annotations
        })
    }

    /// Field name without the raw identifier prefix.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Expression evaluating to the runtime field descriptor.
    pub fn to_tokens(&self) -> TokenStream {
        let name = self.name();
        let visibility = self.visibility.to_tokens();
        let declared_type = &self.declared_type;
        let annotations = self.annotations.iter().map(AnnotationDef::to_tokens);
        quote! {
            ::docmap::reflection::FieldDescriptor::new(#name, #visibility)
                .with_type(#declared_type)
                #(.with_annotation(#annotations))*
        }
    }
}
