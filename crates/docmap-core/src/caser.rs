// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming convention conversions.
//!
//! Schema keys are snake_case, accessor names are camelCase. Both
//! conversions are pure and total.
//!
//! Digits stay attached to the word they belong to, so names that are
//! already snake_case, such as `address_line2`, pass through unchanged. An
//! uppercase letter after a digit still starts a new word.

use convert_case::{Boundary, Case, Casing};

fn convert(s: &str, case: Case) -> String {
    s.remove_boundaries(&[Boundary::LowerDigit, Boundary::UpperDigit, Boundary::DigitLower])
        .to_case(case)
}

/// Convert `CamelCase` / `mixedCase` to `snake_case`.
///
/// ```rust
/// use docmap_core::caser::to_snake_case;
///
/// assert_eq!(to_snake_case("firstName"), "first_name");
/// assert_eq!(to_snake_case("BlogPost"), "blog_post");
/// ```
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    convert(s, Case::Snake)
}

/// Convert `snake_case` to `camelCase`.
///
/// ```rust
/// use docmap_core::caser::to_camel_case;
///
/// assert_eq!(to_camel_case("first_name"), "firstName");
/// ```
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    convert(s, Case::Camel)
}

/// Convert any field name to `PascalCase`, as used after accessor prefixes.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    convert(s, Case::Pascal)
}
