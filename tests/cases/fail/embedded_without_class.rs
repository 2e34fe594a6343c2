// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use docmap::Document;

#[derive(Document)]
#[document(index)]
pub struct Post {
    #[embedded(multiple)]
    pub tags: Vec<String>,
}

fn main() {}
