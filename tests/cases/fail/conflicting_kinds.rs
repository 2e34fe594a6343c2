// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use docmap::Document;

#[derive(Document)]
#[document(index, nested)]
pub struct Post {
    #[property(type = "text")]
    pub title: String,
}

fn main() {}
