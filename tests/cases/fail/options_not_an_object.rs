// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use docmap::Document;

#[derive(Document)]
#[document(index)]
pub struct Post {
    #[property(type = "text", options = "[1, 2]")]
    pub title: String,
}

fn main() {}
