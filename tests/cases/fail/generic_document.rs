// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use docmap::Document;

#[derive(Document)]
#[document(object)]
pub struct Envelope<T> {
    #[property(type = "keyword")]
    pub kind: String,

    pub payload: T,
}

fn main() {}
