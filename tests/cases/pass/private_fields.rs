// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use docmap::{ClassRegistry, Document, DocumentParser, Reflect};

#[derive(Document)]
#[document(index, methods(getEmail, setEmail, isVerified, setVerified))]
pub struct Account {
    #[property(type = "keyword")]
    email: String,

    #[property(type = "boolean")]
    pub(crate) verified: bool,

    #[routing(required)]
    pub tenant: String,
}

#[allow(non_snake_case)]
impl Account {
    pub fn getEmail(&self) -> &str {
        &self.email
    }

    pub fn setEmail(&mut self, email: String) {
        self.email = email;
    }

    pub fn isVerified(&self) -> bool {
        self.verified
    }

    pub fn setVerified(&mut self, verified: bool) {
        self.verified = verified;
    }
}

fn main() {
    let mut registry = ClassRegistry::new();
    registry.register::<Account>();

    let document = DocumentParser::new(registry)
        .parse(Account::CLASS_NAME)
        .unwrap();
    let verified = document.aliases["verified"].methods.as_ref().unwrap();
    assert_eq!(verified.getter, "isVerified");
    assert_eq!(document.mapping["_routing"]["required"], true);
}
