// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use agenda_core::{Category, Contact, ContactListStore};

/// Asserts the editable fields of a contact.
pub fn assert_contact(contact: &Contact, name: &str, phone: &str, category: Category) {
    assert_eq!(contact.name, name, "Contact name mismatch");
    assert_eq!(contact.phone, phone, "Contact phone mismatch");
    assert_eq!(contact.category, category, "Contact category mismatch");
}

/// Asserts the list holds exactly these names, in this order.
pub fn assert_names(store: &ContactListStore, expected: &[&str]) {
    let names: Vec<&str> = store.contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, expected, "Contact order mismatch");
}
