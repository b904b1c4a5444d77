// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use agenda_core::{Category, Commit, ContactId, ContactListStore, DraftField};

/// Adds a contact through the form operations, the same way a user would.
///
/// # Panics
///
/// Panics if the draft is not committed as a new contact.
pub fn add_contact(
    store: &mut ContactListStore,
    name: &str,
    phone: &str,
    category: Category,
) -> ContactId {
    store.begin_create();
    store.update_draft_field(DraftField::Name(name.to_string()));
    store.update_draft_field(DraftField::Phone(phone.to_string()));
    store.update_draft_field(DraftField::Category(category));
    match store.commit_draft() {
        Ok(Commit::Created(id)) => id,
        other => panic!("failed to add contact {name}: {other:?}"),
    }
}

/// Creates a store holding one work contact per name, with phones `"1"`, `"2"`, ...
#[must_use]
pub fn store_with(names: &[&str]) -> ContactListStore {
    let mut store = ContactListStore::new();
    for (i, name) in names.iter().enumerate() {
        add_contact(&mut store, name, &(i + 1).to_string(), Category::Work);
    }
    store
}
