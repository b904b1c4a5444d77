// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use agenda_core::{Category, ContactListStore, DraftField};

use crate::common::store_with;

#[test]
fn cancel_form_is_idempotent() {
    let mut store = store_with(&["Ana"]);
    store.begin_create();
    store.update_draft_field(DraftField::Name("Bia".to_string()));

    store.cancel_form();
    let contacts = store.contacts().to_vec();
    let draft = store.draft().clone();
    let editing = store.editing();

    store.cancel_form();

    assert!(!store.is_form_visible());
    assert_eq!(store.contacts(), contacts.as_slice());
    assert_eq!(store.draft(), &draft);
    assert_eq!(store.editing(), editing);
}

#[test]
fn cancel_form_keeps_draft_and_editing() {
    let mut store = store_with(&["Ana"]);
    let id = store.id_at(0).unwrap();
    store.begin_edit(id).unwrap();
    store.update_draft_field(DraftField::Phone("42".to_string()));

    store.cancel_form();

    assert!(!store.is_form_visible());
    assert_eq!(store.editing(), Some(id));
    assert_eq!(store.draft().phone, "42");
    assert_eq!(store.contacts()[0].phone, "1");
}

#[test]
fn update_draft_field_does_not_validate() {
    let mut store = ContactListStore::with_default_category(Category::Personal);
    store.begin_create();
    store.update_draft_field(DraftField::Name("  ".to_string()));
    store.update_draft_field(DraftField::Category(Category::Family));

    assert_eq!(store.draft().name, "  ");
    assert_eq!(store.draft().category, Category::Family);
    assert!(store.is_empty());
}

#[test]
fn new_draft_resets_to_configured_category() {
    let mut store = ContactListStore::with_default_category(Category::Personal);
    store.begin_create();
    store.update_draft_field(DraftField::Category(Category::Family));
    store.cancel_form();

    store.begin_create();
    assert_eq!(store.draft().category, Category::Personal);
}
