// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use agenda_core::{Category, Commit, ContactListStore, DraftField};

use crate::common::{assert_contact, assert_names, store_with};

#[test]
fn create_appends_one_contact_and_closes_form() {
    let mut store = ContactListStore::new();
    store.begin_create();
    store.update_draft_field(DraftField::Name("Alice".to_string()));
    store.update_draft_field(DraftField::Phone("123".to_string()));

    let commit = store.commit_draft().unwrap();

    assert!(matches!(commit, Commit::Created(_)));
    assert_eq!(store.len(), 1);
    assert_contact(&store.contacts()[0], "Alice", "123", Category::Work);
    assert!(!store.is_form_visible());
    assert!(store.editing().is_none());
    assert_eq!(store.draft().name, "");
    assert_eq!(store.draft().phone, "");
}

#[test]
fn create_appends_at_the_end() {
    let mut store = store_with(&["Ana", "Bia"]);
    store.begin_create();
    store.update_draft_field(DraftField::Name("Caio".to_string()));
    store.update_draft_field(DraftField::Phone("3".to_string()));
    store.update_draft_field(DraftField::Category(Category::Family));
    let Commit::Created(id) = store.commit_draft().unwrap() else {
        panic!("expected a new contact");
    };

    assert_names(&store, &["Ana", "Bia", "Caio"]);
    assert_eq!(store.position(id), Some(2));
    assert_contact(store.get(id).unwrap(), "Caio", "3", Category::Family);
}

#[test]
fn empty_name_is_rejected() {
    let mut store = ContactListStore::new();
    store.begin_create();
    store.update_draft_field(DraftField::Phone("123".to_string()));

    assert_eq!(store.commit_draft().unwrap(), Commit::Rejected);
    assert!(store.is_empty());
    assert!(store.is_form_visible());
}

#[test]
fn whitespace_only_fields_are_rejected() {
    let mut store = store_with(&["Ana"]);
    store.begin_create();
    store.update_draft_field(DraftField::Name("   ".to_string()));
    store.update_draft_field(DraftField::Phone("123".to_string()));
    assert_eq!(store.commit_draft().unwrap(), Commit::Rejected);

    store.update_draft_field(DraftField::Name("Bia".to_string()));
    store.update_draft_field(DraftField::Phone("\t".to_string()));
    assert_eq!(store.commit_draft().unwrap(), Commit::Rejected);

    assert_names(&store, &["Ana"]);
    assert!(store.is_form_visible());
    assert_eq!(store.draft().name, "Bia");
}

#[test]
fn duplicates_are_allowed() {
    let mut store = ContactListStore::new();
    for _ in 0..2 {
        store.begin_create();
        store.update_draft_field(DraftField::Name("Ana".to_string()));
        store.update_draft_field(DraftField::Phone("1".to_string()));
        store.commit_draft().unwrap();
    }

    assert_names(&store, &["Ana", "Ana"]);
    assert_ne!(store.id_at(0), store.id_at(1));
}
