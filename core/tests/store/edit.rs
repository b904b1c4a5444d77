// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use agenda_core::{Category, Commit, DraftField, StoreError};

use crate::common::{add_contact, assert_contact, assert_names, store_with};

#[test]
fn edit_replaces_in_place() {
    let mut store = store_with(&["Ana", "Bia", "Caio"]);
    let before = store.contacts().to_vec();
    let id = store.id_at(1).unwrap();

    store.begin_edit(id).unwrap();
    store.update_draft_field(DraftField::Phone("999".to_string()));
    assert_eq!(store.commit_draft().unwrap(), Commit::Updated(id));

    assert_eq!(store.len(), 3);
    assert_eq!(store.contacts()[0], before[0]);
    assert_eq!(store.contacts()[2], before[2]);
    assert_contact(&store.contacts()[1], "Bia", "999", Category::Work);
    assert_eq!(store.contacts()[1].id(), id);
    assert!(!store.is_form_visible());
    assert!(store.editing().is_none());
}

#[test]
fn begin_edit_copies_contact_into_draft() {
    let mut store = store_with(&["Ana"]);
    let id = add_contact(&mut store, "Bia", "22", Category::Personal);

    store.begin_edit(id).unwrap();

    assert_eq!(store.editing(), Some(id));
    assert!(store.is_form_visible());
    assert_eq!(store.draft().name, "Bia");
    assert_eq!(store.draft().phone, "22");
    assert_eq!(store.draft().category, Category::Personal);
}

#[test]
fn edit_without_changes_is_a_round_trip() {
    let mut store = store_with(&["Ana", "Bia", "Caio"]);
    let before = store.contacts().to_vec();

    for i in 0..before.len() {
        store.begin_edit(store.id_at(i).unwrap()).unwrap();
        store.commit_draft().unwrap();
    }

    assert_eq!(store.contacts(), before.as_slice());
}

#[test]
fn rejected_edit_keeps_original() {
    let mut store = store_with(&["Ana"]);
    let id = store.id_at(0).unwrap();
    store.begin_edit(id).unwrap();
    store.update_draft_field(DraftField::Name(String::new()));

    assert_eq!(store.commit_draft().unwrap(), Commit::Rejected);
    assert_names(&store, &["Ana"]);
    assert_eq!(store.editing(), Some(id));
}

#[test]
fn begin_edit_unknown_contact_fails() {
    let mut store = store_with(&["Ana"]);
    let id = store.id_at(0).unwrap();
    store.delete(id).unwrap();

    assert_eq!(store.begin_edit(id), Err(StoreError::ContactNotFound(id)));
    assert!(!store.is_form_visible());
}

#[test]
fn delete_of_another_contact_does_not_redirect_edit() {
    let mut store = store_with(&["Ana", "Bia", "Caio"]);
    let caio = store.id_at(2).unwrap();
    store.begin_edit(caio).unwrap();
    store.update_draft_field(DraftField::Name("Caio Lima".to_string()));

    store.delete(store.id_at(0).unwrap()).unwrap();

    assert_eq!(store.commit_draft().unwrap(), Commit::Updated(caio));
    assert_names(&store, &["Bia", "Caio Lima"]);
}

#[test]
fn delete_of_edited_contact_makes_draft_stale() {
    let mut store = store_with(&["Ana", "Bia"]);
    let bia = store.id_at(1).unwrap();
    store.begin_edit(bia).unwrap();
    store.delete(bia).unwrap();

    assert_eq!(store.commit_draft(), Err(StoreError::StaleDraft(bia)));
    assert_names(&store, &["Ana"]);
}
