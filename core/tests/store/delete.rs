// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use agenda_core::{Pending, StoreError};

use crate::common::{assert_names, store_with};

#[test]
fn confirmed_delete_removes_exactly_one() {
    let mut store = store_with(&["Ana", "Bia", "Caio", "Davi"]);
    let before = store.contacts().to_vec();
    let id = store.id_at(1).unwrap();

    store.request_delete(id).unwrap();
    let resolved = store.confirm_pending().unwrap();

    assert_eq!(
        resolved,
        Pending::Delete {
            id,
            name: "Bia".to_string()
        }
    );
    assert_eq!(store.len(), 3);
    assert_eq!(store.contacts()[0], before[0]);
    assert_eq!(store.contacts()[1], before[2]);
    assert_eq!(store.contacts()[2], before[3]);
    assert!(store.pending().is_none());
}

#[test]
fn cancelled_delete_keeps_list() {
    let mut store = store_with(&["Ana", "Bia"]);
    let before = store.contacts().to_vec();

    store.request_delete(store.id_at(0).unwrap()).unwrap();
    store.cancel_pending().unwrap();

    assert_eq!(store.contacts(), before.as_slice());
    assert!(store.pending().is_none());
}

#[test]
fn delete_with_collaborator() {
    let mut store = store_with(&["Ana", "Bia", "Caio"]);
    let mut asked = Vec::new();

    let mut decline = |p: &Pending| {
        asked.push(p.message());
        false
    };
    let removed = store
        .request_delete_with(store.id_at(2).unwrap(), &mut decline)
        .unwrap();
    assert!(!removed);
    assert_names(&store, &["Ana", "Bia", "Caio"]);

    let mut accept = |p: &Pending| {
        asked.push(p.message());
        true
    };
    let removed = store
        .request_delete_with(store.id_at(0).unwrap(), &mut accept)
        .unwrap();
    assert!(removed);
    assert_names(&store, &["Bia", "Caio"]);

    assert_eq!(asked, vec!["Remove \"Caio\"?", "Remove \"Ana\"?"]);
}

#[test]
fn delete_unknown_contact_fails() {
    let mut store = store_with(&["Ana"]);
    let id = store.id_at(0).unwrap();
    store.delete(id).unwrap();

    assert_eq!(store.delete(id), Err(StoreError::ContactNotFound(id)));
    assert!(matches!(
        store.request_delete(id),
        Err(StoreError::ContactNotFound(_))
    ));
}

#[test]
fn confirm_after_contact_vanished_fails() {
    let mut store = store_with(&["Ana"]);
    let id = store.id_at(0).unwrap();
    store.request_delete(id).unwrap();
    store.clear();

    assert_eq!(store.confirm_pending(), Err(StoreError::ContactNotFound(id)));
    assert!(store.pending().is_none());
}
