// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use agenda_core::{Pending, StoreError};

use crate::common::store_with;

#[test]
fn clear_removes_everything() {
    let mut store = store_with(&["Ana", "Bia", "Caio"]);
    assert_eq!(store.clear(), 3);
    assert!(store.is_empty());
    assert_eq!(store.clear(), 0);
}

#[test]
fn confirmed_clear_request() {
    let mut store = store_with(&["Ana", "Bia"]);
    assert_eq!(store.request_clear().message(), "Erase all contacts?");

    assert_eq!(store.confirm_pending().unwrap(), Pending::Clear);
    assert!(store.is_empty());
}

#[test]
fn cancelled_clear_request() {
    let mut store = store_with(&["Ana", "Bia"]);
    store.request_clear();
    store.cancel_pending().unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.cancel_pending(), Err(StoreError::NoPendingRequest));
}

#[test]
fn clear_makes_open_edit_stale() {
    let mut store = store_with(&["Ana"]);
    let id = store.id_at(0).unwrap();
    store.begin_edit(id).unwrap();
    store.clear();

    assert_eq!(store.commit_draft(), Err(StoreError::StaleDraft(id)));
}
