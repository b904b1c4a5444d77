// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

//! Core of Agenda: the in-memory contact list and the draft being edited.
//!
//! Everything lives for one session only. The [`ContactListStore`] is the
//! single owner of mutable state; views read from it and call its operations.

mod config;
mod contact;
mod error;
mod store;

pub use crate::config::{APP_NAME, Config};
pub use crate::contact::{Category, Contact, ContactDraft, ContactId, DraftField};
pub use crate::error::StoreError;
pub use crate::store::{Commit, Confirm, ContactListStore, Pending};
