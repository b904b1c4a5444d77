// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use agenda_core::{Commit, ContactId, ContactListStore, DraftField, Pending, StoreError};

use crate::tui::dispatcher::{Action, Dispatcher, Screen};

/// State shared by every view of the contact book.
///
/// The contact list itself lives in [`ContactListStore`]; this store only adds
/// what the views need around it.
#[derive(Debug)]
pub struct AppStore {
    pub contacts: ContactListStore,
    pub screen: Screen,

    /// Row of the highlighted contact
    pub selected: usize,

    /// One-line feedback shown under the current screen
    pub status: Option<String>,

    /// Credit shown on the settings screen
    pub developer: String,
}

impl AppStore {
    pub fn new(contacts: ContactListStore, developer: impl Into<String>) -> Self {
        Self {
            contacts,
            screen: Screen::Contacts,
            selected: 0,
            status: None,
            developer: developer.into(),
        }
    }

    /// The id of the highlighted contact, resolved against the current list.
    pub fn selected_id(&self) -> Option<ContactId> {
        self.contacts.id_at(self.selected)
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().apply(action);
        }));
        dispatcher.register(callback);
    }

    fn apply(&mut self, action: &Action) {
        match action {
            Action::SwitchScreen(v) => {
                self.screen = *v;
                self.status = None;
            }
            Action::SelectContact(v) => {
                self.selected = (*v).min(self.contacts.len().saturating_sub(1));
            }
            Action::BeginCreate => {
                self.contacts.begin_create();
                self.status = None;
            }
            Action::BeginEdit(id) => {
                let result = self.contacts.begin_edit(*id);
                self.report(result);
            }
            Action::UpdateDraftName(v) => {
                self.contacts.update_draft_field(DraftField::Name(v.clone()));
            }
            Action::UpdateDraftPhone(v) => {
                self.contacts.update_draft_field(DraftField::Phone(v.clone()));
            }
            Action::UpdateDraftCategory(v) => {
                self.contacts.update_draft_field(DraftField::Category(*v));
            }
            Action::CommitDraft => match self.contacts.commit_draft() {
                Ok(Commit::Rejected) => {
                    self.status = Some("Name and phone are required".to_string());
                }
                Ok(Commit::Created(id)) => {
                    self.select(id);
                    self.status = Some("Contact added".to_string());
                }
                Ok(Commit::Updated(id)) => {
                    self.select(id);
                    self.status = Some("Changes saved".to_string());
                }
                Err(e) => self.report(Err(e)),
            },
            Action::CancelForm => {
                self.contacts.cancel_form();
                self.status = None;
            }
            Action::RequestDelete(id) => {
                let result = self.contacts.request_delete(*id).map(|_| ());
                self.report(result);
            }
            Action::RequestEraseAll => {
                self.contacts.request_clear();
            }
            Action::ConfirmPending => match self.contacts.confirm_pending() {
                Ok(Pending::Delete { name, .. }) => {
                    self.clamp_selection();
                    self.status = Some(format!("Removed \"{name}\""));
                }
                Ok(Pending::Clear) => {
                    tracing::info!("all contacts erased from the settings screen");
                    self.selected = 0;
                    self.status = Some("All contacts erased".to_string());
                }
                Err(e) => {
                    self.clamp_selection();
                    self.report(Err(e));
                }
            },
            Action::CancelPending => {
                if let Err(e) = self.contacts.cancel_pending() {
                    tracing::debug!(%e, "nothing to cancel");
                }
            }
        }
    }

    fn select(&mut self, id: ContactId) {
        if let Some(i) = self.contacts.position(id) {
            self.selected = i;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.contacts.len().saturating_sub(1));
    }

    fn report(&mut self, result: Result<(), StoreError>) {
        match result {
            Ok(()) => self.status = None,
            Err(e) => {
                tracing::warn!(%e, "contact operation failed");
                self.status = Some(e.to_string());
            }
        }
    }
}
