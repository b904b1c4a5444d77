// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use agenda_core::{Category, ContactId};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

/// The screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Contacts,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SwitchScreen(Screen),
    SelectContact(usize),
    BeginCreate,
    BeginEdit(ContactId),
    UpdateDraftName(String),
    UpdateDraftPhone(String),
    UpdateDraftCategory(Category),
    CommitDraft,
    CancelForm,
    RequestDelete(ContactId),
    RequestEraseAll,
    ConfirmPending,
    CancelPending,
}
