// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Category, Contact, ContactDraft, ContactId, DraftField, StoreError};

/// Result of [`ContactListStore::commit_draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The draft is missing a name or a phone; nothing changed and the form stays open.
    Rejected,

    /// A new contact was appended.
    Created(ContactId),

    /// An existing contact was replaced in place.
    Updated(ContactId),
}

/// A destructive request waiting for the user to confirm or cancel it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    /// Remove a single contact.
    Delete { id: ContactId, name: String },

    /// Remove every contact.
    Clear,
}

impl Pending {
    pub fn title(&self) -> &'static str {
        match self {
            Pending::Delete { .. } => "Delete contact?",
            Pending::Clear => "Confirm",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Pending::Delete { name, .. } => format!("Remove \"{name}\"?"),
            Pending::Clear => "Erase all contacts?".to_string(),
        }
    }
}

/// A collaborator that asks the user to confirm a [`Pending`] request.
pub trait Confirm {
    fn confirm(&mut self, request: &Pending) -> bool;
}

impl<F: FnMut(&Pending) -> bool> Confirm for F {
    fn confirm(&mut self, request: &Pending) -> bool {
        self(request)
    }
}

/// Owner of the ordered contact list and of the draft shown in the contact form.
#[derive(Debug, Default)]
pub struct ContactListStore {
    contacts: Vec<Contact>,
    draft: ContactDraft,
    editing: Option<ContactId>,
    form_visible: bool,
    pending: Option<Pending>,
    default_category: Category,
}

impl ContactListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose new drafts start with the given category.
    pub fn with_default_category(category: Category) -> Self {
        Self {
            draft: ContactDraft::blank(category),
            default_category: category,
            ..Self::default()
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    /// Resolves an id to its current position in the list.
    pub fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id() == id)
    }

    /// The id of the contact currently at `index`.
    pub fn id_at(&self, index: usize) -> Option<ContactId> {
        self.contacts.get(index).map(Contact::id)
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// The contact being edited, or `None` when the draft is a new contact.
    pub fn editing(&self) -> Option<ContactId> {
        self.editing
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    pub fn default_category(&self) -> Category {
        self.default_category
    }

    /// Opens the form with a blank draft for a new contact.
    pub fn begin_create(&mut self) {
        tracing::debug!(category = %self.default_category, "begin creating a contact");
        self.draft = ContactDraft::blank(self.default_category);
        self.editing = None;
        self.form_visible = true;
    }

    /// Opens the form with a copy of an existing contact.
    pub fn begin_edit(&mut self, id: ContactId) -> Result<(), StoreError> {
        let contact = self.get(id).ok_or(StoreError::ContactNotFound(id))?;
        tracing::debug!(%id, "begin editing a contact");
        self.draft = contact.to_draft();
        self.editing = Some(id);
        self.form_visible = true;
        Ok(())
    }

    pub fn update_draft_field(&mut self, field: DraftField) {
        self.draft.apply(field);
    }

    /// Validates the draft and applies it to the list.
    ///
    /// Values are stored as typed; trimming only decides whether they are empty.
    pub fn commit_draft(&mut self) -> Result<Commit, StoreError> {
        if !self.draft.is_committable() {
            tracing::debug!("draft rejected: name and phone are required");
            return Ok(Commit::Rejected);
        }

        let draft = std::mem::replace(&mut self.draft, ContactDraft::blank(self.default_category));
        let commit = match self.editing {
            None => {
                let id = ContactId::new();
                self.contacts.push(Contact::from_draft(id, draft));
                Commit::Created(id)
            }
            Some(id) => match self.position(id) {
                Some(i) => {
                    self.contacts[i] = Contact::from_draft(id, draft);
                    Commit::Updated(id)
                }
                None => {
                    self.draft = draft; // keep what the user typed
                    return Err(StoreError::StaleDraft(id));
                }
            },
        };

        tracing::debug!(?commit, total = self.contacts.len(), "draft committed");
        self.editing = None;
        self.form_visible = false;
        Ok(commit)
    }

    /// Hides the form. The draft and the edited id are kept as they are.
    pub fn cancel_form(&mut self) {
        self.form_visible = false;
    }

    /// Removes a contact, shifting the following ones left by one.
    pub fn delete(&mut self, id: ContactId) -> Result<Contact, StoreError> {
        let index = self.position(id).ok_or(StoreError::ContactNotFound(id))?;
        let removed = self.contacts.remove(index);
        tracing::debug!(%id, index, "contact deleted");
        Ok(removed)
    }

    /// Removes every contact and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.contacts.len();
        self.contacts.clear();
        tracing::debug!(count, "all contacts erased");
        count
    }

    /// Stages a confirmation for deleting `id`; resolve it with
    /// [`Self::confirm_pending`] or [`Self::cancel_pending`].
    pub fn request_delete(&mut self, id: ContactId) -> Result<&Pending, StoreError> {
        let contact = self.get(id).ok_or(StoreError::ContactNotFound(id))?;
        let name = contact.name.clone();
        Ok(self.pending.insert(Pending::Delete { id, name }))
    }

    /// Stages a confirmation for erasing the whole list.
    pub fn request_clear(&mut self) -> &Pending {
        self.pending.insert(Pending::Clear)
    }

    /// Carries out the staged request.
    pub fn confirm_pending(&mut self) -> Result<Pending, StoreError> {
        let pending = self.pending.take().ok_or(StoreError::NoPendingRequest)?;
        match &pending {
            Pending::Delete { id, .. } => {
                self.delete(*id)?;
            }
            Pending::Clear => {
                self.clear();
            }
        }
        Ok(pending)
    }

    /// Drops the staged request without touching the list.
    pub fn cancel_pending(&mut self) -> Result<Pending, StoreError> {
        self.pending.take().ok_or(StoreError::NoPendingRequest)
    }

    /// Asks `confirm` right away and deletes on approval. Returns whether the contact was removed.
    pub fn request_delete_with(
        &mut self,
        id: ContactId,
        confirm: &mut impl Confirm,
    ) -> Result<bool, StoreError> {
        let approved = confirm.confirm(self.request_delete(id)?);
        if approved {
            self.confirm_pending()?;
        } else {
            self.cancel_pending()?;
        }
        Ok(approved)
    }
}
