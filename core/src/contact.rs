// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use uuid::Uuid;

/// Stable identifier of a contact, assigned when the contact is first committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(Uuid);

impl ContactId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.simple().fmt(f)
    }
}

/// Category of a contact.
///
/// Parsed case-insensitively from and displayed as the lowercase name; the
/// message is the label shown in the interface.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumMessage,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase", try_from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    /// Colleagues, clients and the like.
    #[default]
    #[strum(message = "Work")]
    Work,

    /// Friends.
    #[strum(message = "Personal")]
    Personal,

    /// Relatives.
    #[strum(message = "Family")]
    Family,
}

impl TryFrom<String> for Category {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A committed contact record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    pub name: String,
    pub phone: String,
    pub category: Category,
}

impl Contact {
    pub(crate) fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            category: draft.category,
        }
    }

    /// The stable identifier of this contact.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Copies the editable fields into a draft.
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            category: self.category,
        }
    }
}

/// The contact being composed or edited, not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub category: Category,
}

impl ContactDraft {
    /// A blank draft with the given category preselected.
    pub fn blank(category: Category) -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            category,
        }
    }

    /// Whether both name and phone have content once surrounding whitespace is ignored.
    pub fn is_committable(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }

    /// Sets a single field.
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Name(v) => self.name = v,
            DraftField::Phone(v) => self.phone = v,
            DraftField::Category(v) => self.category = v,
        }
    }
}

/// A single field update of a [`ContactDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    Phone(String),
    Category(Category),
}
