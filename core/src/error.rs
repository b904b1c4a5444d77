// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use crate::ContactId;

/// Errors raised by [`crate::ContactListStore`] operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No contact with this id exists in the list.
    #[error("contact {0} not found")]
    ContactNotFound(ContactId),

    /// The contact being edited was removed while the form was open.
    #[error("contact {0} was removed while it was being edited")]
    StaleDraft(ContactId),

    /// A confirmation was resolved but nothing was waiting for it.
    #[error("no pending request to resolve")]
    NoPendingRequest,
}
