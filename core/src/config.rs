// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Category, ContactListStore};

/// The name of the Agenda application.
pub const APP_NAME: &str = "agenda";

/// Core configuration, read from the `[core]` table.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Category preselected for new contacts.
    #[serde(default)]
    pub default_category: Category,
}

impl Config {
    /// Creates an empty contact store following this configuration.
    pub fn new_store(&self) -> ContactListStore {
        ContactListStore::with_default_category(self.default_category)
    }
}
