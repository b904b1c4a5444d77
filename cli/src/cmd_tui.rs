// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

//! The `tui` command, which opens the contact book in the terminal.

use std::error::Error;

use agenda_core::{Category, Config as CoreConfig, ContactListStore};
use clap::{ArgMatches, Command, arg, value_parser};

use crate::config::Config;
use crate::tui::{AppStore, run_contact_book};

#[derive(Debug, Clone, Copy, Default)]
pub struct CmdTui {
    /// Overrides the category preselected for new contacts
    pub category: Option<Category>,
}

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Open the contact book (default)")
            .arg(
                arg!(--category <CATEGORY> "Category preselected for new contacts")
                    .value_parser(value_parser!(Category)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            category: matches.get_one::<Category>("category").copied(),
        }
    }

    pub fn new_store(self, core: &CoreConfig) -> ContactListStore {
        match self.category {
            Some(category) => ContactListStore::with_default_category(category),
            None => core.new_store(),
        }
    }

    pub fn run(self, core: &CoreConfig, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening contact book...");
        let store = AppStore::new(self.new_store(core), config.developer.clone());
        let store = run_contact_book(store)?;
        tracing::info!(
            contacts = store.contacts.len(),
            "session ended, discarding contacts"
        );
        Ok(())
    }
}
