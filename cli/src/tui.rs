// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod app_store;
mod component;
mod component_form;
mod component_page;
mod confirm_dialog;
mod contact_editor;
mod contact_list;
mod dispatcher;
mod settings_page;

#[cfg(test)]
mod testing;

pub use app::run_contact_book;
pub use app_store::AppStore;
