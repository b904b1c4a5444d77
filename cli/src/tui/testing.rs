// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

//! Helpers shared by the component tests.

use std::{cell::RefCell, rc::Rc};

use agenda_core::{ContactListStore, DraftField};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use crate::tui::app_store::AppStore;
use crate::tui::component::Component;
use crate::tui::dispatcher::Dispatcher;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// An app store holding `contacts` in order, wired to a fresh dispatcher.
pub fn app_with(contacts: &[(&str, &str)]) -> (Rc<RefCell<AppStore>>, Dispatcher) {
    let mut list = ContactListStore::new();
    for (name, phone) in contacts {
        list.begin_create();
        list.update_draft_field(DraftField::Name(name.to_string()));
        list.update_draft_field(DraftField::Phone(phone.to_string()));
        list.commit_draft().unwrap();
    }

    let store = Rc::new(RefCell::new(AppStore::new(list, "Maria Eduarda")));
    let mut dispatcher = Dispatcher::new();
    AppStore::register_to(store.clone(), &mut dispatcher);
    (store, dispatcher)
}

/// Renders `component` into a `width` x `height` buffer and returns its rows.
pub fn render_lines(
    component: &impl Component<AppStore>,
    store: &RefCell<AppStore>,
    width: u16,
    height: u16,
) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    component.render(store, area, &mut buf);
    (0..height)
        .map(|y| {
            (0..width)
                .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                .collect()
        })
        .collect()
}

pub fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|l| l.contains(needle))
}
