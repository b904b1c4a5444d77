// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app_store::AppStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};

pub struct SettingsPage;

impl SettingsPage {
    pub fn new() -> Self {
        Self
    }
}

impl Component<AppStore> for SettingsPage {
    fn render(&self, store: &RefCell<AppStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let lines = vec![
            Line::from(" Settings".bold()),
            Line::default(),
            Line::from(vec![
                " Developer  ".dark_gray(),
                Span::from(store.developer.clone()),
            ]),
            Line::from(vec![
                " Contacts   ".dark_gray(),
                Span::from(store.contacts.len().to_string()),
            ]),
            Line::default(),
            Line::from(vec![
                " Erase all contacts ".red().bold(),
                "<x>".blue().bold(),
            ]),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<AppStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        match event.code {
            KeyCode::Char('x') => {
                dispatcher.dispatch(Action::RequestEraseAll);
                Some(Message::Handled)
            }
            _ => None,
        }
    }
}
