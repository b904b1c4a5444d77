// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::app_store::AppStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::Popup;
use crate::tui::dispatcher::{Action, Dispatcher};

/// Asks the user to confirm the request pending in the contact store.
pub struct ConfirmDialog;

impl ConfirmDialog {
    pub fn new() -> Self {
        Self
    }

    fn popup(title: &str) -> Popup {
        let instructions = Line::from(vec![
            " Yes ".into(),
            "<y>".blue().bold(),
            " No ".into(),
            "<n> ".blue().bold(),
        ]);
        Popup::new(title, instructions, 40, 5)
    }
}

impl Component<AppStore> for ConfirmDialog {
    fn render(&self, store: &RefCell<AppStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let Some(pending) = store.contacts.pending() else {
            return;
        };

        let popup = Self::popup(pending.title());
        popup.render_frame(area, buf);
        Paragraph::new(pending.message())
            .centered()
            .wrap(Wrap { trim: true })
            .render(popup.inner(area), buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<AppStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        match event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                dispatcher.dispatch(Action::ConfirmPending)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                dispatcher.dispatch(Action::CancelPending)
            }
            _ => {}
        }
        Some(Message::Handled)
    }
}
