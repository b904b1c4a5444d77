// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use agenda_core::Contact;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use strum::EnumMessage;

use crate::tui::app_store::AppStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};

/// The contacts screen: a hint line above the list of contacts.
pub struct ContactList;

impl ContactList {
    pub fn new() -> Self {
        Self
    }

    fn split(area: Rect) -> (Rect, Rect) {
        let [header, _, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        (header, list)
    }
}

impl Component<AppStore> for ContactList {
    fn render(&self, store: &RefCell<AppStore>, area: Rect, buf: &mut Buffer) {
        let (header, area) = Self::split(area);
        Paragraph::new(header_line()).render(header, buf);

        let store = store.borrow();
        let contacts = store.contacts.contacts();
        if contacts.is_empty() {
            Paragraph::new("No contacts yet!")
                .dark_gray()
                .centered()
                .render(area, buf);
            return;
        }

        let list = List::new(contacts.iter().map(contact_item))
            .highlight_symbol("> ")
            .highlight_style(Style::new().fg(Color::Blue));
        let mut state = ListState::default().with_selected(Some(store.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AppStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        // release the borrow before dispatching
        let (selected, id) = {
            let store = store.borrow();
            (store.selected, store.selected_id())
        };

        let action = match event.code {
            KeyCode::Char('a') | KeyCode::Char('n') => Action::BeginCreate,
            KeyCode::Char('e') | KeyCode::Enter => Action::BeginEdit(id?),
            KeyCode::Char('d') | KeyCode::Delete => Action::RequestDelete(id?),
            KeyCode::Up | KeyCode::Char('k') => Action::SelectContact(selected.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => Action::SelectContact(selected + 1),
            _ => return None,
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}

fn header_line() -> Line<'static> {
    Line::from(vec![
        " New contact ".into(),
        "<a>".blue().bold(),
        "  Edit ".into(),
        "<e>".blue().bold(),
        "  Delete ".into(),
        "<d>".blue().bold(),
    ])
}

fn contact_item(contact: &Contact) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::from(contact.name.clone()).bold(),
        "  ".into(),
        Span::from(contact.phone.clone()),
        "  ".into(),
        Span::from(contact.category.get_message().unwrap_or_default()).dark_gray(),
    ]))
}
