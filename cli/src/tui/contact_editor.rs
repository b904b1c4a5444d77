// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use agenda_core::Category;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use strum::{EnumMessage, IntoEnumIterator};

use crate::tui::app_store::AppStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, Input, RadioGroup};
use crate::tui::component_page::Popup;
use crate::tui::dispatcher::{Action, Dispatcher};

const WIDTH: u16 = 50;

/// Modal form editing the draft of the contact store.
pub struct ContactEditor {
    form: Form<AppStore>,
}

impl ContactEditor {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Box::new(new_name()),
                Box::new(new_phone()),
                Box::new(new_category()),
            ]),
        }
    }

    fn popup(&self, store: &RefCell<AppStore>) -> Popup {
        let title = match store.borrow().contacts.editing() {
            Some(_) => "Edit contact",
            None => "New contact",
        };
        let instructions = Line::from(vec![
            " Save ".into(),
            "<Enter>".blue().bold(),
            " Cancel ".into(),
            "<Esc> ".blue().bold(),
        ]);
        // hint line + form + border
        Popup::new(title, instructions, WIDTH, self.form.height() + 3)
    }

    fn split(&self, store: &RefCell<AppStore>, area: Rect) -> (Rect, Rect) {
        let inner = self.popup(store).inner(area);
        let [hint, form] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
        (hint, form)
    }
}

impl Component<AppStore> for ContactEditor {
    fn render(&self, store: &RefCell<AppStore>, area: Rect, buf: &mut Buffer) {
        self.popup(store).render_frame(area, buf);

        let (hint_area, form_area) = self.split(store, area);
        let hint = {
            let store = store.borrow();
            match (&store.status, store.contacts.editing()) {
                (Some(status), _) => Line::from(format!(" {status}")).red(),
                (None, Some(_)) => Line::from(" Edit the contact:"),
                (None, None) => Line::from(" Enter the new contact's details:"),
            }
        };
        Paragraph::new(hint).render(hint_area, buf);

        self.form.render(store, form_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<AppStore>, area: Rect) -> Option<(u16, u16)> {
        let (_, form_area) = self.split(store, area);
        self.form.get_cursor_position(store, form_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AppStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (_, form_area) = self.split(store, area);
        if let Some(msg) = self.form.on_key(dispatcher, store, form_area, event) {
            return Some(msg);
        }

        if event.code == KeyCode::Esc {
            dispatcher.dispatch(Action::CancelForm);
        }
        Some(Message::Handled) // modal, nothing below sees the key
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AppStore>) {
        self.form.focus(dispatcher, store, 0);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AppStore>) {
        self.form.deactivate(dispatcher, store);
    }
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident) => {
        fn $fn() -> Input<AppStore, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl Access<AppStore, String> for $acc {
            fn get(store: &RefCell<AppStore>) -> String {
                store.borrow().contacts.draft().$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }
        }
    };
}

new_input!(new_name, "Name", NameAccess, name, UpdateDraftName);
new_input!(new_phone, "Phone", PhoneAccess, phone, UpdateDraftPhone);

fn new_category() -> RadioGroup<AppStore, Category, CategoryAccess> {
    let values: Vec<_> = Category::iter().collect();
    let options = values
        .iter()
        .map(|a| a.get_message().unwrap_or_default().to_string())
        .collect();
    RadioGroup::new("Category", values, options)
}

struct CategoryAccess;

impl Access<AppStore, Category> for CategoryAccess {
    fn get(store: &RefCell<AppStore>) -> Category {
        store.borrow().contacts.draft().category
    }

    fn set(dispatcher: &mut Dispatcher, value: Category) -> bool {
        dispatcher.dispatch(Action::UpdateDraftCategory(value));
        true
    }
}
