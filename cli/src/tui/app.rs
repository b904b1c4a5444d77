// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app_store::AppStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::Access;
use crate::tui::component_page::TabPages;
use crate::tui::confirm_dialog::ConfirmDialog;
use crate::tui::contact_editor::ContactEditor;
use crate::tui::contact_list::ContactList;
use crate::tui::dispatcher::{Action, Dispatcher, Screen};
use crate::tui::settings_page::SettingsPage;

/// Runs the contact book until the user quits and hands the store back.
pub fn run_contact_book(store: AppStore) -> Result<AppStore, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        AppStore::register_to(store.clone(), &mut dispatcher);
        let mut app = App::new();
        app.activate(&mut dispatcher, &store);

        loop {
            let area = match app.draw(&store, &mut terminal) {
                Ok(area) => area,
                Err(e) => break Err(e),
            };

            match app.read_event(&mut dispatcher, &store, area) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // Continue the loop to render the next frame
            }
        }
    }; // release dispatcher and app here so the store has a single owner
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store)
}

/// Root component: the two screens, plus the modal form and confirmation dialog.
pub struct App {
    pages: TabPages<AppStore, Screen, ScreenAccess>,
    editor: ContactEditor,
    confirm: ConfirmDialog,

    /// Whether the editor was activated for the currently open form
    form_open: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            pages: TabPages::new(
                "Agenda",
                vec![
                    (
                        Screen::Contacts,
                        "Contacts".to_owned(),
                        Box::new(ContactList::new()),
                    ),
                    (
                        Screen::Settings,
                        "Settings".to_owned(),
                        Box::new(SettingsPage::new()),
                    ),
                ],
            ),
            editor: ContactEditor::new(),
            confirm: ConfirmDialog::new(),
            form_open: false,
        }
    }

    fn draw(
        &self,
        store: &RefCell<AppStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<Rect, Box<dyn Error>> {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            self.render(store, area, frame.buffer_mut());
            if let Some(pos) = self.get_cursor_position(store, area) {
                frame.set_cursor_position(pos);
            }
        })?;
        Ok(area)
    }

    fn read_event(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AppStore>,
        area: Rect,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.on_key(dispatcher, store, area, key))
            }
            _ => Ok(None),
        }
    }

    fn split(area: Rect) -> (Rect, Rect) {
        let [body, status] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        (body, status)
    }

    /// Activates or deactivates the editor when the store opened or closed the form.
    fn sync_form(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AppStore>) {
        let visible = store.borrow().contacts.is_form_visible();
        match (visible, self.form_open) {
            (true, false) => self.editor.activate(dispatcher, store),
            (false, true) => self.editor.deactivate(dispatcher, store),
            _ => {}
        }
        self.form_open = visible;
    }
}

impl Component<AppStore> for App {
    fn render(&self, store: &RefCell<AppStore>, area: Rect, buf: &mut Buffer) {
        let (body, status_area) = Self::split(area);
        self.pages.render(store, body, buf);

        let (form_visible, pending) = {
            let store = store.borrow();
            if let Some(status) = &store.status {
                Paragraph::new(format!(" {status}"))
                    .dark_gray()
                    .render(status_area, buf);
            }
            (store.contacts.is_form_visible(), store.contacts.pending().is_some())
        };

        if form_visible {
            self.editor.render(store, area, buf);
        }
        if pending {
            self.confirm.render(store, area, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<AppStore>, area: Rect) -> Option<(u16, u16)> {
        let (form_visible, pending) = {
            let store = store.borrow();
            (store.contacts.is_form_visible(), store.contacts.pending().is_some())
        };

        match (pending, form_visible) {
            (true, _) => None,
            (false, true) => self.editor.get_cursor_position(store, area),
            (false, false) => self.pages.get_cursor_position(store, Self::split(area).0),
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AppStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Message::Exit);
        }

        let (form_visible, pending) = {
            let store = store.borrow();
            (store.contacts.is_form_visible(), store.contacts.pending().is_some())
        };

        let msg = if pending {
            self.confirm.on_key(dispatcher, store, area, event)
        } else if form_visible {
            self.editor.on_key(dispatcher, store, area, event)
        } else {
            let body = Self::split(area).0;
            match self.pages.on_key(dispatcher, store, body, event) {
                Some(msg) => Some(msg),
                None => match event.code {
                    KeyCode::Char('q') | KeyCode::Esc => Some(Message::Exit),
                    _ => None,
                },
            }
        };

        self.sync_form(dispatcher, store);
        msg
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AppStore>) {
        self.pages.activate(dispatcher, store);
        self.sync_form(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AppStore>) {
        self.pages.deactivate(dispatcher, store);
        if self.form_open {
            self.editor.deactivate(dispatcher, store);
            self.form_open = false;
        }
    }
}

struct ScreenAccess;

impl Access<AppStore, Screen> for ScreenAccess {
    fn get(store: &RefCell<AppStore>) -> Screen {
        store.borrow().screen
    }

    fn set(dispatcher: &mut Dispatcher, value: Screen) -> bool {
        dispatcher.dispatch(Action::SwitchScreen(value));
        true
    }
}
