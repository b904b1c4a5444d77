// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Tabs};

use crate::tui::component::{Component, Message};
use crate::tui::component_form::Access;
use crate::tui::dispatcher::Dispatcher;

/// Pages selected through a tab bar; the active key is read from the store through `A`.
pub struct TabPages<S, K: Eq + Clone, A: Access<S, K>> {
    title: String,
    pages: Vec<(K, String, Box<dyn Component<S>>)>,
    _phantom: std::marker::PhantomData<A>,
}

impl<S, K: Eq + Clone, A: Access<S, K>> TabPages<S, K, A> {
    pub fn new(title: impl ToString, pages: Vec<(K, String, Box<dyn Component<S>>)>) -> Self {
        Self {
            title: title.to_string(),
            pages,
            _phantom: std::marker::PhantomData,
        }
    }

    fn active_index(&self, store: &RefCell<S>) -> usize {
        let active = A::get(store);
        self.pages
            .iter()
            .position(|(k, _, _)| *k == active)
            .unwrap_or(0)
    }

    fn block(&self) -> Block<'static> {
        Block::bordered().border_set(border::ROUNDED)
    }

    /// Splits the inner area into the tab bar and the page body.
    fn split(&self, area: Rect) -> (Rect, Rect) {
        let inner = self.block().inner(area);
        let [tabs, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);
        (tabs, body)
    }

    fn switch(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, forward: bool) {
        let len = self.pages.len();
        if len < 2 {
            return;
        }

        let current = self.active_index(store);
        let next = match forward {
            true => (current + 1) % len,
            false => (current + len - 1) % len,
        };

        if let Some((_, _, page)) = self.pages.get_mut(current) {
            page.deactivate(dispatcher, store);
        }
        if let Some((key, _, page)) = self.pages.get_mut(next) {
            A::set(dispatcher, key.clone());
            page.activate(dispatcher, store);
        }
    }
}

impl<S, K: Eq + Clone, A: Access<S, K>> Component<S> for TabPages<S, K, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let title = Line::from(format!(" {} ", self.title).bold());
        let block = self
            .block()
            .title(title.centered())
            .title_bottom(instructions().centered())
            .white();
        block.render(area, buf);

        let (tabs_area, body) = self.split(area);
        let active = self.active_index(store);
        Tabs::new(self.pages.iter().map(|(_, name, _)| name.as_str()))
            .select(active)
            .highlight_style(Style::new().fg(Color::Blue).bold())
            .render(tabs_area, buf);

        if let Some((_, _, page)) = self.pages.get(active) {
            page.render(store, body, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let (_, body) = self.split(area);
        self.pages
            .get(self.active_index(store))
            .and_then(|(_, _, page)| page.get_cursor_position(store, body))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (_, body) = self.split(area);
        let active = self.active_index(store);
        if let Some((_, _, page)) = self.pages.get_mut(active)
            && let Some(msg) = page.on_key(dispatcher, store, body, event)
        {
            return Some(msg);
        }

        match event.code {
            KeyCode::Tab => {
                self.switch(dispatcher, store, true);
                Some(Message::Handled)
            }
            KeyCode::BackTab => {
                self.switch(dispatcher, store, false);
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        let active = self.active_index(store);
        if let Some((_, _, page)) = self.pages.get_mut(active) {
            page.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        let active = self.active_index(store);
        if let Some((_, _, page)) = self.pages.get_mut(active) {
            page.deactivate(dispatcher, store);
        }
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Switch ".into(),
        "<Tab>".blue().bold(),
        " Quit ".into(),
        "<q> ".blue().bold(),
    ])
}

/// A bordered dialog drawn over whatever is below it.
pub struct Popup {
    title: String,
    instructions: Line<'static>,
    width: u16,
    height: u16,
}

impl Popup {
    pub fn new(title: impl ToString, instructions: Line<'static>, width: u16, height: u16) -> Self {
        Self {
            title: title.to_string(),
            instructions,
            width,
            height,
        }
    }

    /// The outer area of the popup, centered in `area`.
    pub fn area(&self, area: Rect) -> Rect {
        let [area] = Layout::vertical([Constraint::Length(self.height)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::horizontal([Constraint::Length(self.width)])
            .flex(Flex::Center)
            .areas(area);
        area
    }

    /// The area available to the popup's content.
    pub fn inner(&self, area: Rect) -> Rect {
        Block::bordered().inner(self.area(area))
    }

    /// Clears the popup area and draws its frame.
    pub fn render_frame(&self, area: Rect, buf: &mut Buffer) {
        let area = self.area(area);
        Clear.render(area, buf);
        Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(format!(" {} ", self.title).bold()).centered())
            .title_bottom(self.instructions.clone().centered())
            .render(area, buf);
    }
}
