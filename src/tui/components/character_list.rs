//! # CharacterList Component
//!
//! The view subscribed to the store. Shows exactly one of:
//!
//! - `Loading...` while a load is in flight
//! - `Error: <message>` if the last load failed
//! - the characters, one row per character (name + image URL), keyed by id
//!
//! ## Architecture
//!
//! Rendering is split in two so the decision logic can be tested without a
//! terminal:
//!
//! ```text
//! AppState ──select()──► CharacterListProps ──from_props()──► CharacterListView ──render──► Frame
//! ```
//!
//! `CharacterListView` is a plain value with no side effects. The ratatui
//! part only lays it out. Selection lives in `CharacterListState`, which the
//! parent `TuiState` persists between frames; it never goes through the store.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::{AppState, Character, ErrorInfo};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Height of one rendered row: name line + image line.
const ROW_HEIGHT: u16 = 2;

/// The slice of `AppState` the list depends on.
#[derive(Debug, Clone, Copy)]
pub struct CharacterListProps<'a> {
    pub characters: &'a [Character],
    pub is_loading: bool,
    pub error: Option<&'a ErrorInfo>,
}

impl<'a> CharacterListProps<'a> {
    /// Picks the list's props out of the full state.
    pub fn select(state: &'a AppState) -> Self {
        Self {
            characters: &state.characters,
            is_loading: state.is_loading,
            error: state.error.as_ref(),
        }
    }
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Character id. Unique within a list.
    pub key: u64,
    pub name: String,
    pub image_url: String,
}

/// What the list shows, decided purely from props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterListView {
    Loading,
    Error(String),
    List(Vec<Row>),
}

impl CharacterListView {
    pub fn from_props(props: CharacterListProps<'_>) -> Self {
        if props.is_loading {
            return CharacterListView::Loading;
        }
        if let Some(error) = props.error {
            return CharacterListView::Error(format!("Error: {}", error.message));
        }
        CharacterListView::List(
            props
                .characters
                .iter()
                .map(|c| Row {
                    key: c.id,
                    name: c.name.clone(),
                    image_url: c.image_url.clone(),
                })
                .collect(),
        )
    }
}

/// Events emitted by the list in response to navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// The selection moved to this row index.
    SelectionChanged(usize),
}

/// Persistent presentation state. Lives in `TuiState`.
#[derive(Debug, Default)]
pub struct CharacterListState {
    pub list_state: ListState,
    /// Number of rows at the last render (used to clamp navigation).
    pub item_count: usize,
    /// Rows visible at the last render (PageUp/PageDown step).
    pub page_size: usize,
}

impl CharacterListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keeps the selection valid after the list changed length.
    pub fn sync_len(&mut self, len: usize) {
        self.item_count = len;
        match (len, self.list_state.selected()) {
            (0, _) => self.list_state.select(None),
            (_, None) => self.list_state.select(Some(0)),
            (_, Some(i)) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    fn move_to(&mut self, index: usize) -> Option<ListEvent> {
        if self.item_count == 0 {
            return None;
        }
        let index = index.min(self.item_count - 1);
        if self.list_state.selected() == Some(index) {
            return None;
        }
        self.list_state.select(Some(index));
        Some(ListEvent::SelectionChanged(index))
    }
}

impl EventHandler for CharacterListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        let current = self.list_state.selected().unwrap_or(0);
        let page = self.page_size.max(1);
        match event {
            TuiEvent::CursorUp => self.move_to(current.saturating_sub(1)),
            TuiEvent::CursorDown => self.move_to(current.saturating_add(1)),
            TuiEvent::PageUp => self.move_to(current.saturating_sub(page)),
            TuiEvent::PageDown => self.move_to(current.saturating_add(page)),
            TuiEvent::Home => self.move_to(0),
            TuiEvent::End => self.move_to(usize::MAX),
            _ => None,
        }
    }
}

/// Transient component, built each frame from props + persistent state.
pub struct CharacterList<'a> {
    pub props: CharacterListProps<'a>,
    pub state: &'a mut CharacterListState,
}

impl<'a> CharacterList<'a> {
    pub fn new(props: CharacterListProps<'a>, state: &'a mut CharacterListState) -> Self {
        Self { props, state }
    }
}

impl Component for CharacterList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match CharacterListView::from_props(self.props) {
            CharacterListView::Loading => draw_loading(frame, area),
            CharacterListView::Error(message) => draw_error(frame, area, &message),
            CharacterListView::List(rows) => {
                self.state.sync_len(rows.len());
                self.state.page_size = (area.height.saturating_sub(2) / ROW_HEIGHT) as usize;
                draw_rows(frame, area, &rows, &mut self.state.list_state);
            }
        }
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().add_modifier(Modifier::DIM)));
    frame.render_widget(paragraph, area);
}

fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().border_style(Style::default().fg(Color::Red)));
    frame.render_widget(paragraph, area);
}

fn draw_rows(frame: &mut Frame, area: Rect, rows: &[Row], list_state: &mut ListState) {
    // Borders (2) + highlight symbol (2)
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate_to_width(&row.name, text_width),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate_to_width(&row.image_url, text_width),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::bordered().title(format!("Characters ({})", rows.len())))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Cuts `text` to at most `max` terminal columns, ending in `…` if cut.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
