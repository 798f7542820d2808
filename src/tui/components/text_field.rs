//! # TextField Component
//!
//! Single-line input atom shared by the forms.
//!
//! ## State Management
//!
//! The value and cursor are internal state. `focused` is a prop set by the
//! owning form before each render. Password fields keep the real value and
//! render one `*` per character.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows used by a field: top border, content, bottom border.
pub const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Password,
}

/// Emitted whenever the value or cursor moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChanged;

pub struct TextField {
    value: String,
    /// Cursor position as byte offset in value (0..=value.len())
    cursor: usize,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    /// Prop: draw focus ring and terminal cursor
    pub focused: bool,
}

impl TextField {
    pub fn new(kind: FieldKind, placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            kind,
            placeholder,
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// What the user sees: the value, masked for passwords.
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Password => "*".repeat(self.value.chars().count()),
            FieldKind::Email => self.value.clone(),
        }
    }

    /// Display columns between the start of the value and the cursor.
    fn cursor_column(&self) -> usize {
        let before = &self.value[..self.cursor];
        match self.kind {
            FieldKind::Password => before.chars().count(),
            FieldKind::Email => before.width(),
        }
    }

    fn insert_str(&mut self, text: &str) {
        self.value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        let width = inner.width as usize;

        let cursor_col = self.cursor_column();
        // Keep the cursor inside the box by scrolling the text left
        let (visible, skipped) = clip_columns(
            &self.display_value(),
            (cursor_col + 1).saturating_sub(width),
            width,
        );

        let paragraph = if self.value.is_empty() {
            Paragraph::new(self.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(visible).style(Style::default().fg(Color::White))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let col = cursor_col.saturating_sub(skipped);
            let x = inner.x + col.min(width.saturating_sub(1)) as u16;
            frame.set_cursor_position((x, inner.y));
        }
    }
}

/// Cut `text` down to the display columns `[skip, skip + width)`.
///
/// A wide character straddling either edge is dropped whole. Returns the
/// clipped text and the number of columns actually skipped, which can exceed
/// `skip` by one.
pub(crate) fn clip_columns(text: &str, skip: usize, width: usize) -> (String, usize) {
    let mut chars = text.chars();
    let mut skipped = 0;
    while skipped < skip {
        match chars.next() {
            Some(c) => skipped += c.width().unwrap_or(0),
            None => break,
        }
    }

    let mut visible = String::new();
    let mut used = 0;
    for c in chars {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        visible.push(c);
    }
    (visible, skipped)
}

impl EventHandler for TextField {
    type Event = FieldChanged;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf));
                Some(FieldChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines from the clipboard are dropped
                let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                if line.is_empty() {
                    return None;
                }
                self.insert_str(&line);
                Some(FieldChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.value, self.cursor);
                self.value.drain(prev..self.cursor);
                self.cursor = prev;
                Some(FieldChanged)
            }
            TuiEvent::Delete => {
                if self.cursor >= self.value.len() {
                    return None;
                }
                let next = next_char_boundary(&self.value, self.cursor);
                self.value.drain(self.cursor..next);
                Some(FieldChanged)
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.value, self.cursor);
                FieldChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.value.len()).then(|| {
                self.cursor = next_char_boundary(&self.value, self.cursor);
                FieldChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.value.len()).then(|| {
                self.cursor = self.value.len();
                FieldChanged
            }),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
