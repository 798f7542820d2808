//! # MessageInput Component
//!
//! Draft area and send button at the bottom of the chat page.
//!
//! ## Behavior
//!
//! The draft behaves like an uncontrolled text area: typed characters show
//! up, nothing else happens. The send button is not connected to anything.
//! Enter neither clears the draft nor adds a message, and the component
//! emits no events.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::mock;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::button::{BUTTON_HEIGHT, Button};
use crate::tui::components::text_field::clip_columns;
use crate::tui::event::TuiEvent;

pub const INPUT_HEIGHT: u16 = BUTTON_HEIGHT;

const SEND_WIDE: &str = "➤ Send";
const SEND_COMPACT: &str = "➤";

pub struct MessageInput {
    /// Typed text (visual only)
    pub draft: String,
    /// Prop: hide the button label
    pub compact: bool,
    placeholder: String,
}

impl Default for MessageInput {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageInput {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            compact: false,
            placeholder: format!("Type your message to {}...", mock::current_agent().name),
        }
    }

    fn send_label(&self) -> &'static str {
        if self.compact { SEND_COMPACT } else { SEND_WIDE }
    }
}

impl Component for MessageInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button_width = self.send_label().width() as u16 + 4;
        let [text_area, _, button_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(button_width),
        ])
        .areas(area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(text_area);

        // Show the tail so the end of the draft and the cursor stay visible
        let width = inner.width as usize;
        let draft_width = self.draft.width();
        let (tail, skipped) = clip_columns(&self.draft, (draft_width + 1).saturating_sub(width), width);

        let paragraph = if self.draft.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(tail).style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), text_area);

        // The disabled look is never applied: nothing tracks whether the draft is empty
        Button::new(self.send_label()).render(frame, button_area);

        if inner.width > 0 && inner.height > 0 {
            let col = draft_width.saturating_sub(skipped).min(width - 1) as u16;
            frame.set_cursor_position((inner.x + col, inner.y));
        }
    }
}

impl EventHandler for MessageInput {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.draft.push(*c),
            // One visible row: clipboard newlines are dropped
            TuiEvent::Paste(text) => self
                .draft
                .extend(text.chars().filter(|c| *c != '\n' && *c != '\r')),
            TuiEvent::Backspace => {
                self.draft.pop();
            }
            TuiEvent::Submit => {
                log::debug!("Send pressed; no handler is attached");
            }
            _ => {}
        }
        None
    }
}
