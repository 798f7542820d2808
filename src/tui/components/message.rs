use std::borrow::Cow;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::model::{Message, Sender};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// The sender/timestamp line above each bubble.
const NAME_ROW: u16 = 1;

/// Bubble width cap, as a percentage of the list width.
pub const WIDE_BUBBLE_PERCENT: u16 = 70;
pub const COMPACT_BUBBLE_PERCENT: u16 = 85;

/// A stateless component that renders one chat entry: a name line and a bubble.
///
/// # Alignment
///
/// - **Ai** entries hug the left edge, with an online dot before the name.
/// - **User** entries hug the right edge, bubble filled with the accent color.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) wraps the content with `textwrap`
/// exactly the way `render` does, so the parent `MessageList` can lay out the
/// scroll canvas without rendering.
#[derive(Clone, Copy)]
pub struct MessageEntry<'a> {
    pub message: &'a Message,
    /// Bubble width cap in percent of the available width
    pub max_percent: u16,
}

impl<'a> MessageEntry<'a> {
    pub fn new(message: &'a Message, max_percent: u16) -> Self {
        Self {
            message,
            max_percent,
        }
    }

    /// Widest text line a bubble may hold for the given entry width.
    fn content_limit(width: u16, max_percent: u16) -> u16 {
        let bubble_max = (width as u32 * max_percent as u32 / 100) as u16;
        bubble_max.saturating_sub(HORIZONTAL_OVERHEAD)
    }

    fn wrap(content: &str, limit: u16) -> Vec<Cow<'_, str>> {
        let options = textwrap::Options::new(limit as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        textwrap::wrap(content.trim(), options)
    }

    /// Calculate the height required for this entry given a width.
    pub fn calculate_height(message: &Message, width: u16, max_percent: u16) -> u16 {
        let limit = Self::content_limit(width, max_percent);
        if limit == 0 {
            // Degenerate case: too narrow for borders + padding.
            return NAME_ROW;
        }
        let lines = Self::wrap(message.content, limit);
        NAME_ROW + (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    /// Width of the bubble including borders and padding.
    pub fn bubble_width(message: &Message, width: u16, max_percent: u16) -> u16 {
        let limit = Self::content_limit(width, max_percent);
        if limit == 0 {
            return width.min(HORIZONTAL_OVERHEAD);
        }
        let widest = Self::wrap(message.content, limit)
            .iter()
            .map(|line| line.width() as u16)
            .max()
            .unwrap_or(0);
        (widest.max(1) + HORIZONTAL_OVERHEAD).min(width)
    }

    fn name_line(&self) -> Line<'a> {
        let name = Span::styled(
            self.message.sender_name,
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        );
        let time = Span::styled(self.message.timestamp, Style::default().fg(Color::DarkGray));
        match self.message.sender {
            Sender::Ai => Line::from(vec![
                Span::styled("● ", Style::default().fg(Color::LightGreen)),
                name,
                Span::raw("  "),
                time,
            ]),
            Sender::User => Line::from(vec![name, Span::raw("  "), time]),
        }
    }
}

pub(crate) fn sender_style(sender: Sender) -> Style {
    match sender {
        Sender::Ai => Style::default().fg(Color::White),
        Sender::User => Style::default().fg(Color::Black).bg(Color::Cyan),
    }
}

impl<'a> Widget for MessageEntry<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let alignment = if self.message.is_from_user() {
            Alignment::Right
        } else {
            Alignment::Left
        };

        let name_area = Rect::new(area.x, area.y, area.width, NAME_ROW);
        Paragraph::new(self.name_line())
            .alignment(alignment)
            .render(name_area, buf);

        let limit = Self::content_limit(area.width, self.max_percent);
        if limit == 0 || area.height <= NAME_ROW {
            return;
        }

        let bubble_w = Self::bubble_width(self.message, area.width, self.max_percent);
        let x = if self.message.is_from_user() {
            area.right().saturating_sub(bubble_w)
        } else {
            area.x
        };
        let bubble = Rect::new(x, area.y + NAME_ROW, bubble_w, area.height - NAME_ROW);

        let style = sender_style(self.message.sender);
        let border_style = match self.message.sender {
            Sender::Ai => Style::default().fg(Color::Blue),
            Sender::User => Style::default().fg(Color::Cyan),
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));
        let inner = block.inner(bubble);
        block.render(bubble, buf);

        let lines: Vec<Line> = Self::wrap(self.message.content, limit)
            .into_iter()
            .map(|l| Line::from(l.into_owned()))
            .collect();
        Paragraph::new(lines).style(style).render(inner, buf);
    }
}

/// Component trait implementation.
///
/// `MessageEntry` is stateless; rendering is delegated to the [`Widget`] impl.
impl<'a> Component for MessageEntry<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
