//! # ChatHeader Component
//!
//! Strip above the conversation showing who the user is talking to.
//!
//! ```text
//!  ☰  A  Alice                                    ☺
//!         ● online • Curious Explorer
//! ──────────────────────────────────────────────────
//! ```
//!
//! Stateless: the parent passes the agent and the sidebar flags as props.
//! The hamburger is only drawn in the compact layout; its hit area is
//! exposed through [`ChatHeader::hamburger_area`] so the page can test clicks
//! against it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::model::Agent;
use crate::tui::component::Component;

pub const HEADER_HEIGHT: u16 = 3;

pub const MENU_ICON: &str = "☰";
pub const CLOSE_ICON: &str = "✕";
const USER_ICON: &str = "☺";

pub struct ChatHeader {
    pub agent: Agent,
    /// Compact layout: draw the hamburger
    pub show_hamburger: bool,
    /// Swaps the hamburger for a close icon
    pub sidebar_open: bool,
}

impl ChatHeader {
    pub fn new(agent: Agent, show_hamburger: bool, sidebar_open: bool) -> Self {
        Self {
            agent,
            show_hamburger,
            sidebar_open,
        }
    }

    /// Clickable cells of the hamburger for a header drawn in `area`.
    pub fn hamburger_area(area: Rect) -> Rect {
        Rect::new(area.x, area.y, 3.min(area.width), 2.min(area.height))
    }
}

impl Component for ChatHeader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut title = Vec::new();
        let mut subtitle = Vec::new();
        if self.show_hamburger {
            let icon = if self.sidebar_open { CLOSE_ICON } else { MENU_ICON };
            title.push(Span::styled(
                format!(" {icon} "),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            subtitle.push(Span::raw("   "));
        }

        title.push(Span::raw(" "));
        title.push(Span::styled(
            format!(" {} ", self.agent.initial()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        title.push(Span::raw("  "));
        title.push(Span::styled(
            self.agent.name,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));

        let dot_color = if self.agent.status.is_online() {
            Color::LightGreen
        } else {
            Color::DarkGray
        };
        subtitle.push(Span::raw("      "));
        subtitle.push(Span::styled("● ", Style::default().fg(dot_color)));
        subtitle.push(Span::styled(
            format!("{} • {}", self.agent.status.label(), self.agent.personality),
            Style::default().fg(Color::Gray),
        ));

        frame.render_widget(
            Paragraph::new(vec![Line::from(title), Line::from(subtitle)]),
            inner,
        );

        let user_button = Paragraph::new(format!("{USER_ICON} "))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Right);
        frame.render_widget(user_button, Rect { height: 1.min(inner.height), ..inner });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock;
    use crate::test_support::{buffer_text, find_text, render};

    #[test]
    fn shows_agent_details() {
        let mut header = ChatHeader::new(mock::current_agent(), false, false);
        let text = buffer_text(&render(&mut header, 60, HEADER_HEIGHT));
        assert!(text.contains("Alice"));
        assert!(text.contains("online • Curious Explorer"));
        assert!(text.contains(" A "));
        assert!(!text.contains(MENU_ICON));
    }

    #[test]
    fn hamburger_icon_follows_sidebar_state() {
        let mut closed = ChatHeader::new(mock::current_agent(), true, false);
        let buffer = render(&mut closed, 60, HEADER_HEIGHT);
        assert_eq!(find_text(&buffer, MENU_ICON), Some((1, 0)));

        let mut open = ChatHeader::new(mock::current_agent(), true, true);
        let text = buffer_text(&render(&mut open, 60, HEADER_HEIGHT));
        assert!(text.contains(CLOSE_ICON));
        assert!(!text.contains(MENU_ICON));
    }

    #[test]
    fn hamburger_area_covers_icon() {
        let area = Rect::new(0, 0, 60, HEADER_HEIGHT);
        let hit = ChatHeader::hamburger_area(area);
        assert!(hit.contains((1, 0).into()));
        assert!(!hit.contains((10, 0).into()));
    }
}
