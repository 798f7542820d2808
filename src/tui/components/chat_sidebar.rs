//! # ChatSidebar Component
//!
//! Agent list shown next to the conversation.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ AI Agents                    │
//! │ Select an agent to chat      │
//! │──────────────────────────────│
//! │▌Alice              ● online  │  <- active (ACTIVE_AGENT_ID)
//! │ Curious Explorer             │
//! │                              │
//! │ Bob                ● online  │
//! │ ...                          │
//! │      [ + New Agent ]         │
//! └──────────────────────────────┘
//! ```
//!
//! Takes no props and emits no events. Every instance loads the mock agent
//! list on its own; clicking a row does nothing.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::mock::{self, ACTIVE_AGENT_ID};
use crate::core::model::Agent;
use crate::tui::component::Component;
use crate::tui::components::button::{BUTTON_HEIGHT, Button};

/// Rows per agent entry: name/status, personality, spacer.
const ROW_HEIGHT: usize = 3;

pub struct ChatSidebar {
    agents: Vec<Agent>,
}

impl Default for ChatSidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSidebar {
    pub fn new() -> Self {
        Self {
            agents: mock::agents(),
        }
    }

    fn agent_lines(agent: &Agent, width: u16) -> Vec<Line<'static>> {
        let is_active = agent.id == ACTIVE_AGENT_ID;

        let (marker, row_style) = if is_active {
            (
                Span::styled("▌", Style::default().fg(Color::Cyan)),
                Style::default().bg(Color::Rgb(16, 32, 48)),
            )
        } else {
            (Span::raw(" "), Style::default())
        };

        let dot_style = if agent.status.is_online() {
            Style::default().fg(Color::LightGreen)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let status = format!("● {}", agent.status.label());

        // name on the left, status pushed to the right edge
        let used = 1 + agent.name.width() + status.width() + 1;
        let gap = (width as usize).saturating_sub(used).max(1);

        let name_line = Line::from(vec![
            marker.clone(),
            Span::styled(
                agent.name.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(gap)),
            Span::styled("●", dot_style),
            Span::styled(
                format!(" {} ", agent.status.label()),
                Style::default().fg(Color::Gray),
            ),
        ])
        .style(row_style);

        let personality_line = Line::from(vec![
            marker,
            Span::styled(agent.personality.to_string(), Style::default().fg(Color::Gray)),
        ])
        .style(row_style);

        vec![name_line, personality_line, Line::default()]
    }
}

impl Component for ChatSidebar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header_area, divider_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(inner);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                " AI Agents",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                " Select an agent to chat",
                Style::default().fg(Color::Gray),
            )),
        ]);
        frame.render_widget(header, header_area);

        let divider = Paragraph::new("─".repeat(divider_area.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(divider, divider_area);

        let mut lines = Vec::with_capacity(self.agents.len() * ROW_HEIGHT);
        for agent in &self.agents {
            lines.extend(Self::agent_lines(agent, list_area.width));
        }
        frame.render_widget(Paragraph::new(lines), list_area);

        // Static button, nothing is wired to it
        Button::new("+ New Agent").render(frame, footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_rows, buffer_text, count_text, find_text, render};

    #[test]
    fn renders_three_agents_in_order() {
        let mut sidebar = ChatSidebar::new();
        let buffer = render(&mut sidebar, 32, 20);

        let (_, alice) = find_text(&buffer, "Alice").unwrap();
        let (_, bob) = find_text(&buffer, "Bob").unwrap();
        let (_, charlie) = find_text(&buffer, "Charlie").unwrap();
        assert!(alice < bob && bob < charlie);

        assert_eq!(count_text(&buffer, "● online"), 2);
        assert_eq!(count_text(&buffer, "● offline"), 1);
    }

    #[test]
    fn renders_header_personalities_and_button() {
        let mut sidebar = ChatSidebar::new();
        let text = buffer_text(&render(&mut sidebar, 32, 20));
        assert!(text.contains("AI Agents"));
        assert!(text.contains("Select an agent to chat"));
        assert!(text.contains("Curious Explorer"));
        assert!(text.contains("Wise Guardian"));
        assert!(text.contains("Creative Dreamer"));
        assert!(text.contains("+ New Agent"));
    }

    #[test]
    fn only_active_agent_has_marker() {
        let mut sidebar = ChatSidebar::new();
        let buffer = render(&mut sidebar, 32, 20);
        let rows = buffer_rows(&buffer);

        let marked: Vec<_> = rows.iter().filter(|r| r.starts_with('▌')).collect();
        // name row + personality row of Alice
        assert_eq!(marked.len(), 2);
        assert!(marked[0].contains("Alice"));
        assert!(marked[1].contains("Curious Explorer"));
    }

    #[test]
    fn status_label_is_right_aligned() {
        let mut sidebar = ChatSidebar::new();
        let buffer = render(&mut sidebar, 32, 20);
        let (col, _) = find_text(&buffer, "offline").unwrap();
        let (name_col, _) = find_text(&buffer, "Charlie").unwrap();
        assert!(col > name_col + "Charlie".len());
    }
}
