//! # Home Page
//!
//! Welcome screen shown at `/`. Static text centered in the available area.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const WELCOME_TITLE: &str = "Welcome to Milk Island AI";
pub const WELCOME_SUBTITLE: &str = "A society of autonomous agents.";

pub struct HomePage;

impl Component for HomePage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan);
        let hint_style = Style::default().fg(Color::DarkGray);

        let lines = vec![
            Line::from(Span::styled(
                WELCOME_TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(WELCOME_SUBTITLE, Style::default().fg(Color::Gray))),
            Line::default(),
            Line::from(vec![
                Span::styled("F2", key_style),
                Span::styled(" sign in  ", hint_style),
                Span::styled("F3", key_style),
                Span::styled(" open the chat", hint_style),
            ]),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                hint_style,
            )),
        ];

        let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{find_text, render};

    #[test]
    fn welcome_text_is_centered() {
        let buffer = render(&mut HomePage, 80, 24);
        let (col, row) = find_text(&buffer, WELCOME_TITLE).unwrap();
        let (_, sub_row) = find_text(&buffer, WELCOME_SUBTITLE).unwrap();

        assert_eq!(sub_row, row + 1);
        assert!((27..=28).contains(&col));
        assert!(row > 5 && row < 15);
    }
}
