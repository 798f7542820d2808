//! # NavBar Component
//!
//! Bottom line showing where the user is and how to move around.
//!
//! ```text
//! /chat │ F1 Home  F2 Login  F3 Chat  Esc Back  Ctrl+Q Quit
//! ```
//!
//! Stateless, props only. The current route's key hint is highlighted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::route::Route;
use crate::tui::component::Component;

pub struct NavBar {
    pub route: Route,
    pub can_go_back: bool,
}

impl NavBar {
    pub fn new(route: Route, can_go_back: bool) -> Self {
        Self { route, can_go_back }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan);
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.route.path()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("│", Style::default().fg(Color::DarkGray)),
        ];

        for (i, route) in Route::all().iter().enumerate() {
            let label_style = if *route == self.route {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" F{} ", i + 1), key_style));
            spans.push(Span::styled(route.name(), label_style));
            spans.push(Span::raw(" "));
        }

        if self.can_go_back {
            spans.push(Span::styled(" Esc ", key_style));
            spans.push(Span::styled("Back ", Style::default().fg(Color::Gray)));
        }
        spans.push(Span::styled(" Ctrl+Q ", key_style));
        spans.push(Span::styled("Quit", Style::default().fg(Color::Gray)));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
            area,
        );
    }
}
