//! # Login Page
//!
//! Centers a [`LoginForm`] in a rounded card at `/login`. The form owns all
//! of the state; the page only frames it and forwards events.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Padding};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::login_form::{FORM_HEIGHT, LoginEvent, LoginForm};
use crate::tui::event::TuiEvent;

const CARD_WIDTH: u16 = 48;
/// Borders plus one row of padding above and below the form.
const CARD_HEIGHT: u16 = FORM_HEIGHT + 4;

#[derive(Default)]
pub struct LoginPage {
    pub form: LoginForm,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for LoginPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(CARD_HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::new(2, 2, 1, 1));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        self.form.render(frame, inner);
    }
}

impl EventHandler for LoginPage {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        self.form.handle_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, find_text, render};

    #[test]
    fn form_is_centered_in_card() {
        let mut page = LoginPage::new();
        let buffer = render(&mut page, 100, 30);
        let text = buffer_text(&buffer);
        assert!(text.contains("Email Address"));
        assert!(text.contains("Sign In"));

        let (col, _) = find_text(&buffer, "╭").unwrap();
        assert_eq!(col, (100 - CARD_WIDTH as usize) / 2);
    }

    #[test]
    fn events_reach_the_form() {
        let mut page = LoginPage::new();
        page.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(page.form.email.value(), "a");
    }
}
