//! # LoginForm Component
//!
//! Email + password form with a submit button.
//!
//! ## Responsibilities
//!
//! - Route typing to the focused field
//! - Cycle focus (Tab / Shift+Tab / Up / Down)
//! - Enforce the `required` rule on submit
//! - Emit `LoginEvent::Submit` with both values
//!
//! The form never talks to a backend. What happens with a submission is the
//! parent's business (it gets logged by the core and nothing else).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::button::{BUTTON_HEIGHT, Button};
use crate::tui::components::text_field::{FIELD_HEIGHT, FieldKind, TextField};
use crate::tui::event::TuiEvent;

pub const SUBMIT_LABEL: &str = "Sign In";
pub const REQUIRED_HINT: &str = "Please fill out this field.";

/// Rows needed to draw the whole form.
pub const FORM_HEIGHT: u16 = 2 + 2 * (1 + FIELD_HEIGHT + 1) + 1 + BUTTON_HEIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    Submit,
}

impl LoginFocus {
    fn next(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Submit,
            LoginFocus::Submit => LoginFocus::Email,
        }
    }

    fn prev(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Submit,
            LoginFocus::Password => LoginFocus::Email,
            LoginFocus::Submit => LoginFocus::Password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    Submit { email: String, password: String },
    Changed,
}

pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginFocus,
    /// Field that blocked the last submit, shown with a hint until edited
    pub missing: Option<LoginFocus>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: TextField::new(FieldKind::Email, "your@email.com"),
            password: TextField::new(FieldKind::Password, "********"),
            focus: LoginFocus::Email,
            missing: None,
        }
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            LoginFocus::Email => Some(&mut self.email),
            LoginFocus::Password => Some(&mut self.password),
            LoginFocus::Submit => None,
        }
    }

    fn submit(&mut self) -> Option<LoginEvent> {
        let first_empty = if self.email.is_empty() {
            Some(LoginFocus::Email)
        } else if self.password.is_empty() {
            Some(LoginFocus::Password)
        } else {
            None
        };

        if let Some(field) = first_empty {
            log::debug!("Login submit blocked: {:?} is required", field);
            self.focus = field;
            self.missing = Some(field);
            return None;
        }

        self.missing = None;
        Some(LoginEvent::Submit {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        })
    }

    fn render_hint(&self, frame: &mut Frame, area: Rect, field: LoginFocus) {
        if self.missing == Some(field) {
            let hint = Paragraph::new(REQUIRED_HINT).style(Style::default().fg(Color::Yellow));
            frame.render_widget(hint, area);
        }
    }
}

fn label(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(text)).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

impl Component for LoginForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [
            title_area,
            _,
            email_label,
            email_area,
            email_hint,
            password_label,
            password_area,
            password_hint,
            _,
            button_area,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(area);

        let title = Paragraph::new("Login")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        self.email.focused = self.focus == LoginFocus::Email;
        self.password.focused = self.focus == LoginFocus::Password;

        frame.render_widget(label("Email Address"), email_label);
        self.email.render(frame, email_area);
        self.render_hint(frame, email_hint, LoginFocus::Email);

        frame.render_widget(label("Password"), password_label);
        self.password.render(frame, password_area);
        self.render_hint(frame, password_hint, LoginFocus::Password);

        Button::new(SUBMIT_LABEL)
            .focused(self.focus == LoginFocus::Submit)
            .render(frame, button_area);
    }
}

impl EventHandler for LoginForm {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                None
            }
            // Enter submits from anywhere in the form, like a browser form
            TuiEvent::Submit => self.submit(),
            TuiEvent::InputChar(' ') if self.focus == LoginFocus::Submit => self.submit(),
            _ => {
                let focus = self.focus;
                let changed = self.focused_field()?.handle_event(event).is_some();
                if !changed {
                    return None;
                }
                if self.missing == Some(focus) {
                    self.missing = None;
                }
                Some(LoginEvent::Changed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, count_text, render};

    fn type_str(form: &mut LoginForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = LoginForm::new();
        type_str(&mut form, "alice@island.ai");
        form.handle_event(&TuiEvent::FocusNext);
        type_str(&mut form, "p4ss word");

        assert_eq!(form.email.value(), "alice@island.ai");
        assert_eq!(form.password.value(), "p4ss word");
    }

    #[test]
    fn rendered_values_match_typed_text() {
        let mut form = LoginForm::new();
        type_str(&mut form, "bob@island.ai");
        form.handle_event(&TuiEvent::FocusNext);
        type_str(&mut form, "abc");

        let text = buffer_text(&render(&mut form, 40, FORM_HEIGHT));
        assert!(text.contains("bob@island.ai"));
        assert!(text.contains("***"));
        assert!(!text.contains("abc"));
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut form = LoginForm::new();
        assert_eq!(form.focus, LoginFocus::Email);
        form.handle_event(&TuiEvent::FocusNext);
        form.handle_event(&TuiEvent::FocusNext);
        assert_eq!(form.focus, LoginFocus::Submit);
        form.handle_event(&TuiEvent::FocusNext);
        assert_eq!(form.focus, LoginFocus::Email);
        form.handle_event(&TuiEvent::FocusPrev);
        assert_eq!(form.focus, LoginFocus::Submit);
        form.handle_event(&TuiEvent::CursorUp);
        assert_eq!(form.focus, LoginFocus::Password);
    }

    #[test]
    fn submit_emits_values_and_keeps_them() {
        let mut form = LoginForm::new();
        type_str(&mut form, "a@b.c");
        form.handle_event(&TuiEvent::FocusNext);
        type_str(&mut form, "pw");

        let event = form.handle_event(&TuiEvent::Submit);
        assert_eq!(
            event,
            Some(LoginEvent::Submit {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
            })
        );
        assert_eq!(form.email.value(), "a@b.c");
        assert_eq!(form.password.value(), "pw");
    }

    #[test]
    fn space_on_button_submits() {
        let mut form = LoginForm::new();
        type_str(&mut form, "a@b.c");
        form.handle_event(&TuiEvent::FocusNext);
        type_str(&mut form, "pw");
        form.handle_event(&TuiEvent::FocusNext);

        let event = form.handle_event(&TuiEvent::InputChar(' '));
        assert!(matches!(event, Some(LoginEvent::Submit { .. })));
    }

    #[test]
    fn required_fields_block_submit() {
        let mut form = LoginForm::new();
        form.focus = LoginFocus::Submit;
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);
        assert_eq!(form.focus, LoginFocus::Email);
        assert_eq!(form.missing, Some(LoginFocus::Email));

        let text = buffer_text(&render(&mut form, 40, FORM_HEIGHT));
        assert!(text.contains(REQUIRED_HINT));

        type_str(&mut form, "a@b.c");
        assert_eq!(form.missing, None);

        assert_eq!(form.handle_event(&TuiEvent::Submit), None);
        assert_eq!(form.focus, LoginFocus::Password);
        assert_eq!(form.missing, Some(LoginFocus::Password));
    }

    #[test]
    fn renders_two_inputs_and_one_submit() {
        let mut form = LoginForm::new();
        let buffer = render(&mut form, 40, FORM_HEIGHT);
        let text = buffer_text(&buffer);

        assert!(text.contains("Email Address"));
        assert!(text.contains("your@email.com"));
        assert!(text.contains("Password"));
        assert!(text.contains("********"));
        assert_eq!(count_text(&buffer, SUBMIT_LABEL), 1);
    }

    #[test]
    fn typing_on_button_is_ignored() {
        let mut form = LoginForm::new();
        form.focus = LoginFocus::Submit;
        assert_eq!(form.handle_event(&TuiEvent::InputChar('x')), None);
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
    }
}
