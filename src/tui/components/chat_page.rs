//! # Chat Page
//!
//! Shell of the `/chat` route: agent sidebar, header, conversation and draft.
//!
//! ## Layout
//!
//! ```text
//! wide (width >= compact_width)        compact (width < compact_width)
//! ┌──────────┬──────────────────┐      ┌─────────────────────────┐
//! │ sidebar  │ header           │      │ ☰ header                │
//! │          ├──────────────────┤      ├─────────────────────────┤
//! │          │ messages         │      │ messages                │
//! │          │                  │      │                         │
//! │          │ [draft   ] [Send]│      │ [draft           ] [➤]  │
//! └──────────┴──────────────────┘      └─────────────────────────┘
//! ```
//!
//! In the compact layout the sidebar is hidden behind the hamburger. Opening
//! it draws the sidebar as an overlay below the header and dims the rest of
//! the page; clicking the dimmed backdrop closes it.
//!
//! The page is mounted fresh on every route change, so the sidebar always
//! starts closed and the conversation starts at the top.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Clear;

use crate::core::mock;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::chat_header::{ChatHeader, HEADER_HEIGHT};
use crate::tui::components::chat_sidebar::ChatSidebar;
use crate::tui::components::message_input::{INPUT_HEIGHT, MessageInput};
use crate::tui::components::message_list::{MessageList, MessageListState};
use crate::tui::event::TuiEvent;

pub struct ChatPage {
    pub is_sidebar_open: bool,
    pub message_list: MessageListState,
    pub message_input: MessageInput,
    compact_width: u16,
    sidebar_width: u16,
    /// Layout of the last frame, used for hit testing clicks
    compact: bool,
    hamburger_area: Option<Rect>,
    overlay_area: Option<Rect>,
}

impl ChatPage {
    pub fn new(compact_width: u16, sidebar_width: u16) -> Self {
        Self {
            is_sidebar_open: false,
            message_list: MessageListState::new(),
            message_input: MessageInput::new(),
            compact_width,
            sidebar_width,
            compact: false,
            hamburger_area: None,
            overlay_area: None,
        }
    }

    fn toggle_sidebar(&mut self) {
        if !self.compact {
            debug!("Sidebar toggle ignored in the wide layout");
            return;
        }
        self.is_sidebar_open = !self.is_sidebar_open;
        debug!("Sidebar open: {}", self.is_sidebar_open);
    }

    fn handle_click(&mut self, position: Position) {
        if self.hamburger_area.is_some_and(|r| r.contains(position)) {
            self.toggle_sidebar();
            return;
        }
        if self.is_sidebar_open
            && let Some(overlay) = self.overlay_area
            && !overlay.contains(position)
        {
            debug!("Backdrop click, closing sidebar");
            self.is_sidebar_open = false;
        }
    }
}

impl Component for ChatPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.compact = area.width < self.compact_width;

        let main_area = if self.compact {
            area
        } else {
            let [sidebar_area, main_area] = Layout::horizontal([
                Constraint::Length(self.sidebar_width),
                Constraint::Min(0),
            ])
            .areas(area);
            ChatSidebar::new().render(frame, sidebar_area);
            main_area
        };

        let [header_area, list_area, input_area, _] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(main_area);

        ChatHeader::new(mock::current_agent(), self.compact, self.is_sidebar_open)
            .render(frame, header_area);
        MessageList::new(&mut self.message_list, self.compact).render(frame, list_area);

        self.message_input.compact = self.compact;
        let [_, input_area, _] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(input_area);
        self.message_input.render(frame, input_area);

        self.hamburger_area = self.compact.then(|| ChatHeader::hamburger_area(header_area));
        self.overlay_area = None;

        if self.compact && self.is_sidebar_open {
            let below_header = Rect {
                y: area.y + HEADER_HEIGHT.min(area.height),
                height: area.height.saturating_sub(HEADER_HEIGHT),
                ..area
            };
            frame
                .buffer_mut()
                .set_style(below_header, Style::default().add_modifier(Modifier::DIM));

            let overlay = Rect {
                width: self.sidebar_width.min(below_header.width),
                ..below_header
            };
            frame.render_widget(Clear, overlay);
            ChatSidebar::new().render(frame, overlay);
            self.overlay_area = Some(overlay);
        }
    }
}

impl EventHandler for ChatPage {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ToggleSidebar => self.toggle_sidebar(),
            TuiEvent::MouseClick(col, row) => self.handle_click(Position::new(*col, *row)),
            TuiEvent::ScrollUp | TuiEvent::CursorUp => {
                self.message_list.handle_event(&TuiEvent::ScrollUp);
            }
            TuiEvent::ScrollDown | TuiEvent::CursorDown => {
                self.message_list.handle_event(&TuiEvent::ScrollDown);
            }
            TuiEvent::ScrollPageUp | TuiEvent::ScrollPageDown => {
                self.message_list.handle_event(event);
            }
            _ => {
                self.message_input.handle_event(event);
            }
        }
        None
    }
}
