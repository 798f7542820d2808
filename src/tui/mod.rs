//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the mounted page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Page Lifecycle
//!
//! Exactly one page is mounted at a time. Whenever `core::update` returns
//! `Effect::Remount`, the current page is dropped and the new route's page is
//! built from scratch, so drafts, typed credentials and the sidebar toggle
//! never survive navigation.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms and only redraws after an
//! event or a terminal resize.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ChatPage, HomePage, LoginEvent, LoginPage};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// The mounted page and its local state.
pub enum Page {
    Home(HomePage),
    Login(LoginPage),
    Chat(ChatPage),
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub page: Page,
    compact_width: u16,
    sidebar_width: u16,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig, route: Route) -> Self {
        let mut tui = Self {
            page: Page::Home(HomePage),
            compact_width: config.compact_width,
            sidebar_width: config.sidebar_width,
        };
        tui.mount(route);
        tui
    }

    /// Replace the mounted page with a fresh one for `route`.
    pub fn mount(&mut self, route: Route) {
        debug!("Mounting page for {}", route);
        self.page = match route {
            Route::Home => Page::Home(HomePage),
            Route::Login => Page::Login(LoginPage::new()),
            Route::Chat => Page::Chat(ChatPage::new(self.compact_width, self.sidebar_width)),
        };
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Route one event through the core and the mounted page.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    let action = match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::GoTo(route) => Some(Action::Navigate(route)),
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::Resize => None,
        event => match &mut tui.page {
            Page::Home(_) => None,
            Page::Login(page) => match page.handle_event(&event) {
                Some(LoginEvent::Submit { email, password }) => {
                    Some(Action::SubmitLogin { email, password })
                }
                Some(LoginEvent::Changed) | None => None,
            },
            Page::Chat(page) => {
                page.handle_event(&event);
                None
            }
        },
    };

    let Some(action) = action else {
        return false;
    };
    match update(app, action) {
        Effect::None => false,
        Effect::Remount(route) => {
            tui.mount(route);
            false
        }
        Effect::Quit => true,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config.start_route);
    let mut tui = TuiState::new(&config, app.route);
    info!("Starting at {}", app.route);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything pending before the next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut app, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}
