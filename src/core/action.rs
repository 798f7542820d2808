//! # Actions
//!
//! Everything that can happen at the application level becomes an `Action`.
//! User presses F3? That's `Action::Navigate(Route::Chat)`.
//! Login form submitted? That's `Action::SubmitLogin { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what to do next.
//! No I/O here beyond logging.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```

use log::{debug, info};

use crate::core::route::Route;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    Back,
    SubmitLogin { email: String, password: String },
    Quit,
}

/// What the adapter must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The route changed; discard page state and mount this page fresh.
    Remount(Route),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(route) => {
            if route == app.route {
                debug!("Already on {}, ignoring navigation", route);
                return Effect::None;
            }
            info!("Navigate {} -> {}", app.route, route);
            app.history.push(app.route);
            app.route = route;
            Effect::Remount(route)
        }
        Action::Back => match app.history.pop() {
            Some(previous) => {
                info!("Back {} -> {}", app.route, previous);
                app.route = previous;
                Effect::Remount(previous)
            }
            None => {
                debug!("Back with empty history, ignoring");
                Effect::None
            }
        },
        Action::SubmitLogin { email, password } => {
            // No authentication backend: the attempt is only recorded.
            info!(
                "Login attempt: email={:?} password_len={}",
                email,
                password.chars().count()
            );
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
