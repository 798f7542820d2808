//! # Application State
//!
//! Core state for the client. Domain only: no TUI types. Page-local state
//! (form fields, sidebar visibility) lives in the `tui` module and is
//! rebuilt whenever the route changes.
//!
//! ```text
//! App
//! ├── route: Route          // page currently shown
//! └── history: Vec<Route>   // previous routes, most recent last
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub route: Route,
    pub history: Vec<Route>,
}

impl App {
    pub fn new(start_route: Route) -> Self {
        Self {
            route: start_route,
            history: Vec::new(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Route::default())
    }
}
