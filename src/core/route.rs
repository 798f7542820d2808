//! # Routes
//!
//! The three pages of the client and the paths that select them.
//!
//! | Path     | Route          | Page        |
//! |----------|----------------|-------------|
//! | `/`      | `Route::Home`  | `HomePage`  |
//! | `/login` | `Route::Login` | `LoginPage` |
//! | `/chat`  | `Route::Chat`  | `ChatPage`  |
//!
//! Anything else is rejected at the parsing boundary; there is no 404 page.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Login,
    Chat,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[Route::Home, Route::Login, Route::Chat]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Chat => "/chat",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Chat => "Chat",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    NotFound(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::NotFound(path) => {
                write!(f, "no route matches '{path}' (expected /, /login or /chat)")
            }
        }
    }
}

impl std::error::Error for RouteError {}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // "/login/" matches "/login", but "/" must stay "/"
        let path = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };

        Route::all()
            .iter()
            .copied()
            .find(|route| route.path() == path)
            .ok_or_else(|| RouteError::NotFound(s.to_string()))
    }
}
