//! # Core Application Logic
//!
//! Routing, the display records and the mock data behind them.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Route (pages)        │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • mock data            │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: The `Route` enum: the three pages and their paths
//! - [`state`]: The `App` struct: current route and navigation history
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`model`]: `Agent` and `Message` display records
//! - [`mock`]: The hard-coded agents and conversation
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod mock;
pub mod model;
pub mod route;
pub mod state;
