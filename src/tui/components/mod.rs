//! # TUI Components
//!
//! All UI pieces of the terminal interface, from single fields up to whole pages.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `Button`: Accent-filled push button
//! - `ChatHeader`: Active agent strip with the compact hamburger
//! - `ChatSidebar`: Agent directory
//! - `MessageEntry`: One conversation entry
//! - `NavBar`: Footer with the current path and key hints
//! - `HomePage`: Welcome screen
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextField`: Single-line input
//! - `LoginForm` / `LoginPage`: Credentials form with required-field checks
//! - `MessageList`: Scrollable conversation view with layout caching
//! - `MessageInput`: Draft area with an inert send button
//! - `ChatPage`: Responsive chat shell owning the sidebar toggle
//!
//! Pages are the top of the tree. The adapter keeps exactly one mounted page
//! and drops it on navigation, which resets everything below it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── button.rs         (atom)
//! ├── text_field.rs     (atom)
//! ├── login_form.rs     (Email, password, submit)
//! ├── chat_header.rs
//! ├── chat_sidebar.rs
//! ├── message.rs        (Single entry renderer)
//! ├── message_list.rs   (Scrollable entry container)
//! ├── message_input.rs
//! ├── nav_bar.rs
//! ├── home_page.rs      (/)
//! ├── login_page.rs     (/login)
//! └── chat_page.rs      (/chat)
//! ```

pub mod button;
pub mod chat_header;
pub mod chat_page;
pub mod chat_sidebar;
pub mod home_page;
pub mod login_form;
pub mod login_page;
pub mod message;
pub mod message_input;
pub mod message_list;
pub mod nav_bar;
pub mod text_field;

pub use chat_page::ChatPage;
pub use home_page::HomePage;
pub use login_form::{LoginEvent, LoginForm};
pub use login_page::LoginPage;
pub use nav_bar::NavBar;
