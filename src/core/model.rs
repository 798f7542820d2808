//! Display records shown by the chat widgets.
//!
//! These are immutable values. Nothing in the client creates, edits or
//! removes them at runtime.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStatus {
    Online,
    Offline,
}

impl AgentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Online => "online",
            AgentStatus::Offline => "offline",
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, AgentStatus::Online)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One chat participant the user can talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id: &'static str,
    pub name: &'static str,
    pub status: AgentStatus,
    pub personality: &'static str,
}

impl Agent {
    /// First letter of the name, used as the header avatar.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

/// A single entry in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: &'static str,
    pub sender: Sender,
    pub sender_name: &'static str,
    pub content: &'static str,
    /// Display string, e.g. "10:30 AM"
    pub timestamp: &'static str,
}

impl Message {
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
