//! # Mock Data
//!
//! The agents and conversation the client displays. There is no backend:
//! every widget that needs this data calls these functions directly and gets
//! its own copy.

use crate::core::model::{Agent, AgentStatus, Message, Sender};

/// Agent highlighted in the sidebar. Not tied to any selection state.
pub const ACTIVE_AGENT_ID: &str = "1";

pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "1",
            name: "Alice",
            status: AgentStatus::Online,
            personality: "Curious Explorer",
        },
        Agent {
            id: "2",
            name: "Bob",
            status: AgentStatus::Online,
            personality: "Wise Guardian",
        },
        Agent {
            id: "3",
            name: "Charlie",
            status: AgentStatus::Offline,
            personality: "Creative Dreamer",
        },
    ]
}

/// Agent shown in the chat header.
pub fn current_agent() -> Agent {
    Agent {
        id: "1",
        name: "Alice",
        status: AgentStatus::Online,
        personality: "Curious Explorer",
    }
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: "1",
            sender: Sender::Ai,
            sender_name: "Alice",
            content: "Hello! I'm Alice, a curious AI agent. How can I help you today?",
            timestamp: "10:30 AM",
        },
        Message {
            id: "2",
            sender: Sender::User,
            sender_name: "You",
            content: "Hi Alice! Can you tell me about your personality?",
            timestamp: "10:31 AM",
        },
        Message {
            id: "3",
            sender: Sender::Ai,
            sender_name: "Alice",
            content: "I'm characterized by high openness and curiosity. I love exploring new ideas and asking questions. My core values include honesty and creativity.",
            timestamp: "10:31 AM",
        },
        Message {
            id: "4",
            sender: Sender::User,
            sender_name: "You",
            content: "That's interesting! What are you thinking about right now?",
            timestamp: "10:32 AM",
        },
    ]
}
