use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opening message shown at the start of every conversation.
pub const GREETING: &str = "Hello! I'm the hospital AI receptionist. Please describe your \
     symptoms or concerns, and I'll help route you to the appropriate department.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single entry in the conversation history. Immutable once created;
/// the history is append-only and rendered in append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Assistant)
    }

    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// One logical conversation with the receptionist backend, identified by an
/// opaque random token the server uses to keep per-conversation state.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: String,
    pub messages: Vec<Message>,
}

impl ChatSession {
    /// Fresh session: new identity, history seeded with the greeting.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            messages: vec![Message::assistant(GREETING)],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].sender, Sender::Assistant);
        assert_eq!(session.messages[0].text, GREETING);
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(ChatSession::new().id, ChatSession::new().id);
    }

    #[test]
    fn history_keeps_append_order() {
        let mut session = ChatSession::new();
        session.push_user("first");
        session.push_assistant("second");
        let texts: Vec<&str> = session.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![GREETING, "first", "second"]);
    }
}
