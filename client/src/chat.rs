//! Fake community chat widget
//!
//! Messages live in memory only; there is no transport behind the widget.

use chrono::Local;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    pub time: String,
}

pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                author: "Admin".to_string(),
                text: "Welcome to the Dark Haven chat!".to_string(),
                time: "10:30".to_string(),
            }],
        }
    }

    pub fn push(&mut self, author: &str, text: &str) -> &ChatMessage {
        let index = self.messages.len();
        self.messages.push(ChatMessage {
            author: author.to_string(),
            text: text.to_string(),
            time: Local::now().format("%H:%M").to_string(),
        });
        &self.messages[index]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}
