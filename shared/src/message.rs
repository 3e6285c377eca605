//! Chat messages shown in the generation view.

use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    User,
    System,
}

/// A single entry in the chat log. Messages are never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    origin: MessageOrigin,
    text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            origin: MessageOrigin::User,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.origin == MessageOrigin::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(text: &str) -> Message {
        Message {
            origin: MessageOrigin::System,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_origin_serializes_lowercase() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json["origin"], "user");
        assert_eq!(json["text"], "hi");

        let json = serde_json::to_value(system("ok")).unwrap();
        assert_eq!(json["origin"], "system");
    }

    #[test]
    fn test_is_user() {
        assert!(Message::user("a").is_user());
        assert!(!system("a").is_user());
    }
}
