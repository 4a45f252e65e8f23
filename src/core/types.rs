use serde::Serialize;

use crate::provider::Provider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
}

/// One entry in a conversation. The system message, if present, must come
/// first; `build_messages` guarantees that ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

/// Build an ordered conversation from a user prompt and an optional system
/// prompt. An empty system prompt is treated as absent.
pub fn build_messages(user_text: impl Into<String>, system_text: Option<&str>) -> Vec<Message> {
    let mut messages = Vec::with_capacity(2);

    if let Some(system) = system_text.filter(|s| !s.is_empty()) {
        messages.push(Message {
            role: ChatRole::System,
            content: system.to_string(),
        });
    }

    messages.push(Message {
        role: ChatRole::User,
        content: user_text.into(),
    });

    messages
}

/// A raw completion: the assistant content plus usage and response metadata,
/// without any structured parsing applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub content: String,
    pub usage: CompletionUsage,
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionUsage {
    pub prompt_tokens: i32,
    pub completion_tokens: i32,
    pub total_tokens: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMetadata {
    pub provider: Provider,
    pub model: String,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_message_comes_first() {
        let messages = build_messages("hi", Some("sys"));

        assert_eq!(
            messages,
            vec![
                Message {
                    role: ChatRole::System,
                    content: "sys".to_string(),
                },
                Message {
                    role: ChatRole::User,
                    content: "hi".to_string(),
                },
            ]
        );
    }

    #[test]
    fn empty_system_prompt_is_skipped() {
        let messages = build_messages("hi", Some(""));

        assert_eq!(
            messages,
            vec![Message {
                role: ChatRole::User,
                content: "hi".to_string(),
            }]
        );
    }

    #[test]
    fn missing_system_prompt_yields_user_only() {
        let messages = build_messages("hi", None);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, ChatRole::User);
    }

    #[test]
    fn messages_serialize_with_wire_role_names() {
        let messages = build_messages("hi", Some("sys"));
        let value = serde_json::to_value(&messages).unwrap();

        assert_eq!(value[0]["role"], "system");
        assert_eq!(value[1]["role"], "user");
        assert_eq!(value[1]["content"], "hi");
    }
}
