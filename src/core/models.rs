use serde::{Deserialize, Serialize};

use super::config::AppConfig;

/// Body posted by the caller.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub gpt_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

/// Chat completion payload sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// System persona first, then the user's text verbatim.
    #[must_use]
    pub fn for_user_message(config: &AppConfig, text: &str) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: MessageRole::System,
                    content: config.system_prompt.clone(),
                },
                ChatMessage {
                    role: MessageRole::User,
                    content: text.to_string(),
                },
            ],
        }
    }
}
