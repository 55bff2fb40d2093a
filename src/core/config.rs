/// AWS region the parameter store is queried in.
pub const AWS_REGION: &str = "us-east-1";

/// SSM parameter holding the `OpenAI` API key.
pub const API_KEY_PARAMETER: &str = "openai-api-key";

pub const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const MODEL: &str = "gpt-4";

/// Persona sent as the system turn of every conversation.
pub const SYSTEM_PROMPT: &str = "You are a conversational companion intended converse actively with the user, asking questions and providing appropriate reponses to statements and questions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub aws_region: String,
    pub api_key_parameter: String,
    pub completions_url: String,
    pub model: String,
    pub system_prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            aws_region: AWS_REGION.to_string(),
            api_key_parameter: API_KEY_PARAMETER.to_string(),
            completions_url: COMPLETIONS_URL.to_string(),
            model: MODEL.to_string(),
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }
}

impl AppConfig {
    /// Same fixed settings, but sending completions to `url`.
    #[must_use]
    pub fn with_completions_url(mut self, url: impl Into<String>) -> Self {
        self.completions_url = url.into();
        self
    }
}
