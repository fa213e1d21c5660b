//! Client for the upstream chat-completion API.
//!
//! The proxy is stateless: each user message is forwarded as a single user
//! turn with the StudyBot system prompt, and the assistant text comes back
//! from the first choice. Credentials are read from the process environment
//! and never reach client-facing code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

const SYSTEM_PROMPT: &str = "You are StudyBot, a helpful AI study assistant for SlayStudy. \
You help students with their studies in a friendly, encouraging way. Keep responses concise \
but informative. Use emojis occasionally to make learning fun. Focus on educational topics \
like homework help, explaining concepts, study strategies, and academic support.";

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("OpenAI API key not configured")]
    MissingApiKey,

    #[error("upstream API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected response shape from the completion API")]
    InvalidResponse,
}

type Result<T> = std::result::Result<T, ChatError>;

/// Upstream API configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: String,
    pub model: String,
}

impl ChatConfig {
    /// Read `OPENAI_API_KEY` (required) and `SLAYSTUDY_MODEL` (optional)
    /// from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok();
        let model = std::env::var("SLAYSTUDY_MODEL").ok();
        Self::from_values(api_key, model)
    }

    fn from_values(api_key: Option<String>, model: Option<String>) -> Result<Self> {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Ok(Self {
            api_key: api_key.ok_or(ChatError::MissingApiKey)?,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Stateless forwarder to the completion API.
pub struct ChatClient {
    http: reqwest::Client,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Forward one user message and return the assistant's reply text.
    /// Non-2xx upstream responses are reported with their status and body.
    pub async fn complete(&self, message: &str) -> Result<String> {
        let request = CompletionRequest {
            model: &self.config.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ApiMessage {
                    role: "user",
                    content: message,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("completion API returned {}", status);
            return Err(ChatError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(ChatError::InvalidResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_api_key() {
        assert!(matches!(
            ChatConfig::from_values(None, None),
            Err(ChatError::MissingApiKey)
        ));
        assert!(matches!(
            ChatConfig::from_values(Some("  ".to_string()), None),
            Err(ChatError::MissingApiKey)
        ));
    }

    #[test]
    fn test_config_defaults_model() {
        let config = ChatConfig::from_values(Some("sk-test".to_string()), None).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);

        let config =
            ChatConfig::from_values(Some("sk-test".to_string()), Some("gpt-4o".to_string()))
                .unwrap();
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest {
            model: DEFAULT_MODEL,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ApiMessage {
                    role: "user",
                    content: "hi",
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Hello! 📚"}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Hello! 📚");

        let empty: CompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(empty.choices.is_empty());
    }
}
