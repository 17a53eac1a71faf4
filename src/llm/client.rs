//! Ollama `/api/chat` client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::LlmError;
use crate::llm::tags::strip_code_fences;

/// Trait for one system + user exchange with a chat model.
///
/// This abstraction allows mocking the model service in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send a system instruction and user content, return the reply text.
    async fn exchange(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: String,
}

/// Non-streaming client for a local Ollama server.
///
/// Failures are returned once; there is no retry.
pub struct OllamaClient {
    client: Client,
    url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            url: config.chat_url(),
            model: config.model.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatModel for OllamaClient {
    async fn exchange(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            stream: false,
        };

        debug!(
            url = %self.url,
            model = %self.model,
            system_len = system.len(),
            user_len = user.len(),
            "Sending chat request"
        );

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status { status, body });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        debug!(response_len = chat.message.content.len(), "Received chat reply");

        Ok(strip_code_fences(&chat.message.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = ChatRequest {
            model: "qwen2.5-coder:14b",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "be brief",
                },
                ChatMessage {
                    role: "user",
                    content: "diff here",
                },
            ],
            stream: false,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "qwen2.5-coder:14b",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "diff here"}
                ],
                "stream": false
            })
        );
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let json = r#"{"model": "m", "created_at": "2024-01-01T00:00:00Z", "message": {"role": "assistant", "content": "hi"}, "done": true}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.content, "hi");
    }

    #[test]
    fn test_client_uses_config() {
        let config = Config {
            ollama_url: "http://10.0.0.5:11434/".to_string(),
            model: "codellama".to_string(),
        };
        let client = OllamaClient::new(&config);
        assert_eq!(client.url(), "http://10.0.0.5:11434/api/chat");
        assert_eq!(client.model(), "codellama");
    }
}
