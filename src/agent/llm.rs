use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ChatError, Result};
use crate::types::{ChatRequest, ChatResponse, Message, Tool, ToolChoice};

pub struct LlmClient {
    client: Client,
    config: ClientConfig,
}

impl LlmClient {
    pub fn new(config: ClientConfig) -> Self {
        LlmClient {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 发送一次 chat completions 请求，不重试，不设超时
    pub async fn chat(&self, messages: &[Message], tools: &[Tool]) -> Result<ChatResponse> {
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            tools,
            tool_choice: ToolChoice::Auto,
            stream: false,
        };

        let url = self.config.chat_completions_url();
        debug!(model = %self.config.model, url = %url, tools = tools.len(), "sending chat completion");

        let response = self
            .client
            .post(&url)
            .headers(bearer_headers(&self.config.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "chat completion failed");
            return Err(status_to_error(status.as_u16(), text));
        }

        let chat_response: ChatResponse = serde_json::from_str(&text)
            .map_err(|source| ChatError::Decode { source, body: text })?;

        if chat_response.choices.is_empty() {
            return Err(ChatError::NoChoices);
        }

        debug!(
            prompt_tokens = chat_response.usage.prompt_tokens,
            completion_tokens = chat_response.usage.completion_tokens,
            total_tokens = chat_response.usage.total_tokens,
            "chat completion received"
        );

        Ok(chat_response)
    }
}

fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

/// OpenAI 风格为对象，部分兼容服务直接返回字符串
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Detailed { message: String },
    Plain(String),
}

fn status_to_error(status: u16, body: String) -> ChatError {
    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => {
            let message = match envelope.error {
                ErrorBody::Detailed { message } => message,
                ErrorBody::Plain(message) => message,
            };
            ChatError::Service { status, message }
        }
        Err(_) => ChatError::Api { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_style_error_becomes_service_error() {
        let err = status_to_error(
            404,
            r#"{"error":{"message":"model \"llama3.2:latest\" not found","type":"api_error"}}"#
                .to_string(),
        );
        assert!(
            matches!(err, ChatError::Service { status: 404, ref message } if message.contains("not found"))
        );
    }

    #[test]
    fn plain_error_string_becomes_service_error() {
        let err = status_to_error(500, r#"{"error":"out of memory"}"#.to_string());
        assert!(matches!(err, ChatError::Service { status: 500, ref message } if message == "out of memory"));
    }

    #[test]
    fn unrecognized_body_is_kept_raw() {
        let err = status_to_error(502, "Bad Gateway".to_string());
        assert!(matches!(err, ChatError::Api { status: 502, ref body } if body == "Bad Gateway"));
    }

    #[test]
    fn bearer_header_uses_placeholder_key() {
        let headers = bearer_headers("ollama");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer ollama");
    }
}
