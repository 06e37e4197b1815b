use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "llama3.2:latest";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
/// 占位密钥：Ollama 不校验，但 OpenAI 兼容接口要求携带
pub const PLACEHOLDER_API_KEY: &str = "ollama";

/// 客户端配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub model: String,
    pub base_url: String,
    pub api_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// chat completions 端点
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
