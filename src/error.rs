use thiserror::Error;

/// 请求与解析响应过程中的错误
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("failed to decode chat completion response: {source}; raw body: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("response contained no choices")]
    NoChoices,

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChatError>;
