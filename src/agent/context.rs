use crate::types::Message;

pub const SYSTEM_PROMPT: &str = r#"
You are a helpful weather assistant.

You have access to the following tool:

Tool Name: get_current_weather
Description: Returns a short human-readable sentence describing the current weather for a given city.
Function Signature:
    get_current_weather(city: str, unit: str = "celsius") -> str

Instructions:
- When the user asks about the weather in a city, call get_current_weather with the appropriate parameters.
- If the user asks something else, just respond normally.
"#;

pub const USER_QUESTION: &str = "What's the weather like in San Francisco today?";

/// 上下文 - 系统提示加单条用户提问
pub struct Context {
    system_prompt: String,
    question: String,
}

impl Default for Context {
    fn default() -> Self {
        Context::new(SYSTEM_PROMPT, USER_QUESTION)
    }
}

impl Context {
    pub fn new(system_prompt: impl Into<String>, question: impl Into<String>) -> Self {
        Context {
            system_prompt: system_prompt.into(),
            question: question.into(),
        }
    }

    /// 按顺序返回消息：系统提示在前，用户提问在后
    pub fn messages(&self) -> Vec<Message> {
        vec![
            Message::system(self.system_prompt.as_str()),
            Message::user(self.question.as_str()),
        ]
    }

    /// 获取系统提示
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}
