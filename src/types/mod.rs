mod chat;
mod function;

pub use chat::{AssistantMessage, ChatRequest, ChatResponse, Choice, Message, Role, Usage};
pub use function::{FunctionCall, FunctionDefinition, Tool, ToolCall, ToolChoice};
