pub mod context;
pub mod inspect;
pub mod llm;

pub use context::Context;
pub use inspect::{inspect, Inspection};
pub use llm::LlmClient;
