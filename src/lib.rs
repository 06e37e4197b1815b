pub mod config;
pub mod error;
pub mod types;
pub mod agent;
pub mod tools;
pub mod cli;

pub use config::ClientConfig;
pub use error::ChatError;
pub use agent::{inspect, Context, Inspection, LlmClient};
pub use cli::{run, run_cli};
