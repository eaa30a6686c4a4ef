pub mod config;
pub mod error;
pub mod types;

pub use config::RenderConfig;
pub use error::{RenderError, RenderStatus};
pub use types::{ChatRole, Choice, FunctionCall, Message, Response, ToolCall, Usage};
