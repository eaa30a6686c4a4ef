//! # llm-pretty
//!
//! Readable terminal output for chat completions: responses, conversations,
//! tool calls and token usage, plus general JSON and structural dumps for
//! ad-hoc inspection.
//!
//! Rendering never aborts the caller. Every render call returns a
//! [`RenderStatus`]; when part of the input cannot be formatted, a one-line
//! diagnostic takes its place in the output and the status is degraded.
//!
//! ## Quick Start
//!
//! ```rust
//! use llm_pretty::{Message, Printer, Usage};
//!
//! let conversation = vec![
//!     Message::system("You are a helpful assistant."),
//!     Message::user("What's the weather in Tokyo?"),
//!     Message::tool("get_current_weather", "call_1", r#"{"temperature":"10"}"#),
//! ];
//!
//! let mut printer = Printer::stdout();
//! printer.render_messages(&conversation, "Conversation");
//! printer.render_usage(&Usage::new(50, 25), "Token Usage");
//! ```

pub mod core;
pub mod render;

pub use crate::core::{
    ChatRole, Choice, FunctionCall, Message, RenderConfig, RenderError, RenderStatus, Response,
    ToolCall, Usage,
};
pub use crate::render::{
    Printer, debug_print, render_json, render_mapping, render_messages, render_response,
    render_sequence, render_usage,
};
