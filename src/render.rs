//! Terminal rendering of completion data.
//!
//! A [`Printer`] writes each render call as one banner-framed block to its
//! sink. The free functions in this module do the same on standard output
//! with the default [`RenderConfig`].

mod data;
pub(crate) mod layout;
mod messages;
mod usage;

use std::fmt::{Debug, Display};
use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{Message, RenderConfig, RenderError, RenderStatus, Response};

pub const RESPONSE_TITLE: &str = "LLM Response";
pub const JSON_TITLE: &str = "JSON Data";
pub const MAPPING_TITLE: &str = "Dictionary";
pub const SEQUENCE_TITLE: &str = "List";
pub const MESSAGES_TITLE: &str = "Messages";
pub const USAGE_TITLE: &str = "Token Usage";
pub const DEBUG_TITLE: &str = "Debug Output";

/// Text of one render call.
#[derive(Debug, Default)]
pub(crate) struct Block {
    text: String,
}

impl Block {
    pub(crate) fn line(&mut self, line: impl Display) {
        self.text.push_str(&line.to_string());
        self.text.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.text.push('\n');
    }
}

pub struct Printer<W: Write> {
    out: W,
    config: RenderConfig,
}

impl Printer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for Printer<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self::with_config(out, RenderConfig::default())
    }

    pub fn with_config(out: W, config: RenderConfig) -> Self {
        Self { out, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub(crate) fn banner(&self, block: &mut Block, width: usize, title: &str) {
        let rule = self.config.banner_char.to_string().repeat(width);
        block.blank();
        block.line(&rule);
        block.line(title);
        block.line(&rule);
    }

    /// Write `block` in one go and report how the render went.
    pub(crate) fn emit(
        &mut self,
        operation: &'static str,
        block: Block,
        status: RenderStatus,
    ) -> RenderStatus {
        debug!(operation, bytes = block.text.len(), "rendered block");

        let written = self
            .out
            .write_all(block.text.as_bytes())
            .and_then(|()| self.out.flush());

        match (written, status) {
            (Err(e), _) => {
                warn!(operation, error = %e, "failed to write rendered block");
                RenderStatus::Degraded(RenderError::Io(e))
            }
            (Ok(()), RenderStatus::Degraded(err)) => {
                warn!(operation, error = %err, "rendered with diagnostics");
                RenderStatus::Degraded(err)
            }
            (Ok(()), RenderStatus::Complete) => RenderStatus::Complete,
        }
    }
}

/// Value to print when an optional field is absent.
pub(crate) fn or_none(field: Option<&str>) -> &str {
    field.unwrap_or("(none)")
}

pub fn render_response(response: &Response, title: &str) -> RenderStatus {
    Printer::stdout().render_response(response, title)
}

pub fn render_json<T>(data: &T, title: &str, indent: usize) -> RenderStatus
where
    T: Serialize + Debug + ?Sized,
{
    Printer::stdout().render_json(data, title, indent)
}

pub fn render_mapping<T>(data: &T, title: &str, max_width: usize) -> RenderStatus
where
    T: Serialize + Debug + ?Sized,
{
    Printer::stdout().render_mapping(data, title, max_width)
}

pub fn render_sequence<T: Display>(
    data: &[T],
    title: &str,
    max_items: Option<usize>,
) -> RenderStatus {
    Printer::stdout().render_sequence(data, title, max_items)
}

pub fn render_messages(messages: &[Message], title: &str) -> RenderStatus {
    Printer::stdout().render_messages(messages, title)
}

pub fn render_usage<T>(usage: &T, title: &str) -> RenderStatus
where
    T: Serialize + Debug + ?Sized,
{
    Printer::stdout().render_usage(usage, title)
}

/// Quick structural dump for ad-hoc debugging.
pub fn debug_print<T>(data: &T, title: &str) -> RenderStatus
where
    T: Serialize + Debug + ?Sized,
{
    Printer::stdout().debug_print(data, title)
}
