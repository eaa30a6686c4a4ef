use std::io::Write;

use crate::core::{ChatRole, Message, RenderError, RenderStatus, Response};

use super::{Block, Printer, or_none};

impl<W: Write> Printer<W> {
    /// Render every choice of a completion response.
    ///
    /// A choice without a message gets a one-line diagnostic and the
    /// remaining choices are still rendered.
    #[tracing::instrument(
        name = "render_response",
        skip(self, response),
        fields(choices = response.choices.len())
    )]
    pub fn render_response(&mut self, response: &Response, title: &str) -> RenderStatus {
        let mut block = Block::default();
        self.banner(&mut block, self.config.response_banner, title);

        if let Some(model) = &response.model {
            block.line(format_args!("Model: {model}"));
        }
        if let Some(id) = &response.id {
            block.line(format_args!("ID: {id}"));
        }
        if response.choices.is_empty() {
            block.line("(no choices)");
        }

        let mut status = RenderStatus::Complete;
        for (i, choice) in response.choices.iter().enumerate() {
            block.blank();
            block.line(format_args!("Choice {i}:"));
            block.line(format_args!(
                "  Finish Reason: {}",
                or_none(choice.finish_reason.as_deref())
            ));

            let Some(message) = &choice.message else {
                let err = RenderError::MissingField {
                    field: "message",
                    context: format!("choice {i}"),
                };
                block.line(format_args!("  Could not format custom fields: {err}"));
                status.degrade(err);
                continue;
            };

            block.line(format_args!("  Message Role: {}", message.role));
            block.line(format_args!(
                "  Message Content: {}",
                or_none(message.content.as_deref())
            ));

            let tool_calls = message.tool_calls();
            if !tool_calls.is_empty() {
                block.line(format_args!("  Tool Calls: {}", tool_calls.len()));
                for (j, call) in tool_calls.iter().enumerate() {
                    block.line(format_args!("    Tool Call {j}:"));
                    block.line(format_args!("      ID: {}", or_none(call.id.as_deref())));
                    block.line(format_args!(
                        "      Function: {}",
                        or_none(call.function.name.as_deref())
                    ));
                    block.line(format_args!(
                        "      Arguments: {}",
                        or_none(call.function.arguments.as_deref())
                    ));
                }
            }
        }

        self.emit("render_response", block, status)
    }

    /// Render a conversation, one numbered section per message.
    pub fn render_messages(&mut self, messages: &[Message], title: &str) -> RenderStatus {
        let mut block = Block::default();
        self.banner(&mut block, self.config.messages_banner, title);

        if messages.is_empty() {
            block.line("(no messages)");
        }

        for (i, message) in messages.iter().enumerate() {
            let content = message.content.as_deref().unwrap_or_default();

            block.blank();
            block.line(format_args!(
                "--- Message {} ({}) ---",
                i + 1,
                message.role.as_str().to_uppercase()
            ));
            block.line(content);

            let tool_calls = message.tool_calls();
            if !tool_calls.is_empty() {
                block.blank();
                block.line(format_args!("Tool Calls ({}):", tool_calls.len()));
                for (j, call) in tool_calls.iter().enumerate() {
                    block.line(format_args!(
                        "  {}. {}",
                        j + 1,
                        call.function.name.as_deref().unwrap_or("unknown")
                    ));
                    block.line(format_args!(
                        "     Args: {}",
                        call.function.arguments.as_deref().unwrap_or_default()
                    ));
                }
            }

            if message.role == ChatRole::Tool {
                block.line(format_args!(
                    "Tool: {}",
                    message.name.as_deref().unwrap_or("unknown")
                ));
                block.line(format_args!("Response: {content}"));
            }
        }

        self.emit("render_messages", block, RenderStatus::Complete)
    }
}
