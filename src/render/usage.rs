use std::fmt::Debug;
use std::io::Write;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::{RenderError, RenderStatus};

use super::{Block, Printer, layout};

/// A named token counter.
type Counter = (String, i128);

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Flatten usage into ordered counters. `None` means no usage was reported.
///
/// Null counters are skipped. Nested groups such as
/// `completion_tokens_details` contribute their counters prefixed with the
/// group name.
pub(crate) fn normalize(value: &Value) -> Result<Option<Vec<Counter>>, RenderError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => {
            let mut counters = Vec::new();
            flatten(None, map, &mut counters)?;
            Ok(if counters.is_empty() { None } else { Some(counters) })
        }
        other => Err(RenderError::UsageShape {
            kind: kind_of(other),
        }),
    }
}

fn flatten(
    prefix: Option<&str>,
    map: &Map<String, Value>,
    counters: &mut Vec<Counter>,
) -> Result<(), RenderError> {
    for (key, value) in map {
        let name = match prefix {
            Some(prefix) => format!("{prefix}_{key}"),
            None => key.clone(),
        };

        match value {
            Value::Null => {}
            Value::Object(group) => flatten(Some(&name), group, counters)?,
            Value::Number(number) => {
                let count = number
                    .as_i64()
                    .map(i128::from)
                    .or_else(|| number.as_u64().map(i128::from))
                    .ok_or_else(|| RenderError::UsageValue {
                        key: name.clone(),
                        value: number.to_string(),
                    })?;
                counters.push((name, count));
            }
            other => {
                return Err(RenderError::UsageValue {
                    key: name,
                    value: other.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// `prompt_tokens` -> `Prompt Tokens`
pub(crate) fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for ch in name.chars() {
        if ch == '_' {
            out.push(' ');
            word_start = true;
        } else if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

/// `1234567` -> `1,234,567`
pub(crate) fn group_thousands(count: i128) -> String {
    let digits = count.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if count < 0 {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

impl<W: Write> Printer<W> {
    /// Render token counters, from a typed [`Usage`](crate::core::Usage) or
    /// any plain mapping of counter names to integers.
    #[tracing::instrument(name = "render_usage", skip_all, fields(title = %title))]
    pub fn render_usage<T>(&mut self, usage: &T, title: &str) -> RenderStatus
    where
        T: Serialize + Debug + ?Sized,
    {
        let mut block = Block::default();
        self.banner(&mut block, self.config.usage_banner, title);

        let mut status = RenderStatus::Complete;
        let normalized = serde_json::to_value(usage)
            .map_err(|source| RenderError::Serialize {
                message: "usage has no JSON representation".to_string(),
                source,
            })
            .and_then(|value| normalize(&value));

        match normalized {
            Ok(None) => block.line("(no usage reported)"),
            Ok(Some(counters)) => {
                for (name, count) in counters {
                    block.line(format_args!(
                        "{}: {}",
                        title_case(&name),
                        group_thousands(count)
                    ));
                }
            }
            Err(err) => {
                let raw = match serde_json::to_value(usage) {
                    Ok(value) => layout::compact(&value),
                    Err(_) => format!("{usage:?}"),
                };
                block.line(format_args!("Could not format usage: {err}"));
                block.line(format_args!("Raw usage: {raw}"));
                status.degrade(err);
            }
        }

        self.emit("render_usage", block, status)
    }
}
