//! Structural layout of JSON values for mappings and debug dumps.
//!
//! Containers stay on one line when they fit the target width. Otherwise each
//! entry goes on its own line, aligned one column right of the opening
//! bracket, and nested values are laid out the same way.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};
use unicode_width::UnicodeWidthStr;

/// Compact JSON with a space after `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Single-line rendering of `value`.
pub(crate) fn compact(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => value.to_string(),
    }
}

/// Copy of `value` with every object's keys in sorted order.
pub(crate) fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let sorted: Map<String, Value> = keys
                .into_iter()
                .map(|key| (key.clone(), sort_keys(&map[key])))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Lay out `value` with sorted keys, wrapped to `width` display columns.
pub(crate) fn wrap(value: &Value, width: usize) -> String {
    let mut out = String::new();
    Layout { width }.write(&sort_keys(value), 0, 0, &mut out);
    out
}

struct Layout {
    width: usize,
}

impl Layout {
    /// `column` is where the value starts; `trailing` counts the closing
    /// characters that will follow it on the same line.
    fn write(&self, value: &Value, column: usize, trailing: usize, out: &mut String) {
        let flat = compact(value);
        if column + flat.width() + trailing <= self.width {
            out.push_str(&flat);
            return;
        }

        match value {
            Value::Object(map) if !map.is_empty() => {
                out.push('{');
                let inner = column + 1;
                let last = map.len() - 1;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push_str(",\n");
                        out.push_str(&" ".repeat(inner));
                    }
                    let key = compact(&Value::String(key.clone()));
                    out.push_str(&key);
                    out.push_str(": ");
                    let closing = if i == last { trailing + 1 } else { 1 };
                    self.write(item, inner + key.width() + 2, closing, out);
                }
                out.push('}');
            }
            Value::Array(items) if !items.is_empty() => {
                out.push('[');
                let inner = column + 1;
                let last = items.len() - 1;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(",\n");
                        out.push_str(&" ".repeat(inner));
                    }
                    let closing = if i == last { trailing + 1 } else { 1 };
                    self.write(item, inner, closing, out);
                }
                out.push(']');
            }
            // scalars never break
            _ => out.push_str(&flat),
        }
    }
}
