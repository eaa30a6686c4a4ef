use std::fmt::{Debug, Display};
use std::io::Write;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use unicode_width::UnicodeWidthStr;

use crate::core::{RenderError, RenderStatus};

use super::{Block, Printer, layout};

/// `data` as JSON, or its debug text when it has no JSON representation.
///
/// The fallback covers the whole value, not only the leaf that failed.
enum Json {
    Value(Value),
    Debug(String, RenderError),
}

fn to_json<T>(data: &T) -> Json
where
    T: Serialize + Debug + ?Sized,
{
    match serde_json::to_value(data) {
        Ok(value) => Json::Value(value),
        Err(source) => Json::Debug(
            format!("{data:?}"),
            RenderError::Serialize {
                message: "value has no JSON representation".to_string(),
                source,
            },
        ),
    }
}

/// Null and empty containers carry nothing worth printing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

const NO_DATA: &str = "(no data)";

fn pretty(value: &Value, indent: usize) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

impl<W: Write> Printer<W> {
    /// Render `data` as indented JSON.
    ///
    /// Text is parsed as JSON first; text that does not parse is printed as
    /// it is.
    pub fn render_json<T>(&mut self, data: &T, title: &str, indent: usize) -> RenderStatus
    where
        T: Serialize + Debug + ?Sized,
    {
        let mut block = Block::default();
        self.banner(&mut block, self.config.data_banner, title);

        let mut status = RenderStatus::Complete;
        let value = match to_json(data) {
            Json::Value(Value::String(text)) => match serde_json::from_str::<Value>(&text) {
                Ok(parsed) => parsed,
                Err(_) => Value::String(text),
            },
            Json::Value(value) => value,
            Json::Debug(text, err) => {
                block.line(text);
                status.degrade(err);
                return self.emit("render_json", block, status);
            }
        };

        if is_blank(&value) {
            block.line(NO_DATA);
            return self.emit("render_json", block, status);
        }
        if let Value::String(text) = value {
            block.line(text);
            return self.emit("render_json", block, status);
        }

        match pretty(&value, indent) {
            Ok(text) => block.line(text),
            Err(source) => {
                let err = RenderError::Serialize {
                    message: "Could not format as JSON".to_string(),
                    source,
                };
                block.line(&err);
                block.line(format_args!("Raw data: {}", layout::compact(&value)));
                status.degrade(err);
            }
        }

        self.emit("render_json", block, status)
    }

    /// Render `data` with sorted keys, wrapped to `max_width` columns.
    pub fn render_mapping<T>(&mut self, data: &T, title: &str, max_width: usize) -> RenderStatus
    where
        T: Serialize + Debug + ?Sized,
    {
        let mut block = Block::default();
        self.banner(&mut block, self.config.data_banner, title);

        let status = self.layout_body(&mut block, data, max_width);

        self.emit("render_mapping", block, status)
    }

    /// [`render_json`](Self::render_json) with the configured indent.
    pub fn render_json_default<T>(&mut self, data: &T, title: &str) -> RenderStatus
    where
        T: Serialize + Debug + ?Sized,
    {
        self.render_json(data, title, self.config.json_indent)
    }

    /// [`render_mapping`](Self::render_mapping) at the configured width.
    pub fn render_mapping_default<T>(&mut self, data: &T, title: &str) -> RenderStatus
    where
        T: Serialize + Debug + ?Sized,
    {
        self.render_mapping(data, title, self.config.mapping_width)
    }

    fn layout_body<T>(&self, block: &mut Block, data: &T, width: usize) -> RenderStatus
    where
        T: Serialize + Debug + ?Sized,
    {
        match to_json(data) {
            Json::Value(value) if is_blank(&value) => {
                block.line(NO_DATA);
                RenderStatus::Complete
            }
            Json::Value(value) => {
                block.line(layout::wrap(&value, width));
                RenderStatus::Complete
            }
            Json::Debug(text, err) => {
                block.line(text);
                RenderStatus::Degraded(err)
            }
        }
    }

    /// Render each item as `[index] item`, stopping after `max_items`.
    pub fn render_sequence<T: Display>(
        &mut self,
        data: &[T],
        title: &str,
        max_items: Option<usize>,
    ) -> RenderStatus {
        let mut block = Block::default();
        self.banner(&mut block, self.config.data_banner, title);

        if data.is_empty() {
            block.line("(no items)");
        }

        let shown = max_items.map_or(data.len(), |max| max.min(data.len()));
        for (i, item) in data[..shown].iter().enumerate() {
            block.line(format_args!("[{i}] {item}"));
        }
        if shown < data.len() {
            block.line(format_args!("... and {} more items", data.len() - shown));
        }

        self.emit("render_sequence", block, RenderStatus::Complete)
    }

    pub fn debug_print<T>(&mut self, data: &T, title: &str) -> RenderStatus
    where
        T: Serialize + Debug + ?Sized,
    {
        let mut block = Block::default();
        block.blank();
        block.line(format_args!("🔍 {title}"));
        block.line("-".repeat(title.width() + 4));

        let status = self.layout_body(&mut block, data, self.config.debug_width);

        self.emit("debug_print", block, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RenderConfig;
    use serde_json::json;
    use std::collections::HashMap;

    fn body(printer: Printer<Vec<u8>>) -> String {
        let text = String::from_utf8(printer.into_inner()).unwrap();
        let rule = "=".repeat(40);
        let header = format!("\n{rule}\n");
        // drop the banner: blank line, rule, title, rule
        text.splitn(2, &header)
            .nth(1)
            .and_then(|rest| rest.split_once(&format!("{rule}\n")))
            .map(|(_, body)| body.to_string())
            .unwrap()
    }

    #[test]
    fn json_keeps_insertion_order_and_unicode() {
        let mut printer = Printer::new(Vec::new());
        let status = printer.render_json(&json!({ "zeta": "ünïcode", "alpha": 1 }), "JSON", 2);

        assert!(status.is_complete());
        assert_eq!(body(printer), "{\n  \"zeta\": \"ünïcode\",\n  \"alpha\": 1\n}\n");
    }

    #[test]
    fn json_text_is_parsed_first() {
        let mut printer = Printer::new(Vec::new());
        printer.render_json(r#"{"temperature":"10"}"#, "JSON", 4);
        assert_eq!(body(printer), "{\n    \"temperature\": \"10\"\n}\n");
    }

    #[test]
    fn non_json_text_is_printed_verbatim() {
        let mut printer = Printer::new(Vec::new());
        let status = printer.render_json("not json", "JSON", 2);
        assert!(status.is_complete());
        assert_eq!(body(printer), "not json\n");
    }

    #[test]
    fn unserializable_value_is_stringified() {
        let mut keys = HashMap::new();
        keys.insert((1, 2), "pair");

        let mut printer = Printer::new(Vec::new());
        let status = printer.render_json(&keys, "JSON", 2);

        assert!(matches!(
            status,
            RenderStatus::Degraded(RenderError::Serialize { .. })
        ));
        assert_eq!(body(printer), "{(1, 2): \"pair\"}\n");
    }

    #[test]
    fn mapping_sorts_keys_and_wraps() {
        let mut printer = Printer::new(Vec::new());
        printer.render_mapping(&json!({ "b": [1, 2], "a": "x" }), "Dictionary", 13);
        assert_eq!(body(printer), "{\"a\": \"x\",\n \"b\": [1, 2]}\n");
    }

    #[test]
    fn sequence_caps_items() {
        let models = ["gpt-4", "gpt-3.5-turbo", "claude-3-opus", "llama-2-70b", "mistral-7b"];
        let mut printer = Printer::new(Vec::new());
        printer.render_sequence(&models, "Models", Some(3));
        assert_eq!(
            body(printer),
            "[0] gpt-4\n[1] gpt-3.5-turbo\n[2] claude-3-opus\n... and 2 more items\n"
        );
    }

    #[test]
    fn sequence_cap_above_length_shows_everything() {
        let mut printer = Printer::new(Vec::new());
        printer.render_sequence(&[1, 2], "Numbers", Some(10));
        assert_eq!(body(printer), "[0] 1\n[1] 2\n");
    }

    #[test]
    fn empty_sequence_says_so() {
        let empty: [&str; 0] = [];
        let mut printer = Printer::new(Vec::new());
        printer.render_sequence(&empty, "Nothing", Some(3));
        assert_eq!(body(printer), "(no items)\n");
    }

    #[test]
    fn debug_print_underlines_title() {
        let mut printer = Printer::new(Vec::new());
        printer.debug_print(&json!({ "request_id": "req_1" }), "Debug");
        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(text, "\n🔍 Debug\n---------\n{\"request_id\": \"req_1\"}\n");
    }

    /// Serializes to an error, but its debug text is valid JSON.
    struct Opaque;

    impl Debug for Opaque {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("[1, 2]")
        }
    }

    impl Serialize for Opaque {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("opaque handle"))
        }
    }

    #[test]
    fn debug_fallback_is_not_parsed_as_json() {
        let mut printer = Printer::new(Vec::new());
        let status = printer.render_json(&Opaque, "JSON", 2);

        assert!(matches!(
            status,
            RenderStatus::Degraded(RenderError::Serialize { .. })
        ));
        assert_eq!(body(printer), "[1, 2]\n");
    }

    #[test]
    fn blank_json_input_prints_placeholder() {
        for data in [json!(null), json!([]), json!({}), json!("")] {
            let mut printer = Printer::new(Vec::new());
            let status = printer.render_json(&data, "JSON", 2);
            assert!(status.is_complete());
            assert_eq!(body(printer), "(no data)\n");
        }
    }

    #[test]
    fn blank_mapping_prints_placeholder() {
        let mut printer = Printer::new(Vec::new());
        printer.render_mapping(&json!({}), "Dictionary", 80);
        assert_eq!(body(printer), "(no data)\n");
    }

    #[test]
    fn blank_debug_dump_prints_placeholder() {
        let mut printer = Printer::new(Vec::new());
        printer.debug_print(&None::<Value>, "Debug");
        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(text, "\n🔍 Debug\n---------\n(no data)\n");
    }

    #[test]
    fn defaults_come_from_config() {
        let config = RenderConfig::default()
            .with_json_indent(4)
            .with_mapping_width(13);
        let data = json!({ "b": [1, 2], "a": "x" });

        let mut printer = Printer::with_config(Vec::new(), config.clone());
        printer.render_json_default(&json!({ "a": 1 }), "JSON");
        assert_eq!(body(printer), "{\n    \"a\": 1\n}\n");

        let mut printer = Printer::with_config(Vec::new(), config);
        printer.render_mapping_default(&data, "Dictionary");
        assert_eq!(body(printer), "{\"a\": \"x\",\n \"b\": [1, 2]}\n");
    }
}
