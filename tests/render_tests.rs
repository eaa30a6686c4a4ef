use llm_pretty::{
    ChatRole, Choice, Message, Printer, RenderConfig, RenderError, RenderStatus, Response,
    ToolCall, Usage,
};
use serde_json::json;

fn capture<F>(render: F) -> (String, RenderStatus)
where
    F: FnOnce(&mut Printer<Vec<u8>>) -> RenderStatus,
{
    let mut printer = Printer::new(Vec::new());
    let status = render(&mut printer);
    let text = String::from_utf8(printer.into_inner()).expect("utf-8 output");
    (text, status)
}

fn assistant_choice(index: u32, content: &str) -> Choice {
    Choice {
        index: Some(index),
        finish_reason: Some("stop".to_string()),
        message: Some(Message::assistant(content)),
    }
}

#[test]
fn response_emits_one_block_per_choice_in_order() {
    let response = Response {
        choices: (0..4)
            .map(|i| assistant_choice(i, &format!("answer {i}")))
            .collect(),
        ..Response::default()
    };

    let (text, status) = capture(|p| p.render_response(&response, "LLM Response"));
    assert!(status.is_complete());

    let headers: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("Choice "))
        .collect();
    assert_eq!(
        headers,
        vec!["Choice 0:", "Choice 1:", "Choice 2:", "Choice 3:"]
    );
}

#[test]
fn json_rendering_is_repeatable() {
    let data = json!({
        "model": "gpt-4",
        "response": { "content": "Hello, world!", "role": "assistant" },
        "usage": { "prompt_tokens": 50, "completion_tokens": 25, "total_tokens": 75 }
    });

    let (first, _) = capture(|p| p.render_json(&data, "Sample", 2));
    let (second, _) = capture(|p| p.render_json(&data, "Sample", 2));
    assert_eq!(first, second);
}

#[test]
fn json_accepts_plain_text() {
    let (text, status) = capture(|p| p.render_json("not json", "Text", 2));
    assert!(status.is_complete());
    assert!(text.ends_with("\nnot json\n"));
}

#[test]
fn sequence_reports_hidden_items() {
    let items = ["a", "b", "c", "d", "e"];
    let (text, _) = capture(|p| p.render_sequence(&items, "List", Some(3)));

    let indexed = text.lines().filter(|line| line.starts_with('[')).count();
    assert_eq!(indexed, 3);
    assert!(text.ends_with("... and 2 more items\n"));
}

#[test]
fn usage_counters_are_title_cased() {
    let usage = json!({ "prompt_tokens": 50, "completion_tokens": 25 });
    let (text, status) = capture(|p| p.render_usage(&usage, "Token Usage"));

    assert!(status.is_complete());
    assert!(text.ends_with("Token Usage\n==============================\nPrompt Tokens: 50\nCompletion Tokens: 25\n"));
}

#[test]
fn tool_message_echoes_tool_and_response() {
    let messages = vec![Message::tool(
        "get_current_weather",
        "call_1",
        r#"{"temperature":"10"}"#,
    )];

    let (text, _) = capture(|p| p.render_messages(&messages, "Messages"));

    assert!(text.contains("--- Message 1 (TOOL) ---\n"));
    assert!(text.contains("\nTool: get_current_weather\n"));
    assert!(text.contains("\nResponse: {\"temperature\":\"10\"}\n"));
}

#[test]
fn empty_inputs_render_banner_and_placeholder() {
    let no_messages: Vec<Message> = Vec::new();
    let no_items: Vec<String> = Vec::new();

    let cases = [
        (capture(|p| p.render_response(&Response::default(), "T")), "(no choices)"),
        (capture(|p| p.render_messages(&no_messages, "T")), "(no messages)"),
        (capture(|p| p.render_sequence(&no_items, "T", None)), "(no items)"),
        (capture(|p| p.render_usage(&None::<Usage>, "T")), "(no usage reported)"),
        (capture(|p| p.render_json(&None::<Usage>, "T", 2)), "(no data)"),
        (capture(|p| p.render_json(&json!([]), "T", 2)), "(no data)"),
        (capture(|p| p.render_mapping(&json!({}), "T", 80)), "(no data)"),
    ];

    for ((text, status), placeholder) in cases {
        assert!(status.is_complete(), "degraded: {text}");
        let body: Vec<&str> = text.lines().skip(4).collect();
        assert_eq!(body, vec![placeholder], "unexpected body: {text}");
    }

    let (text, status) = capture(|p| p.debug_print(&None::<Usage>, "T"));
    assert!(status.is_complete());
    assert_eq!(text, "\n🔍 T\n-----\n(no data)\n");
}

#[test]
fn full_conversation_with_tool_round_trip() {
    let messages = vec![
        Message::system("You are a helpful AI assistant."),
        Message::user("What's the weather like in Tokyo?"),
        Message {
            content: None,
            ..Message::assistant("")
        }
        .with_tool_calls(vec![ToolCall::function(
            "call_1",
            "get_current_weather",
            r#"{"location": "Tokyo"}"#,
        )]),
        Message::tool("get_current_weather", "call_1", r#"{"temperature": "10"}"#),
        Message::assistant("It is 10°C in Tokyo."),
    ];

    let (text, status) = capture(|p| p.render_messages(&messages, "AI Conversation"));
    assert!(status.is_complete());

    let roles: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("--- Message "))
        .collect();
    assert_eq!(
        roles,
        vec![
            "1 (SYSTEM) ---",
            "2 (USER) ---",
            "3 (ASSISTANT) ---",
            "4 (TOOL) ---",
            "5 (ASSISTANT) ---",
        ]
    );
    assert!(text.contains("Tool Calls (1):\n  1. get_current_weather\n     Args: {\"location\": \"Tokyo\"}\n"));
    assert!(text.contains("It is 10°C in Tokyo."));
}

#[test]
fn custom_config_changes_banners() {
    let config = RenderConfig::default()
        .with_banner_char('-')
        .with_banner_width(8);
    let mut printer = Printer::with_config(Vec::new(), config);

    printer.render_usage(&Usage::new(1, 2), "Usage");

    let text = String::from_utf8(printer.into_inner()).unwrap();
    assert!(text.starts_with("\n--------\nUsage\n--------\n"));
}

#[test]
fn degraded_status_carries_the_cause() {
    let response: Response = serde_json::from_value(json!({
        "choices": [{ "finish_reason": "length" }]
    }))
    .unwrap();

    let (_, status) = capture(|p| p.render_response(&response, "Broken"));

    let err = status.error().expect("degraded");
    assert!(matches!(err, RenderError::MissingField { .. }));
    assert_eq!(err.to_string(), "missing field `message` in choice 0");
}

#[test]
fn role_display_matches_wire_names() {
    assert_eq!(ChatRole::Assistant.to_string(), "assistant");
    assert_eq!(ChatRole::Function.to_string(), "function");
    assert_eq!(ChatRole::default(), ChatRole::Unknown);
}
