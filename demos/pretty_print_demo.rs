/// Walks through every renderer with canned data.
///
/// Run with: cargo run --example pretty-print-demo
use llm_pretty::{Message, Printer, ToolCall, Usage, render};
use serde_json::json;

fn main() {
    let mut printer = Printer::stdout();

    println!("Pretty Printing Demonstration");
    println!("{}", "=".repeat(50));

    let sample = json!({
        "model": "gpt-4",
        "temperature": 0.7,
        "max_tokens": 1000,
        "response": {
            "content": "Hello, world!",
            "role": "assistant"
        },
        "usage": {
            "prompt_tokens": 50,
            "completion_tokens": 25,
            "total_tokens": 75
        }
    });
    printer.render_json_default(&sample, "Sample LLM Configuration");

    let config = json!({
        "api_endpoint": "https://api.openai.com/v1",
        "model_settings": {
            "temperature": 0.8,
            "top_p": 0.9,
            "frequency_penalty": 0.1
        },
        "features": ["chat", "completion", "embeddings"],
        "enabled": true
    });
    printer.render_mapping_default(&config, "Configuration Dictionary");

    let models = [
        "gpt-4",
        "gpt-3.5-turbo",
        "claude-3-opus",
        "llama-2-70b",
        "mistral-7b",
    ];
    printer.render_sequence(&models, "Available Models", Some(3));

    let conversation = vec![
        Message::system("You are a helpful AI assistant specialized in explaining complex topics."),
        Message::user("Can you explain how neural networks work?"),
        Message::assistant(
            "Neural networks are computational models inspired by biological neural networks...",
        )
        .with_tool_calls(vec![ToolCall::function(
            "call_kb",
            "search_knowledge_base",
            r#"{"query": "neural networks basics"}"#,
        )]),
        Message::tool(
            "search_knowledge_base",
            "call_kb",
            "Found 15 relevant articles about neural networks...",
        ),
    ];
    printer.render_messages(&conversation, "AI Conversation");

    printer.render_usage(&Usage::new(1_204, 48), render::USAGE_TITLE);

    let debug = json!({
        "request_id": "req_123456",
        "processing_time": 1.25,
        "tokens_processed": 150,
        "model_response": {
            "confidence": 0.95,
            "categories": ["technical", "educational"],
            "metadata": {
                "source": "knowledge_base",
                "last_updated": "2024-01-15"
            }
        }
    });
    printer.debug_print(&debug, "Debug Information");

    let status = printer.render_usage("not a usage object", "Malformed Usage");
    if let Some(err) = status.error() {
        println!("\n(render degraded: {err})");
    }
}
