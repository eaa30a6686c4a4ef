/// Tool-calling round trip against any OpenAI-compatible endpoint, with every
/// step rendered to the terminal.
///
/// Environment (a `.env` file works too):
///  • `LLM_BASE_URL`  e.g. `http://localhost:4000/v1`
///  • `LLM_API_KEY`
///  • `LLM_MODEL`     defaults to `gpt-4o-mini`
///
/// Run with: RUST_LOG=llm_pretty=debug cargo run --example basic-completion
use std::env;

use dotenv::dotenv;
use llm_pretty::{Message, Printer, Response, ToolCall, render};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

/// Get the current weather in a given location
#[derive(Deserialize, JsonSchema)]
#[allow(dead_code)]
struct WeatherArgs {
    /// The city and state, e.g. San Francisco, CA
    location: String,
    /// Temperature unit, celsius or fahrenheit
    unit: Option<String>,
}

/// Think about something. Obtains no new information; the thought is only
/// appended to the log.
#[derive(Deserialize, JsonSchema)]
struct ThinkArgs {
    /// A thought to think about.
    thought: String,
}

fn get_current_weather(args: WeatherArgs) -> Value {
    let location = args.location.to_lowercase();
    if location.contains("tokyo") {
        json!({ "location": "Tokyo", "temperature": "10", "unit": "celsius" })
    } else if location.contains("san francisco") {
        json!({ "location": "San Francisco", "temperature": "72", "unit": "fahrenheit" })
    } else if location.contains("paris") {
        json!({ "location": "Paris", "temperature": "22", "unit": "celsius" })
    } else {
        json!({ "location": args.location, "temperature": "unknown" })
    }
}

fn think(args: ThinkArgs) -> Value {
    json!({ "thought": args.thought })
}

fn tool_definition(name: &str, description: &str, mut parameters: Value) -> Value {
    if let Some(schema) = parameters.as_object_mut() {
        schema.remove("$schema");
        schema.remove("title");
        schema.remove("description");
    }
    json!({
        "type": "function",
        "function": {
            "name": name,
            "description": description,
            "parameters": parameters
        }
    })
}

fn tools() -> Result<Vec<Value>, serde_json::Error> {
    Ok(vec![
        tool_definition(
            "get_current_weather",
            "Get the current weather in a given location",
            serde_json::to_value(schema_for!(WeatherArgs))?,
        ),
        tool_definition(
            "think",
            "Use the tool to think about something. It will not obtain new information, \
             but just append the thought to the log.",
            serde_json::to_value(schema_for!(ThinkArgs))?,
        ),
    ])
}

fn execute(call: &ToolCall) -> Result<Value, serde_json::Error> {
    let arguments = call.function.parsed_arguments()?;
    match call.function.name.as_deref() {
        Some("get_current_weather") => Ok(get_current_weather(serde_json::from_value(arguments)?)),
        Some("think") => Ok(think(serde_json::from_value(arguments)?)),
        other => Ok(json!({ "error": format!("unknown tool {}", other.unwrap_or("(none)")) })),
    }
}

async fn complete(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    body: &Value,
) -> Result<Response, Box<dyn std::error::Error>> {
    let response = client
        .post(format!("{base_url}/chat/completions"))
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await?
        .error_for_status()?
        .json::<Response>()
        .await?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url = env::var("LLM_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
    let api_key = env::var("LLM_API_KEY")?;
    let model = env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());

    let client = reqwest::Client::new();
    let mut printer = Printer::stdout();
    let tools = tools()?;

    let mut messages = vec![
        Message::system("You are a helpful assistant. Use the tools when they help."),
        Message::user("What's the weather like in San Francisco, Tokyo, and Paris?"),
    ];
    printer.render_messages(&messages, "Request Messages");

    let body = json!({ "model": model, "messages": messages, "tools": tools });
    printer.render_json_default(&tools, "Tool Definitions");
    let response = complete(&client, &base_url, &api_key, &body).await?;
    printer.render_response(&response, render::RESPONSE_TITLE);
    printer.render_usage(&response.usage, render::USAGE_TITLE);

    let Some(assistant) = response.first_message().cloned() else {
        println!("No message returned");
        return Ok(());
    };
    if assistant.tool_calls().is_empty() {
        return Ok(());
    }

    messages.push(assistant.clone());
    for call in assistant.tool_calls() {
        let result = execute(call)?;
        messages.push(Message::tool(
            call.function.name.clone().unwrap_or_default(),
            call.id.clone().unwrap_or_default(),
            result.to_string(),
        ));
    }
    printer.render_messages(&messages, "Messages With Tool Results");

    let body = json!({ "model": model, "messages": messages });
    let second = complete(&client, &base_url, &api_key, &body).await?;
    printer.render_response(&second, "Second Response");
    printer.render_usage(&second.usage, render::USAGE_TITLE);

    Ok(())
}
