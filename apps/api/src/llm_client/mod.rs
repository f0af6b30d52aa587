/// LLM Client — the single point of entry for completion-endpoint calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion endpoint
/// directly. All LLM interactions MUST go through this module.
///
/// The endpoint speaks the OpenAI chat-completions protocol, so any
/// compatible provider (OpenAI, Groq, Together, Ollama, ...) works — the
/// base URL and model come from `Config`.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const MAX_TOKENS: u32 = 4096;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    /// Structured-output hint. Providers that don't support JSON mode still
    /// receive the JSON-only system instruction.
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The completion seam carried in `AppState` as `Arc<dyn Completer>`.
/// Handlers and agents depend on this trait, never on `LlmClient` itself,
/// so tests can swap in a stub without a live endpoint.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Invokes the completion endpoint with `prompt` and coerces the reply
    /// into a JSON mapping. Failure is data: any transport, API, or parse
    /// error is logged and collapses to `None`. Never panics, never retries.
    async fn complete_json(&self, prompt: &str) -> Option<Value>;
}

/// The live completion client used by all agents.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
            model,
        }
    }

    /// Makes one raw chat-completion call and returns the completion text.
    /// The system message pins the model to JSON-only output; `temperature`
    /// and `max_tokens` are fixed for all tasks.
    async fn call(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompts::JSON_ONLY_SYSTEM,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the provider's error message when the body carries one
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyContent)
    }
}

#[async_trait]
impl Completer for LlmClient {
    async fn complete_json(&self, prompt: &str) -> Option<Value> {
        let text = match self.call(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Completion call failed: {e}");
                return None;
            }
        };

        let cleaned = strip_json_fences(&text);

        match serde_json::from_str(cleaned) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Completion was not valid JSON: {e}");
                debug!("Raw completion text: {text}");
                None
            }
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output and
/// trims surrounding whitespace. Idempotent: a second pass finds no fence.
/// The result is a best-effort JSON string, not guaranteed to parse.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
