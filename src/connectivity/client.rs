//! Chat-completion client.
//!
//! The verifier talks to the remote API through [`CompletionClient`], so
//! tests can count calls or fail on demand. [`OpenAiClient`] is the real
//! implementation.
//!
//! # Example
//!
//! ```no_run
//! use opro_preflight::connectivity::{ChatRequest, CompletionClient, OpenAiClient};
//!
//! let client = OpenAiClient::new("https://api.openai.com/v1").unwrap();
//! let request = ChatRequest::single_turn("gpt-3.5-turbo", "Say hi.", 10);
//! let text = client.complete("sk-...", &request).unwrap();
//! println!("{}", text);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a completion call failed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Speaker role ("user", "assistant", ...).
    pub role: String,
    /// Message text.
    pub content: String,
}

/// Body of a chat-completion request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation so far.
    pub messages: Vec<ChatMessage>,
    /// Output token cap.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl ChatRequest {
    /// A deterministic single-turn request.
    pub fn single_turn(model: &str, question: &str, max_tokens: u32) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: question.to_string(),
            }],
            max_tokens,
            temperature: 0.0,
        }
    }
}

/// Issues chat-completion requests.
pub trait CompletionClient {
    /// Send `request` and return the first choice's message content.
    fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String, ApiError>;
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Blocking client for OpenAI-compatible chat-completion endpoints.
pub struct OpenAiClient {
    /// Base URL, without trailing slash.
    api_base: String,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl OpenAiClient {
    /// Create a client for the given API base URL.
    ///
    /// The HTTP client keeps its default timeout.
    pub fn new(api_base: &str) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("opro-preflight/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Full URL of the chat-completion endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String, ApiError> {
        let url = self.endpoint();
        tracing::debug!("POST {} (model {})", url, request.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        tracing::debug!("Completion endpoint answered {}", status);

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        extract_first_choice(&body)
    }
}

/// Pull the first choice's message content out of a response body.
pub fn extract_first_choice(body: &str) -> Result<String, ApiError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::MalformedResponse("response contained no choices".to_string()))?;

    choice
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| {
            ApiError::MalformedResponse("first choice has no message content".to_string())
        })
}

/// Best-effort error text for a non-success response.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.chars().take(200).collect();
    }
    reason.unwrap_or("request failed").to_string()
}
