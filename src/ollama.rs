//! Ollama chat client used to turn a prediction into an explanation.
//!
//! Sends the prediction as a single user message to `/api/chat` with
//! streaming disabled and returns the assistant reply verbatim.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while talking to Ollama.
#[derive(Debug, thiserror::Error)]
pub enum OllamaError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// Ollama answered with a non-success status.
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a chat reply.
    #[error("response parse failed: {0}")]
    Parse(String),
}

#[derive(Debug)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self, OllamaError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| OllamaError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the model about `prediction` and return its reply text.
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn explain(&self, prediction: &str) -> Result<String, OllamaError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage { role: "user", content: prediction }],
            stream: false,
        };

        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| OllamaError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| OllamaError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(OllamaError::Status { status: status.as_u16(), body: text });
        }

        let reply: ChatReply =
            serde_json::from_str(&text).map_err(|e| OllamaError::Parse(e.to_string()))?;
        debug!("Received {} characters of explanation", reply.message.content.len());
        Ok(reply.message.content)
    }
}
