//! The AI content requester: one chat-completions call, one attempt.
//!
//! ## Why no retries?
//!
//! Customisation is best-effort by contract: a failed call degrades to the
//! unmodified template rather than blocking document generation, so retrying
//! would only delay the fallback the user is going to get anyway. One POST,
//! one fixed timeout, and every failure mode collapses into a
//! [`ServiceError`] for the caller to surface as a warning.
//!
//! The wire shape is the OpenAI-compatible chat-completions contract as
//! served by OpenRouter: bearer auth, a `messages` array with a single user
//! turn, and a `choices` array of which only the first is used.

use crate::config::GenerationConfig;
use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ── Wire types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

// ── Request ──────────────────────────────────────────────────────────────

/// Send `prompt` to the configured chat-completions endpoint and return the
/// first completion's text.
///
/// The caller must have checked that `config.api_key` is present; a missing
/// key at this level is reported as a request failure rather than panicking.
pub async fn request_completion(
    config: &GenerationConfig,
    prompt: &str,
) -> Result<String, ServiceError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or_else(|| ServiceError::RequestFailed {
            reason: "no API key configured".into(),
        })?;

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.api_timeout_secs))
        .build()
        .map_err(|e| ServiceError::RequestFailed {
            reason: e.to_string(),
        })?;

    let body = ChatRequest {
        model: config.model.wire_id(),
        messages: vec![ChatMessage {
            role: "user",
            content: prompt,
        }],
    };

    debug!(
        "AI request: model={} endpoint={} prompt_len={}",
        config.model.wire_id(),
        config.endpoint,
        prompt.len()
    );

    let response = client
        .post(&config.endpoint)
        .header("Authorization", format!("Bearer {api_key}"))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ServiceError::Timeout {
                    secs: config.api_timeout_secs,
                }
            } else {
                ServiceError::RequestFailed {
                    reason: e.to_string(),
                }
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("AI endpoint returned {}: {}", status, truncate(&body, 200));
        return Err(ServiceError::HttpStatus {
            status: status.as_u16(),
            body: truncate(&body, 200).to_string(),
        });
    }

    let text = response.text().await.map_err(|e| {
        if e.is_timeout() {
            ServiceError::Timeout {
                secs: config.api_timeout_secs,
            }
        } else {
            ServiceError::RequestFailed {
                reason: e.to_string(),
            }
        }
    })?;

    extract_content(&text)
}

/// Parse a chat-completions body and pull out the first choice's content.
fn extract_content(body: &str) -> Result<String, ServiceError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::MalformedResponse {
            reason: e.to_string(),
        })?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or(ServiceError::EmptyCompletion)
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
