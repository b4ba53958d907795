//! Error types for the comms2docx library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`ComposeError`] — **Fatal**: generation cannot proceed at all
//!   (no template, no links, AI enabled without a key, output unwritable).
//!   Returned as `Err(ComposeError)` from the top-level `compose*` functions
//!   with no partial output.
//!
//! * [`ServiceError`] — **Non-fatal**: the AI customisation call failed
//!   (network error, non-2xx status, unparseable body). Generation continues
//!   on the original, unmodified template; the error is carried on
//!   [`crate::output::ComposeOutput::ai_warning`] so callers can surface it
//!   as a warning rather than an abort.
//!
//! Skipping the intro splice (response missing its markers, template missing
//! its anchors) is *not* an error at all — see
//! [`crate::pipeline::splice::SpliceOutcome`].

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the comms2docx library.
///
/// AI-call failures use [`ServiceError`] and are stored in
/// [`crate::output::ComposeOutput`] rather than propagated here.
#[derive(Debug, Error)]
pub enum ComposeError {
    // ── Missing-input errors ──────────────────────────────────────────────
    /// No template text was provided.
    #[error("No template selected.\nPass a built-in template name or a template file.")]
    EmptyTemplate,

    /// The link table is empty.
    #[error("No links added.\nAdd at least one link (link text + URL) before generating.")]
    NoLinks,

    /// AI customisation is enabled but no API key was supplied.
    #[error("AI customisation is enabled but no API key was provided.\nSet OPENROUTER_API_KEY or disable AI with --no-ai.")]
    MissingApiKey,

    /// AI customisation is enabled but no campaign instructions were supplied.
    #[error("AI customisation is enabled but no campaign instructions were provided.\nPass instructions or disable AI with --no-ai.")]
    MissingInstructions,

    /// A link entry had an empty text or URL.
    #[error("Invalid link entry: {detail}")]
    InvalidLink { detail: String },

    // ── Lookup errors ─────────────────────────────────────────────────────
    /// The named built-in template does not exist.
    #[error("Unknown template '{name}'.\nAvailable: {available}")]
    UnknownTemplate { name: String, available: String },

    /// The model string matched neither a display name nor a wire id.
    #[error("Unknown model '{name}'.\nAvailable: {available}")]
    UnknownModel { name: String, available: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output .docx file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OOXML container could not be assembled.
    #[error("Failed to package .docx: {0}")]
    PackagingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal failure of the AI customisation call.
///
/// Stored on [`crate::output::ComposeOutput::ai_warning`]; the pipeline
/// falls back to the unmodified template and document generation continues.
/// There are no retries — one attempt per user action.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// The HTTP request could not be sent or the connection failed mid-flight.
    #[error("AI request failed: {reason}")]
    RequestFailed { reason: String },

    /// The request exceeded the configured timeout.
    #[error("AI request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The endpoint answered with a non-success status.
    #[error("AI endpoint returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body was not the expected chat-completions JSON.
    #[error("AI response body could not be parsed: {reason}")]
    MalformedResponse { reason: String },

    /// The response parsed but contained no choices.
    #[error("AI response contained no completion choices")]
    EmptyCompletion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_mentions_env_var() {
        let msg = ComposeError::MissingApiKey.to_string();
        assert!(msg.contains("OPENROUTER_API_KEY"), "got: {msg}");
    }

    #[test]
    fn unknown_template_lists_available() {
        let e = ComposeError::UnknownTemplate {
            name: "nope".into(),
            available: "A, B".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("'nope'"));
        assert!(msg.contains("A, B"));
    }

    #[test]
    fn http_status_display() {
        let e = ServiceError::HttpStatus {
            status: 429,
            body: "rate limited".into(),
        };
        assert!(e.to_string().contains("429"));
        assert!(e.to_string().contains("rate limited"));
    }

    #[test]
    fn timeout_display() {
        let e = ServiceError::Timeout { secs: 60 };
        assert!(e.to_string().contains("60s"));
    }
}
