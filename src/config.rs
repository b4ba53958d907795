//! Configuration types for template-to-docx generation.
//!
//! All generation behaviour is controlled through [`GenerationConfig`], built
//! via its [`GenerationConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to pass a whole run's settings around, log them, and diff two
//! runs to understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! The AI-related fields (key, model, instructions, toggle) only matter when
//! customisation is on; a positional constructor would force every caller to
//! spell out all of them. The builder lets callers set only what they care
//! about and rely on documented defaults for the rest.

use crate::error::ComposeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default chat-completions endpoint (OpenRouter).
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default per-request timeout for the AI call, in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

/// The fixed catalogue of models offered for intro/notes customisation.
///
/// Mirrors the tool's hosted model list on OpenRouter: each variant pairs a
/// human-readable display name with the wire identifier sent in the request
/// body. [`FromStr`] accepts either form, so `--model "Claude Opus 4"` and
/// `--model anthropic/claude-opus-4` both work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Model {
    /// Claude Sonnet 4.5 (default) — best quality/cost balance for copy rewriting.
    #[default]
    ClaudeSonnet45,
    /// Claude Sonnet 4.
    ClaudeSonnet4,
    /// Claude Opus 4 — highest quality, slowest.
    ClaudeOpus4,
    /// Gemini 2.0 Flash — free tier.
    Gemini20Flash,
}

impl Model {
    /// All models, in menu order.
    pub const ALL: [Model; 4] = [
        Model::ClaudeSonnet45,
        Model::ClaudeSonnet4,
        Model::ClaudeOpus4,
        Model::Gemini20Flash,
    ];

    /// Human-readable name shown in menus and logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Model::ClaudeSonnet45 => "Claude Sonnet 4.5",
            Model::ClaudeSonnet4 => "Claude Sonnet 4",
            Model::ClaudeOpus4 => "Claude Opus 4",
            Model::Gemini20Flash => "Gemini 2.0 Flash",
        }
    }

    /// Identifier sent to the chat-completions endpoint.
    pub fn wire_id(&self) -> &'static str {
        match self {
            Model::ClaudeSonnet45 => "anthropic/claude-sonnet-4.5",
            Model::ClaudeSonnet4 => "anthropic/claude-sonnet-4",
            Model::ClaudeOpus4 => "anthropic/claude-opus-4",
            Model::Gemini20Flash => "google/gemini-2.0-flash-exp:free",
        }
    }

    fn catalogue() -> String {
        Model::ALL
            .iter()
            .map(|m| format!("{} ({})", m.display_name(), m.wire_id()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Model {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        for m in Model::ALL {
            if wanted.eq_ignore_ascii_case(m.display_name()) || wanted == m.wire_id() {
                return Ok(m);
            }
        }
        Err(ComposeError::UnknownModel {
            name: wanted.to_string(),
            available: Model::catalogue(),
        })
    }
}

/// Configuration for one template-to-docx generation.
///
/// Built via [`GenerationConfig::builder()`] or using
/// [`GenerationConfig::default()`] (AI on, no key — validation of the
/// key/instructions pair happens in [`crate::compose::compose`], not here,
/// because `use_ai = false` makes both legitimately absent).
///
/// # Example
/// ```rust
/// use comms2docx::{GenerationConfig, Model};
///
/// let config = GenerationConfig::builder()
///     .model(Model::ClaudeOpus4)
///     .api_key("sk-or-…")
///     .instructions("Gluten-free pasta range; stress allergen checks.")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Model used for intro/notes customisation. Default: Claude Sonnet 4.5.
    pub model: Model,

    /// Bearer token for the chat-completions endpoint. Required when
    /// `use_ai` is true; ignored otherwise.
    pub api_key: Option<String>,

    /// Chat-completions endpoint URL. Default: [`DEFAULT_ENDPOINT`].
    ///
    /// Overridable so tests and self-hosted OpenAI-compatible gateways can
    /// be targeted without touching the rest of the config.
    pub endpoint: String,

    /// Whether to run the AI customisation step at all. Default: true.
    ///
    /// When false the template goes straight to the document builder and
    /// `api_key`/`instructions` are not required.
    pub use_ai: bool,

    /// Free-text campaign instructions embedded in the prompt. Required
    /// when `use_ai` is true.
    pub instructions: Option<String>,

    /// Per-request timeout for the AI call in seconds. Default: 60.
    ///
    /// One bound, one attempt: a call that exceeds this is treated as
    /// failed and the pipeline continues on the unmodified template.
    pub api_timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            use_ai: true,
            instructions: None,
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl GenerationConfig {
    /// Create a new builder for `GenerationConfig`.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`GenerationConfig`].
#[derive(Debug)]
pub struct GenerationConfigBuilder {
    config: GenerationConfig,
}

impl GenerationConfigBuilder {
    pub fn model(mut self, model: Model) -> Self {
        self.config.model = model;
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    pub fn use_ai(mut self, v: bool) -> Self {
        self.config.use_ai = v;
        self
    }

    pub fn instructions(mut self, text: impl Into<String>) -> Self {
        self.config.instructions = Some(text.into());
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs.max(1);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<GenerationConfig, ComposeError> {
        let c = &self.config;
        if !c.endpoint.starts_with("http://") && !c.endpoint.starts_with("https://") {
            return Err(ComposeError::InvalidConfig(format!(
                "Endpoint must be an http(s) URL, got '{}'",
                c.endpoint
            )));
        }
        if let Some(ref key) = c.api_key {
            if key.trim().is_empty() {
                return Err(ComposeError::InvalidConfig(
                    "API key must not be blank".into(),
                ));
            }
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_from_display_name_case_insensitive() {
        assert_eq!(
            "claude opus 4".parse::<Model>().unwrap(),
            Model::ClaudeOpus4
        );
    }

    #[test]
    fn model_from_wire_id() {
        assert_eq!(
            "google/gemini-2.0-flash-exp:free".parse::<Model>().unwrap(),
            Model::Gemini20Flash
        );
    }

    #[test]
    fn model_unknown_lists_catalogue() {
        let err = "gpt-5".parse::<Model>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("anthropic/claude-sonnet-4.5"), "got: {msg}");
    }

    #[test]
    fn builder_defaults() {
        let c = GenerationConfig::builder().build().unwrap();
        assert_eq!(c.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(c.api_timeout_secs, 60);
        assert!(c.use_ai);
        assert_eq!(c.model, Model::ClaudeSonnet45);
    }

    #[test]
    fn builder_rejects_bad_endpoint() {
        let err = GenerationConfig::builder()
            .endpoint("ftp://nope")
            .build()
            .unwrap_err();
        assert!(matches!(err, ComposeError::InvalidConfig(_)));
    }

    #[test]
    fn builder_rejects_blank_key() {
        let err = GenerationConfig::builder()
            .api_key("   ")
            .build()
            .unwrap_err();
        assert!(matches!(err, ComposeError::InvalidConfig(_)));
    }

    #[test]
    fn timeout_clamped_to_at_least_one_second() {
        let c = GenerationConfig::builder()
            .api_timeout_secs(0)
            .build()
            .unwrap();
        assert_eq!(c.api_timeout_secs, 1);
    }
}
