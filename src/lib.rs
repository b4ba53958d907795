//! # comms2docx
//!
//! Turn mail-merge communication templates into hyperlink-annotated Word
//! documents, optionally letting an LLM rewrite the intro first.
//!
//! ## Why this crate?
//!
//! Research-ops teams send the same campaign email hundreds of times via
//! mail merge, with only the task-brief links and the intro changing per
//! campaign. Pasting URLs by hand into a word processor is slow and
//! error-prone. This crate takes a plain-text template plus an ordered
//! link-text→URL table and produces a `.docx` where every matching line
//! carries a clickable, styled hyperlink — and can ask a hosted model
//! (via OpenRouter) to rewrite the intro paragraph for the campaign at hand.
//!
//! ## Pipeline Overview
//!
//! ```text
//! template + link table
//!  │
//!  ├─ 1. AI       one chat-completions call (optional, best-effort)
//!  ├─ 2. Splice   swap the intro between the "Hi!" and "🍽️" anchors
//!  ├─ 3. Build    line-by-line first-match hyperlinking
//!  └─ 4. Package  WordprocessingML + relationships → .docx bytes
//! ```
//!
//! An AI failure never blocks the document: the run degrades to the
//! unmodified template and reports the failure as a warning.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use comms2docx::{compose, GenerationConfig, LinkTable};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut links = LinkTable::new();
//!     links.add("Instructions Brief", "https://example.org/brief")?;
//!
//!     let config = GenerationConfig::builder().use_ai(false).build()?;
//!     let template = comms2docx::templates::builtin("Generic In-Store Task").unwrap();
//!
//!     let output = compose(template, &links, &config).await?;
//!     std::fs::write("communication_template.docx", &output.docx)?;
//!     eprintln!("{} paragraphs, {} hyperlinks",
//!         output.stats.paragraph_count,
//!         output.stats.hyperlink_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `comms2docx` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! comms2docx = { version = "0.3", default-features = false }
//! ```
//!
//! ## Choosing a Model
//!
//! | Model | Wire id | Best for |
//! |-------|---------|----------|
//! | Claude Sonnet 4.5 (default) | `anthropic/claude-sonnet-4.5` | Quality/cost balance |
//! | Claude Sonnet 4 | `anthropic/claude-sonnet-4` | Previous-generation fallback |
//! | Claude Opus 4 | `anthropic/claude-opus-4` | Highest quality |
//! | Gemini 2.0 Flash | `google/gemini-2.0-flash-exp:free` | Free tier |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod compose;
pub mod config;
pub mod document;
pub mod error;
pub mod links;
pub mod output;
pub mod pipeline;
pub mod prompts;
pub mod templates;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use compose::{compose, compose_sync, compose_to_file};
pub use config::{GenerationConfig, GenerationConfigBuilder, Model, DEFAULT_ENDPOINT};
pub use document::{HyperlinkedDocument, Paragraph, Run};
pub use error::{ComposeError, ServiceError};
pub use links::{LinkEntry, LinkTable};
pub use output::{ComposeOutput, ComposeStats};
pub use pipeline::package::{DOCX_FILENAME, DOCX_MIME};
pub use pipeline::splice::SpliceOutcome;
