//! Top-level generation entry points.
//!
//! One call per user action: validate inputs, optionally ask the model to
//! rewrite the intro, splice, build the hyperlinked document, package it.
//! The AI step is the only fallible-but-tolerated stage — its failure is
//! recorded on the output and the run continues on the original template.

use crate::config::GenerationConfig;
use crate::error::ComposeError;
use crate::links::LinkTable;
use crate::output::{ComposeOutput, ComposeStats};
use crate::pipeline::splice::SpliceOutcome;
use crate::pipeline::{ai, build, package, splice};
use crate::prompts;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Generate a hyperlinked .docx from a template and a link table.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// Returns `Err(ComposeError)` only for fatal conditions: missing inputs
/// (per the validation rules below) or packaging failure. An AI-call failure
/// is *not* fatal — the run degrades to the unmodified template and the
/// failure is reported via [`ComposeOutput::ai_warning`].
///
/// # Validation
/// * template must be non-empty
/// * link table must have at least one entry
/// * with AI enabled: an API key and campaign instructions are required
pub async fn compose(
    template: &str,
    links: &LinkTable,
    config: &GenerationConfig,
) -> Result<ComposeOutput, ComposeError> {
    let total_start = Instant::now();

    // ── Step 1: Validate inputs ──────────────────────────────────────────
    if template.is_empty() {
        return Err(ComposeError::EmptyTemplate);
    }
    if links.is_empty() {
        return Err(ComposeError::NoLinks);
    }
    if config.use_ai {
        if config.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(ComposeError::MissingApiKey);
        }
        if config
            .instructions
            .as_deref()
            .map_or(true, |i| i.trim().is_empty())
        {
            return Err(ComposeError::MissingInstructions);
        }
    }

    info!(
        "Starting generation: {} template bytes, {} links, ai={}",
        template.len(),
        links.len(),
        config.use_ai
    );

    // ── Step 2: AI customisation (best-effort) ───────────────────────────
    let mut final_template = template.to_string();
    let mut splice_outcome = SpliceOutcome::NotAttempted;
    let mut ai_notes = None;
    let mut ai_raw = None;
    let mut ai_warning = None;
    let mut ai_duration_ms = 0;

    if config.use_ai {
        let instructions = config.instructions.as_deref().unwrap_or_default();
        let prompt = prompts::customization_prompt(template, instructions);

        let ai_start = Instant::now();
        match ai::request_completion(config, &prompt).await {
            Ok(response) => {
                let (spliced, outcome, sections) = splice::apply(template, &response);
                info!("AI customisation: {}", outcome);
                final_template = spliced;
                splice_outcome = outcome;
                ai_notes = sections.map(|s| s.notes);
                ai_raw = Some(response);
            }
            Err(e) => {
                warn!("AI customisation failed, using original template: {e}");
                ai_warning = Some(e.to_string());
            }
        }
        ai_duration_ms = ai_start.elapsed().as_millis() as u64;
    }

    // ── Step 3: Build the hyperlinked document ───────────────────────────
    let document = build::build_document(&final_template, links);

    // ── Step 4: Package ──────────────────────────────────────────────────
    let docx = package::package_docx(&document)?;

    let stats = ComposeStats {
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        ai_duration_ms,
        paragraph_count: document.paragraph_count(),
        hyperlink_count: document.hyperlink_count(),
        ai_used: splice_outcome == SpliceOutcome::Applied,
    };

    info!(
        "Generation complete: {} paragraphs, {} hyperlinks, {} bytes, {}ms",
        stats.paragraph_count,
        stats.hyperlink_count,
        docx.len(),
        stats.total_duration_ms
    );

    Ok(ComposeOutput {
        docx,
        document,
        final_template,
        ai_notes,
        ai_raw,
        ai_warning,
        splice: splice_outcome,
        stats,
    })
}

/// Generate and write the .docx directly to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub async fn compose_to_file(
    template: &str,
    links: &LinkTable,
    config: &GenerationConfig,
    output_path: impl AsRef<Path>,
) -> Result<ComposeOutput, ComposeError> {
    let output = compose(template, links, config).await?;
    let path = output_path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ComposeError::OutputWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    let tmp_path = path.with_extension("docx.tmp");
    tokio::fs::write(&tmp_path, &output.docx)
        .await
        .map_err(|e| ComposeError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| ComposeError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(output)
}

/// Synchronous wrapper around [`compose`].
///
/// Creates a temporary tokio runtime internally.
pub fn compose_sync(
    template: &str,
    links: &LinkTable,
    config: &GenerationConfig,
) -> Result<ComposeOutput, ComposeError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| ComposeError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(compose(template, links, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links_one() -> LinkTable {
        let mut t = LinkTable::new();
        t.add("Instructions Brief", "http://x").unwrap();
        t
    }

    fn no_ai() -> GenerationConfig {
        GenerationConfig::builder().use_ai(false).build().unwrap()
    }

    #[tokio::test]
    async fn empty_template_is_fatal() {
        let err = compose("", &links_one(), &no_ai()).await.unwrap_err();
        assert!(matches!(err, ComposeError::EmptyTemplate));
    }

    #[tokio::test]
    async fn empty_link_table_is_fatal() {
        let err = compose("Hi!", &LinkTable::new(), &no_ai()).await.unwrap_err();
        assert!(matches!(err, ComposeError::NoLinks));
    }

    #[tokio::test]
    async fn ai_enabled_without_key_is_fatal() {
        let config = GenerationConfig::builder()
            .instructions("do things")
            .build()
            .unwrap();
        let err = compose("Hi!", &links_one(), &config).await.unwrap_err();
        assert!(matches!(err, ComposeError::MissingApiKey));
    }

    #[tokio::test]
    async fn ai_enabled_without_instructions_is_fatal() {
        let config = GenerationConfig::builder()
            .api_key("sk-or-test")
            .build()
            .unwrap();
        let err = compose("Hi!", &links_one(), &config).await.unwrap_err();
        assert!(matches!(err, ComposeError::MissingInstructions));

        // Whitespace-only instructions count as missing too.
        let config = GenerationConfig::builder()
            .api_key("sk-or-test")
            .instructions("   ")
            .build()
            .unwrap();
        let err = compose("Hi!", &links_one(), &config).await.unwrap_err();
        assert!(matches!(err, ComposeError::MissingInstructions));
    }

    #[tokio::test]
    async fn ai_disabled_skips_validation_of_key_and_instructions() {
        let out = compose("Visit: Instructions Brief", &links_one(), &no_ai())
            .await
            .unwrap();
        assert_eq!(out.splice, SpliceOutcome::NotAttempted);
        assert!(out.ai_warning.is_none());
        assert!(!out.stats.ai_used);
        assert_eq!(out.stats.hyperlink_count, 1);
    }

    #[tokio::test]
    async fn ai_failure_degrades_to_original_template() {
        // Point at a closed port: the call fails fast, generation continues.
        let config = GenerationConfig::builder()
            .api_key("sk-or-test")
            .instructions("emphasise the deadline")
            .endpoint("http://127.0.0.1:1/v1/chat/completions")
            .api_timeout_secs(2)
            .build()
            .unwrap();

        let template = "Hi!\n🍽️ Important: rules\nVisit: Instructions Brief";
        let out = compose(template, &links_one(), &config).await.unwrap();

        assert_eq!(out.final_template, template);
        assert!(out.ai_warning.is_some(), "warning should be recorded");
        assert_eq!(out.splice, SpliceOutcome::NotAttempted);
        assert!(!out.stats.ai_used);
        assert_eq!(out.stats.paragraph_count, 3);
        assert!(!out.docx.is_empty());
    }
}
