//! CLI binary for comms2docx.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `GenerationConfig` + `LinkTable` and writes the produced .docx.

use anyhow::{bail, Context, Result};
use clap::Parser;
use comms2docx::{
    compose_to_file, templates, GenerationConfig, LinkTable, Model, SpliceOutcome,
    DEFAULT_ENDPOINT, DOCX_FILENAME,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # List the built-in templates
  comms2docx --list-templates

  # Generate from a built-in template, AI off
  comms2docx --template "Generic In-Store Task" \
      --link "Instructions Brief=https://forms.example.org/brief" \
      --link "In Store Task=https://forms.example.org/task" \
      --no-ai -o campaign.docx

  # Generate with AI-customised intro
  export OPENROUTER_API_KEY=sk-or-...
  comms2docx --template "In-Store Pasta Taste Test" \
      --link "Instructions Brief=https://forms.example.org/brief" \
      --instructions "Gluten-free range launch; stress allergen checks." \
      --model "Claude Opus 4" --show-ai

  # Use your own template file
  comms2docx --template-file campaign.txt \
      --link "Survey=https://forms.example.org/s1" --no-ai

SUPPORTED MODELS (via OpenRouter):
  Display name        Wire id
  ─────────────────   ──────────────────────────────────
  Claude Sonnet 4.5   anthropic/claude-sonnet-4.5   (default)
  Claude Sonnet 4     anthropic/claude-sonnet-4
  Claude Opus 4       anthropic/claude-opus-4
  Gemini 2.0 Flash    google/gemini-2.0-flash-exp:free

ENVIRONMENT VARIABLES:
  OPENROUTER_API_KEY   API key for the AI customisation call
  COMMS2DOCX_MODEL     Override the model (display name or wire id)
  COMMS2DOCX_ENDPOINT  Override the chat-completions endpoint URL

NOTES:
  Link matching is exact, case-sensitive substring containment against each
  template line; the first link added wins when several match. Templates use
  a literal X wherever a mail-merge field goes — the AI call is instructed
  to keep them intact, and the builder never touches them.
"#;

/// Generate hyperlinked mail-merge .docx documents from comms templates.
#[derive(Parser, Debug)]
#[command(
    name = "comms2docx",
    version,
    about = "Generate hyperlinked mail-merge .docx documents from comms templates",
    long_about = "Turn a plain-text communication template plus an ordered list of link-text→URL \
mappings into a Word document with clickable, styled hyperlinks. Optionally asks a hosted \
LLM (via OpenRouter) to rewrite the intro paragraph for the campaign; an AI failure never \
blocks generation — the original template is used instead.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Built-in template name (see --list-templates).
    #[arg(long, conflicts_with = "template_file")]
    template: Option<String>,

    /// Path to a custom template text file.
    #[arg(long)]
    template_file: Option<PathBuf>,

    /// Link mapping as TEXT=URL. Repeatable; order is match priority.
    #[arg(long = "link", value_name = "TEXT=URL")]
    links: Vec<String>,

    /// Campaign instructions for the AI customisation step.
    #[arg(long, conflicts_with = "instructions_file")]
    instructions: Option<String>,

    /// Path to a text file with campaign instructions.
    #[arg(long)]
    instructions_file: Option<PathBuf>,

    /// Model for AI customisation (display name or wire id).
    #[arg(long, env = "COMMS2DOCX_MODEL")]
    model: Option<String>,

    /// OpenRouter API key.
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Chat-completions endpoint URL.
    #[arg(long, env = "COMMS2DOCX_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Disable AI customisation: use the template exactly as written.
    #[arg(long)]
    no_ai: bool,

    /// AI call timeout in seconds.
    #[arg(long, default_value_t = 60)]
    api_timeout: u64,

    /// Output .docx path.
    #[arg(short, long, default_value = DOCX_FILENAME)]
    output: PathBuf,

    /// Print the raw AI response and extracted notes after generation.
    #[arg(long)]
    show_ai: bool,

    /// List the built-in templates and exit.
    #[arg(long)]
    list_templates: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── List-templates mode ──────────────────────────────────────────────
    if cli.list_templates {
        for name in templates::builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    // ── Resolve template text ────────────────────────────────────────────
    let template = resolve_template(&cli).await?;

    // ── Build link table ─────────────────────────────────────────────────
    let mut links = LinkTable::new();
    for raw in &cli.links {
        let (text, url) = parse_link(raw)?;
        links
            .add(text, url)
            .with_context(|| format!("Invalid --link '{raw}'"))?;
    }

    // ── Build config ─────────────────────────────────────────────────────
    let config = build_config(&cli).await?;

    // ── Generate ─────────────────────────────────────────────────────────
    let spinner = if !cli.quiet {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(if config.use_ai {
            "Customising content with AI…"
        } else {
            "Generating document…"
        });
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    } else {
        None
    };

    let result = compose_to_file(&template, &links, &config, &cli.output).await;

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let output = result.context("Generation failed")?;

    // ── Summary ──────────────────────────────────────────────────────────
    if !cli.quiet {
        if let Some(ref warning) = output.ai_warning {
            eprintln!(
                "{} AI customisation failed, used the original template\n   {}",
                yellow("⚠"),
                dim(warning)
            );
        } else if config.use_ai && output.splice != SpliceOutcome::Applied {
            eprintln!("{} {}", yellow("⚠"), output.splice);
        }

        eprintln!(
            "{}  {} paragraphs, {} hyperlinks  {}ms  →  {}",
            green("✔"),
            output.stats.paragraph_count,
            output.stats.hyperlink_count,
            output.stats.total_duration_ms,
            bold(&cli.output.display().to_string()),
        );
    }

    if cli.show_ai {
        if let Some(ref raw) = output.ai_raw {
            println!("{}", bold("── AI response ──"));
            println!("{raw}");
        }
        if let Some(ref notes) = output.ai_notes {
            println!("{}", bold("── Important notes (display-only) ──"));
            println!("{notes}");
        }
    }

    Ok(())
}

/// Resolve the template from `--template` or `--template-file`.
async fn resolve_template(cli: &Cli) -> Result<String> {
    if let Some(ref name) = cli.template {
        return templates::builtin(name).map(str::to_string).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown template '{}'. Available: {}",
                name,
                templates::builtin_names().join(", ")
            )
        });
    }
    if let Some(ref path) = cli.template_file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read template from {}", path.display()));
    }
    bail!("No template selected. Pass --template <NAME> or --template-file <PATH>.");
}

/// Map CLI args to `GenerationConfig`.
async fn build_config(cli: &Cli) -> Result<GenerationConfig> {
    let instructions = if let Some(ref path) = cli.instructions_file {
        Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read instructions from {}", path.display()))?,
        )
    } else {
        cli.instructions.clone()
    };

    let model: Model = match cli.model {
        Some(ref m) => m.parse()?,
        None => Model::default(),
    };

    let mut builder = GenerationConfig::builder()
        .model(model)
        .endpoint(cli.endpoint.clone())
        .use_ai(!cli.no_ai)
        .api_timeout_secs(cli.api_timeout);

    if let Some(ref key) = cli.api_key {
        builder = builder.api_key(key.clone());
    }
    if let Some(text) = instructions {
        builder = builder.instructions(text);
    }

    builder.build().context("Invalid configuration")
}

/// Parse a `--link TEXT=URL` argument at the first `=`.
fn parse_link(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((text, url)) if !text.is_empty() && !url.is_empty() => Ok((text, url)),
        _ => bail!("Invalid --link '{raw}': expected TEXT=URL"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_link_splits_on_first_equals() {
        let (text, url) = parse_link("Brief=https://x.example/?a=1").unwrap();
        assert_eq!(text, "Brief");
        assert_eq!(url, "https://x.example/?a=1");
    }

    #[test]
    fn parse_link_rejects_missing_parts() {
        assert!(parse_link("no-separator").is_err());
        assert!(parse_link("=https://x").is_err());
        assert!(parse_link("Brief=").is_err());
    }
}
