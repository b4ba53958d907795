//! Output types returned by the compose pipeline.

use crate::document::HyperlinkedDocument;
use crate::pipeline::splice::SpliceOutcome;
use serde::Serialize;

/// Everything a caller might want from one generation run.
///
/// The `.docx` bytes are ready to stream as a download
/// ([`crate::pipeline::package::DOCX_FILENAME`] /
/// [`crate::pipeline::package::DOCX_MIME`]); the in-memory document and the
/// final template text are exposed alongside so UIs can preview, and tests
/// can assert, without unzipping anything.
#[derive(Debug, Clone)]
pub struct ComposeOutput {
    /// The packaged word-processing document.
    pub docx: Vec<u8>,

    /// The in-memory document the bytes were packaged from.
    pub document: HyperlinkedDocument,

    /// The template text the document was built from — spliced when the AI
    /// step succeeded, otherwise the original input verbatim.
    pub final_template: String,

    /// The notes section extracted from the AI response. Display-only;
    /// never spliced into the document.
    pub ai_notes: Option<String>,

    /// The raw AI response, for "view AI-generated content" surfaces.
    pub ai_raw: Option<String>,

    /// Set when the AI call failed and the pipeline fell back to the
    /// unmodified template. Human-readable; surface as a warning.
    pub ai_warning: Option<String>,

    /// How the intro splice went.
    pub splice: SpliceOutcome,

    /// Run statistics.
    pub stats: ComposeStats,
}

/// Statistics for a generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComposeStats {
    /// Wall-clock duration of the whole run.
    pub total_duration_ms: u64,
    /// Time spent in the AI call (0 when AI was off or skipped).
    pub ai_duration_ms: u64,
    /// Paragraphs in the output document.
    pub paragraph_count: usize,
    /// Hyperlink runs in the output document.
    pub hyperlink_count: usize,
    /// Whether an AI completion was obtained and applied to the run.
    pub ai_used: bool,
}
