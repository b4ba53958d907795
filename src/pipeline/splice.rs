//! The AI response splicer: swap the template's intro for the model's.
//!
//! A purely textual operation on two literal anchors — no template structure
//! is parsed. The greeting anchor (`Hi!`) marks where the intro begins; the
//! section anchor (`🍽️`) marks where the important-notes section begins and
//! the splice stops. A custom template lacking either anchor silently keeps
//! its original intro; that is an informational outcome, never an error.
//!
//! The notes section extracted from the response is display-only: it is
//! handed back to the caller but never written into the document.

use crate::prompts::{INTRO_MARKER, NOTES_MARKER};
use std::fmt;

/// First occurrence of this substring marks the start of the intro span.
pub const GREETING_ANCHOR: &str = "Hi!";

/// First occurrence of this substring marks the end of the intro span.
pub const SECTION_ANCHOR: &str = "🍽️";

/// The two labelled sections extracted from a well-formed AI response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiSections {
    /// Rewritten intro paragraph, trimmed.
    pub intro: String,
    /// Rewritten important notes, trimmed. Display-only.
    pub notes: String,
}

/// How the splice went. Informational: every variant leaves the pipeline on
/// a valid template (either spliced or the unmodified original).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpliceOutcome {
    /// The intro was replaced between the two anchors.
    Applied,
    /// AI was disabled or its call failed; no splice was attempted.
    #[default]
    NotAttempted,
    /// The AI response lacked the INTRO or IMPORTANT_NOTES marker.
    MissingMarkers,
    /// The template has no greeting anchor.
    NoGreetingAnchor,
    /// The template has no usable section anchor (absent, or at/before the
    /// greeting — splicing would produce an inverted span).
    NoSectionAnchor,
}

impl fmt::Display for SpliceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SpliceOutcome::Applied => "intro replaced with AI content",
            SpliceOutcome::NotAttempted => "AI customisation not applied",
            SpliceOutcome::MissingMarkers => {
                "AI response missing INTRO/IMPORTANT_NOTES markers; template unchanged"
            }
            SpliceOutcome::NoGreetingAnchor => {
                "template has no 'Hi!' greeting anchor; template unchanged"
            }
            SpliceOutcome::NoSectionAnchor => {
                "template has no usable section anchor; template unchanged"
            }
        };
        f.write_str(s)
    }
}

/// Parse an AI response into its intro and notes sections.
///
/// Returns `None` unless *both* markers are present. The intro is everything
/// before [`NOTES_MARKER`] with the first [`INTRO_MARKER`] removed; the notes
/// are everything after. Both trimmed.
pub fn parse_sections(response: &str) -> Option<AiSections> {
    if !response.contains(INTRO_MARKER) || !response.contains(NOTES_MARKER) {
        return None;
    }

    let (head, tail) = response.split_once(NOTES_MARKER)?;
    let intro = head.replacen(INTRO_MARKER, "", 1).trim().to_string();
    let notes = tail.trim().to_string();

    Some(AiSections { intro, notes })
}

/// Replace the template's intro span with `intro`.
///
/// The replaced span runs from the start of the first [`GREETING_ANCHOR`]
/// up to (not including) the first [`SECTION_ANCHOR`]. The spliced form is
/// `Hi!`, blank line, intro, blank line, then the untouched remainder from
/// the section anchor onward. When either anchor is missing or the section
/// anchor does not strictly follow the greeting, the template is returned
/// byte-identical.
pub fn splice_intro(template: &str, intro: &str) -> (String, SpliceOutcome) {
    let Some(greeting_pos) = template.find(GREETING_ANCHOR) else {
        return (template.to_string(), SpliceOutcome::NoGreetingAnchor);
    };

    let Some(section_pos) = template.find(SECTION_ANCHOR) else {
        return (template.to_string(), SpliceOutcome::NoSectionAnchor);
    };

    if section_pos <= greeting_pos {
        return (template.to_string(), SpliceOutcome::NoSectionAnchor);
    }

    let spliced = format!(
        "{}{}\n\n{}\n\n{}",
        &template[..greeting_pos],
        GREETING_ANCHOR,
        intro,
        &template[section_pos..]
    );

    (spliced, SpliceOutcome::Applied)
}

/// Parse `response` and, if well-formed, splice its intro into `template`.
///
/// Convenience wrapper used by the compose pipeline: a response without the
/// expected markers short-circuits to `MissingMarkers` with the template
/// unchanged and no sections.
pub fn apply(template: &str, response: &str) -> (String, SpliceOutcome, Option<AiSections>) {
    match parse_sections(response) {
        Some(sections) => {
            let (spliced, outcome) = splice_intro(template, &sections.intro);
            (spliced, outcome, Some(sections))
        }
        None => (template.to_string(), SpliceOutcome::MissingMarkers, None),
    }
}
