//! In-memory model of the hyperlinked output document.
//!
//! Deliberately minimal: an ordered list of paragraphs, each an ordered list
//! of runs, where a run is either plain text or a styled hyperlink. Nothing
//! else from WordprocessingML is modelled — headings, lists and emphasis are
//! out of scope, and the fixed hyperlink style (colour + underline) is
//! applied at packaging time, not carried here.

use serde::{Deserialize, Serialize};

/// One run inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Run {
    /// A plain-text span. May be empty (e.g. when a match sits at the start
    /// or end of a line — the prefix/suffix run is then the empty string).
    Text(String),
    /// A clickable span rendered blue and underlined in the .docx.
    Hyperlink { text: String, url: String },
}

impl Run {
    /// The visible text of the run, styling ignored.
    pub fn text(&self) -> &str {
        match self {
            Run::Text(t) => t,
            Run::Hyperlink { text, .. } => text,
        }
    }
}

/// One paragraph: an ordered sequence of runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Concatenation of all run texts. For a paragraph built from a template
    /// line this reproduces the line exactly.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Number of hyperlink runs (0 or 1 by construction).
    pub fn hyperlink_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|r| matches!(r, Run::Hyperlink { .. }))
            .count()
    }
}

/// An ordered sequence of paragraphs — the converter's output before
/// packaging. One paragraph per newline-delimited template line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperlinkedDocument {
    pub paragraphs: Vec<Paragraph>,
}

impl HyperlinkedDocument {
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Total hyperlink runs across all paragraphs.
    pub fn hyperlink_count(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::hyperlink_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_concatenates_runs() {
        let p = Paragraph {
            runs: vec![
                Run::Text("Visit: ".into()),
                Run::Hyperlink {
                    text: "Brief".into(),
                    url: "http://x".into(),
                },
                Run::Text("".into()),
            ],
        };
        assert_eq!(p.plain_text(), "Visit: Brief");
        assert_eq!(p.hyperlink_count(), 1);
    }

    #[test]
    fn empty_paragraph_is_empty_text() {
        assert_eq!(Paragraph::default().plain_text(), "");
    }
}
