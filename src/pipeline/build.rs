//! The hyperlink document builder: template lines → paragraphs with runs.
//!
//! ## Matching rule
//!
//! Per line, entries are tested in *table order* and the first whose text is
//! contained anywhere in the line wins — priority is insertion order, not
//! position in the line. The winning text is then split out at its **first**
//! occurrence only; later occurrences stay literal plain text in the
//! trailing run. Matching is plain substring containment: case-sensitive,
//! no word boundaries.
//!
//! ## Line semantics
//!
//! The template is split on `'\n'` with standard split semantics: an empty
//! template yields one empty line, a trailing newline yields a trailing
//! empty line, and every line — empty or not — becomes exactly one
//! paragraph. That gives the invariant the tests lean on: paragraph count
//! equals newline-split line count, always.

use crate::document::{HyperlinkedDocument, Paragraph, Run};
use crate::links::LinkTable;
use tracing::debug;

/// Build a [`HyperlinkedDocument`] from the final template text.
pub fn build_document(template: &str, links: &LinkTable) -> HyperlinkedDocument {
    let paragraphs: Vec<Paragraph> = template
        .split('\n')
        .map(|line| build_paragraph(line, links))
        .collect();

    let doc = HyperlinkedDocument { paragraphs };
    debug!(
        "Built document: {} paragraphs, {} hyperlinks",
        doc.paragraph_count(),
        doc.hyperlink_count()
    );
    doc
}

/// Convert one line into a paragraph, hyperlinking at most one span.
fn build_paragraph(line: &str, links: &LinkTable) -> Paragraph {
    let Some(entry) = links.find_match(line) else {
        return Paragraph {
            runs: vec![Run::Text(line.to_string())],
        };
    };

    // find_match guarantees containment, so split_once cannot fail here;
    // fall back to a plain run rather than panicking if it ever did.
    let Some((before, after)) = line.split_once(&entry.text) else {
        return Paragraph {
            runs: vec![Run::Text(line.to_string())],
        };
    };

    Paragraph {
        runs: vec![
            Run::Text(before.to_string()),
            Run::Hyperlink {
                text: entry.text.clone(),
                url: entry.url.clone(),
            },
            Run::Text(after.to_string()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkTable;

    fn table(pairs: &[(&str, &str)]) -> LinkTable {
        let mut t = LinkTable::new();
        for (text, url) in pairs {
            t.add(*text, *url).unwrap();
        }
        t
    }

    #[test]
    fn paragraph_count_equals_line_count() {
        let links = table(&[("Brief", "http://b")]);
        for template in ["", "one line", "a\nb\nc", "trailing\n", "\n\n"] {
            let doc = build_document(template, &links);
            assert_eq!(
                doc.paragraph_count(),
                template.split('\n').count(),
                "template: {template:?}"
            );
        }
    }

    #[test]
    fn empty_template_yields_one_empty_paragraph() {
        let doc = build_document("", &table(&[("x", "http://x")]));
        assert_eq!(doc.paragraph_count(), 1);
        assert_eq!(doc.paragraphs[0].plain_text(), "");
        assert_eq!(doc.hyperlink_count(), 0);
    }

    #[test]
    fn matched_line_has_three_runs_reconstructing_the_line() {
        let links = table(&[("Instructions Brief", "http://x")]);
        let doc = build_document("1. Instructions Brief now", &links);
        let p = &doc.paragraphs[0];
        assert_eq!(p.runs.len(), 3);
        assert_eq!(p.runs[0], Run::Text("1. ".into()));
        assert_eq!(
            p.runs[1],
            Run::Hyperlink {
                text: "Instructions Brief".into(),
                url: "http://x".into()
            }
        );
        assert_eq!(p.runs[2], Run::Text(" now".into()));
        assert_eq!(p.plain_text(), "1. Instructions Brief now");
    }

    #[test]
    fn match_at_line_end_leaves_empty_suffix_run() {
        let links = table(&[("Instructions Brief", "http://x")]);
        let doc = build_document("Visit: Instructions Brief", &links);
        let p = &doc.paragraphs[0];
        assert_eq!(p.runs.len(), 3);
        assert_eq!(p.runs[0], Run::Text("Visit: ".into()));
        assert_eq!(p.runs[2], Run::Text("".into()));
    }

    #[test]
    fn unmatched_line_is_single_plain_run() {
        let links = table(&[("Brief", "http://b")]);
        let doc = build_document("nothing to link here", &links);
        assert_eq!(
            doc.paragraphs[0].runs,
            vec![Run::Text("nothing to link here".into())]
        );
    }

    #[test]
    fn table_order_wins_over_position() {
        let links = table(&[("Beta", "http://beta"), ("Alpha", "http://alpha")]);
        // "Alpha" occurs first positionally; "Beta" is first in the table.
        let doc = build_document("Alpha then Beta", &links);
        let p = &doc.paragraphs[0];
        assert_eq!(
            p.runs[1],
            Run::Hyperlink {
                text: "Beta".into(),
                url: "http://beta".into()
            }
        );
        assert_eq!(p.plain_text(), "Alpha then Beta");
    }

    #[test]
    fn repeated_match_text_splits_first_occurrence_only() {
        let links = table(&[("Brief", "http://b")]);
        let doc = build_document("Brief then Brief again", &links);
        let p = &doc.paragraphs[0];
        assert_eq!(p.runs.len(), 3);
        assert_eq!(p.runs[0], Run::Text("".into()));
        assert_eq!(
            p.runs[1],
            Run::Hyperlink {
                text: "Brief".into(),
                url: "http://b".into()
            }
        );
        // The second occurrence stays literal in the trailing run.
        assert_eq!(p.runs[2], Run::Text(" then Brief again".into()));
        assert_eq!(p.hyperlink_count(), 1);
    }

    #[test]
    fn at_most_one_hyperlink_per_line() {
        let links = table(&[("A", "http://a"), ("B", "http://b")]);
        let doc = build_document("A and B on one line", &links);
        assert_eq!(doc.paragraphs[0].hyperlink_count(), 1);
    }

    #[test]
    fn three_line_template_links_only_the_matching_line() {
        let links = table(&[("Instructions Brief", "http://x")]);
        let doc = build_document(
            "Hi!\n🍽️ Important: visit a store\nVisit: Instructions Brief",
            &links,
        );
        assert_eq!(doc.paragraph_count(), 3);
        let p = &doc.paragraphs[2];
        assert_eq!(
            p.runs,
            vec![
                Run::Text("Visit: ".into()),
                Run::Hyperlink {
                    text: "Instructions Brief".into(),
                    url: "http://x".into()
                },
                Run::Text("".into()),
            ]
        );
    }
}
