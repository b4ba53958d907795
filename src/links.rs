//! The link table: ordered (link text → URL) pairs.
//!
//! Order is the whole contract here. When a template line contains the text
//! of more than one entry, the entry that was added *first* wins — not the
//! entry whose text occurs earliest in the line. The table is a plain value
//! type scoped to one session and passed by reference into the builder; no
//! process-wide state.

use crate::error::ComposeError;
use serde::{Deserialize, Serialize};

/// One hyperlink mapping: the exact substring to search for and its target.
///
/// Matching is simple substring containment — case-sensitive, no word
/// boundaries. An entry whose text is a fragment of a longer word will still
/// match that word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Exact text to find in a template line (non-empty).
    pub text: String,
    /// Target address (non-empty; not validated for URL well-formedness).
    pub url: String,
}

/// An ordered sequence of [`LinkEntry`] values.
///
/// Insertion order determines match priority in
/// [`crate::pipeline::build::build_document`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTable {
    entries: Vec<LinkEntry>,
}

impl LinkTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Rejects empty link text or URL.
    pub fn add(
        &mut self,
        text: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<(), ComposeError> {
        let text = text.into();
        let url = url.into();
        if text.is_empty() {
            return Err(ComposeError::InvalidLink {
                detail: "link text must not be empty".into(),
            });
        }
        if url.is_empty() {
            return Err(ComposeError::InvalidLink {
                detail: format!("URL for '{}' must not be empty", text),
            });
        }
        self.entries.push(LinkEntry { text, url });
        Ok(())
    }

    /// Remove the entry at `index`, returning it if it existed.
    pub fn remove(&mut self, index: usize) -> Option<LinkEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LinkEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkEntry> {
        self.entries.iter()
    }

    /// Find the first entry *in table order* whose text occurs in `line`.
    ///
    /// Every entry is tested in insertion order until one matches; position
    /// within the line is irrelevant to priority.
    pub fn find_match(&self, line: &str) -> Option<&LinkEntry> {
        self.entries.iter().find(|e| line.contains(&e.text))
    }
}

impl<'a> IntoIterator for &'a LinkTable {
    type Item = &'a LinkEntry;
    type IntoIter = std::slice::Iter<'a, LinkEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> LinkTable {
        let mut t = LinkTable::new();
        for (text, url) in pairs {
            t.add(*text, *url).unwrap();
        }
        t
    }

    #[test]
    fn add_rejects_empty_text_and_url() {
        let mut t = LinkTable::new();
        assert!(t.add("", "http://x").is_err());
        assert!(t.add("Brief", "").is_err());
        assert!(t.is_empty());
    }

    #[test]
    fn remove_and_clear() {
        let mut t = table(&[("A", "http://a"), ("B", "http://b")]);
        let removed = t.remove(0).unwrap();
        assert_eq!(removed.text, "A");
        assert_eq!(t.len(), 1);
        assert!(t.remove(5).is_none());
        t.clear();
        assert!(t.is_empty());
    }

    #[test]
    fn find_match_is_substring_containment() {
        let t = table(&[("Brief", "http://b")]);
        // No word-boundary guard: "Briefing" still matches "Brief".
        assert!(t.find_match("Debriefing notes").is_none());
        assert!(t.find_match("Briefing notes").is_some());
        assert!(t.find_match("the Brief here").is_some());
        assert!(t.find_match("nothing relevant").is_none());
    }

    #[test]
    fn find_match_is_case_sensitive() {
        let t = table(&[("Brief", "http://b")]);
        assert!(t.find_match("the brief here").is_none());
    }

    #[test]
    fn table_order_beats_position_in_line() {
        let t = table(&[("Second Word", "http://2"), ("First Word", "http://1")]);
        // "First Word" occurs earlier in the line, but "Second Word" was
        // added first and therefore wins.
        let m = t.find_match("First Word then Second Word").unwrap();
        assert_eq!(m.url, "http://2");
    }
}
