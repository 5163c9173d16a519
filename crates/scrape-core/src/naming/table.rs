//! Per-page mapping from media href to chosen output filename.

use std::collections::HashMap;

use super::{choose_candidate, sanitize_filename, strip_index_prefix};
use crate::media::MediaLink;

/// Href -> sanitized filename, in first-seen order. Built once per page.
#[derive(Debug, Default, Clone)]
pub struct NameTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

// Counts chars; a UTF-16 length would differ only for non-BMP names, so such ties can break differently.
fn rank(name: &str) -> usize {
    strip_index_prefix(name).chars().count()
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from every link on a page, in document order.
    pub fn from_links(links: &[MediaLink]) -> Self {
        let mut table = Self::new();
        for link in links {
            table.insert_link(link);
        }
        table
    }

    /// Offers the anchor's candidate name for its href.
    pub fn insert_link(&mut self, link: &MediaLink) {
        self.offer(&link.href, choose_candidate(link));
    }

    /// Records `candidate` for `href` if it ranks strictly longer than the current name.
    ///
    /// An unseen href starts from the empty name, so it always gets an entry.
    /// Ties and shorter candidates keep the existing name. Returns true when
    /// the stored name changed.
    pub fn offer(&mut self, href: &str, candidate: &str) -> bool {
        let candidate_rank = rank(candidate);
        match self.index.get(href).copied() {
            Some(i) => {
                let current = &mut self.entries[i].1;
                if candidate_rank > rank(current) {
                    tracing::trace!(href, from = current.as_str(), to = candidate, "better name");
                    *current = sanitize_filename(candidate);
                    true
                } else {
                    false
                }
            }
            None => {
                let name = if candidate_rank > 0 {
                    sanitize_filename(candidate)
                } else {
                    String::new()
                };
                self.index.insert(href.to_string(), self.entries.len());
                self.entries.push((href.to_string(), name));
                candidate_rank > 0
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, href: &str) -> Option<&str> {
        self.index.get(href).map(|&i| self.entries[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (href, name) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(href, name)| (href.as_str(), name.as_str()))
    }
}
