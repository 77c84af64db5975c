/// In-memory history of shortened links
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One shortened link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub long_url: String,
    pub short_url: String,
}

impl HistoryEntry {
    /// Create an entry with a freshly generated id.
    ///
    /// The id is the entry's identity: deleting from a filtered view goes
    /// through the id, never through a list position.
    pub fn new(long_url: String, short_url: String) -> HistoryEntry {
        HistoryEntry {
            id: Uuid::new_v4().to_string(),
            long_url,
            short_url,
        }
    }
}

/// Ordered collection of shortened links, most recent first.
///
/// Lives only for the current page session; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the front, keeping most-recent-first order.
    /// No deduplication: shortening the same URL twice yields two entries.
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }

    /// Remove the entry with the given id. Returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let original_len = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < original_len
    }

    /// Remove the entry at the given position. Out-of-range positions are
    /// a silent no-op.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    /// Lazy view of entries whose long URL contains `query`,
    /// case-insensitively, in original order. An empty query matches all.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a HistoryEntry> + 'a {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| e.long_url.to_lowercase().contains(&query))
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
