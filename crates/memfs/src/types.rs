//! Shared value types for entries and search results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::EntryId;
use crate::user::User;

/// Entry variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }

    /// Capitalized name used in the entry display form.
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Directory => "Directory",
        }
    }
}

/// Kind filter for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    File,
    Directory,
}

impl KindFilter {
    pub fn matches(&self, kind: EntryKind) -> bool {
        match self {
            Self::All => true,
            Self::File => kind == EntryKind::File,
            Self::Directory => kind == EntryKind::Directory,
        }
    }
}

/// Detached snapshot of an entry, suitable for handing to a front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInfo {
    pub id: EntryId,
    pub kind: EntryKind,
    pub name: String,
    pub path: String,
    pub size: u64,
    pub created_by: User,
    pub created_at: DateTime<Utc>,
}

/// Outcome of an explorer query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Matching entries, sorted case-insensitively by name.
    pub entries: Vec<EntryId>,
    /// Number of entries visited during the traversal.
    pub scanned: usize,
}

impl SearchResult {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_filter_matches() {
        assert!(KindFilter::All.matches(EntryKind::File));
        assert!(KindFilter::All.matches(EntryKind::Directory));
        assert!(KindFilter::File.matches(EntryKind::File));
        assert!(!KindFilter::File.matches(EntryKind::Directory));
        assert!(KindFilter::Directory.matches(EntryKind::Directory));
        assert!(!KindFilter::Directory.matches(EntryKind::File));
    }

    #[test]
    fn entry_kind_names() {
        assert_eq!(EntryKind::File.as_str(), "file");
        assert_eq!(EntryKind::Directory.label(), "Directory");
        assert_eq!(
            serde_json::to_string(&EntryKind::Directory).unwrap(),
            "\"directory\""
        );
    }
}
