//! Search predicates for filesystem entries.
//!
//! This module provides:
//! - The `Searchable` capability implemented by every entry
//! - `SearchQuery`, the keyword/owner/kind filter run by the explorer
//! - Case-insensitive matching and name ordering helpers

mod text_match;

pub use text_match::compare_names;
pub(crate) use text_match::{contains_ignore_case, lowercase_needle};

use crate::storage::{EntryNode, NodeKind};
use crate::types::KindFilter;
use crate::user::User;

/// Something that can be matched by a keyword search.
pub trait Searchable {
    /// Returns true if the keyword is a case-insensitive substring of the
    /// searchable text. A `None` keyword never matches.
    fn matches(&self, keyword: Option<&str>) -> bool;
}

impl Searchable for EntryNode {
    fn matches(&self, keyword: Option<&str>) -> bool {
        match keyword {
            Some(keyword) => node_matches_needle(self, &lowercase_needle(keyword)),
            None => false,
        }
    }
}

/// Directories match on their own name only; files match on name or content.
fn node_matches_needle(node: &EntryNode, needle: &str) -> bool {
    if contains_ignore_case(node.name(), needle) {
        return true;
    }
    match &node.kind {
        NodeKind::File(file) => file
            .content
            .as_deref()
            .is_some_and(|content| contains_ignore_case(content, needle)),
        NodeKind::Directory(_) => false,
    }
}

/// A filter applied to every entry of a searched subtree.
///
/// Each constraint is optional; an empty query accepts every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: Option<String>,
    needle: Option<String>,
    owner: Option<User>,
    kind: KindFilter,
}

impl SearchQuery {
    /// Creates a query with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to entries matching `keyword`.
    pub fn keyword(self, keyword: impl Into<String>) -> Self {
        self.with_keyword(Some(keyword.into()))
    }

    /// Sets or clears the keyword constraint.
    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.needle = keyword.as_deref().map(lowercase_needle);
        self.keyword = keyword;
        self
    }

    /// Restricts results to entries created by `owner`.
    pub fn owner(self, owner: User) -> Self {
        self.with_owner(Some(owner))
    }

    /// Sets or clears the owner constraint.
    pub fn with_owner(mut self, owner: Option<User>) -> Self {
        self.owner = owner;
        self
    }

    /// Restricts results to one entry kind.
    pub fn kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn keyword_text(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn owner_filter(&self) -> Option<&User> {
        self.owner.as_ref()
    }

    pub fn kind_filter(&self) -> KindFilter {
        self.kind
    }

    /// Returns true if `node` satisfies every constraint of this query.
    ///
    /// Without a keyword the keyword constraint is skipped entirely, unlike
    /// [`Searchable::matches`] which rejects a `None` keyword.
    pub fn accepts(&self, node: &EntryNode) -> bool {
        if !self.kind.matches(node.kind()) {
            return false;
        }
        if let Some(owner) = &self.owner {
            if node.created_by() != owner {
                return false;
            }
        }
        match &self.needle {
            Some(needle) => node_matches_needle(node, needle),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DirectoryData, FileData};

    fn file(name: &str, content: Option<&str>, owner: &str) -> EntryNode {
        EntryNode::new(
            name.to_string(),
            User::new(owner),
            NodeKind::File(FileData {
                size: 0,
                content: content.map(str::to_string),
            }),
        )
    }

    fn dir(name: &str, owner: &str) -> EntryNode {
        EntryNode::new(
            name.to_string(),
            User::new(owner),
            NodeKind::Directory(DirectoryData::default()),
        )
    }

    #[test]
    fn file_matches_name_or_content() {
        let node = file("notes.txt", Some("Meeting Notes"), "alice");
        assert!(node.matches(Some("NOTES")));
        assert!(node.matches(Some("meeting")));
        assert!(!node.matches(Some("plan")));
    }

    #[test]
    fn file_without_content_matches_name_only() {
        let node = file("empty.txt", None, "alice");
        assert!(node.matches(Some("empty")));
        assert!(!node.matches(Some("project")));
    }

    #[test]
    fn directory_matches_name_only() {
        let node = dir("Docs", "alice");
        assert!(node.matches(Some("doc")));
        assert!(!node.matches(Some("plan")));
    }

    #[test]
    fn none_keyword_never_matches() {
        assert!(!file("a", Some("a"), "alice").matches(None));
        assert!(!dir("a", "alice").matches(None));
    }

    #[test]
    fn empty_query_accepts_everything() {
        let query = SearchQuery::new();
        assert!(query.accepts(&file("a", None, "alice")));
        assert!(query.accepts(&dir("b", "bob")));
    }

    #[test]
    fn query_combines_constraints() {
        let query = SearchQuery::new()
            .keyword("Plan")
            .owner(User::new("alice"))
            .kind(KindFilter::File);

        assert_eq!(query.keyword_text(), Some("Plan"));
        assert!(query.accepts(&file("plan.txt", None, "alice")));
        assert!(!query.accepts(&file("plan.txt", None, "bob")));
        assert!(!query.accepts(&dir("plans", "alice")));
        assert!(!query.accepts(&file("notes.txt", None, "alice")));
    }

    #[test]
    fn clearing_keyword_removes_constraint() {
        let query = SearchQuery::new().keyword("zzz").with_keyword(None);
        assert_eq!(query.keyword_text(), None);
        assert!(query.accepts(&file("a", None, "alice")));
    }
}
