//! Subtree traversal and result ordering.

use crate::error::Result;
use crate::query::{compare_names, SearchQuery};
use crate::storage::EntryId;
use crate::tree::FileSystem;
use crate::types::SearchResult;

/// Walks the subtree under `root` and collects every entry the query
/// accepts, the root included.
///
/// Entries are visited depth-first in pre-order, children in insertion
/// order. The collected entries are then sorted case-insensitively by name
/// with a stable sort, so entries with equal names keep their visit order.
pub fn search_subtree(fs: &FileSystem, root: EntryId, query: &SearchQuery) -> Result<SearchResult> {
    fs.node(root)?;

    let mut matches = Vec::new();
    let mut scanned = 0usize;
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let Ok(node) = fs.node(id) else {
            continue;
        };
        scanned += 1;
        if query.accepts(node) {
            matches.push((id, node.name()));
        }
        // Reversed so the first child is popped next
        stack.extend(node.children().iter().rev().copied());
    }

    matches.sort_by(|(_, a), (_, b)| compare_names(a, b));

    Ok(SearchResult {
        entries: matches.into_iter().map(|(id, _)| id).collect(),
        scanned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilesystemError;
    use crate::user::User;

    fn names(fs: &FileSystem, ids: &[EntryId]) -> Vec<String> {
        ids.iter()
            .map(|id| fs.entry(*id).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn visits_root_and_every_descendant() {
        let mut fs = FileSystem::new();
        let user = User::new("alice");
        let root = fs.create_directory("root", &user).unwrap();
        let a = fs.create_directory_in(root, "a", &user).unwrap();
        fs.create_file_in(a, "a1", &user, None).unwrap();
        fs.create_file_in(root, "b", &user, None).unwrap();

        let result = search_subtree(&fs, root, &SearchQuery::new()).unwrap();
        assert_eq!(result.scanned, 4);
        assert_eq!(names(&fs, &result.entries), vec!["a", "a1", "b", "root"]);
    }

    #[test]
    fn equal_names_keep_preorder_visit_order() {
        let mut fs = FileSystem::new();
        let user = User::new("alice");
        let root = fs.create_directory("root", &user).unwrap();
        let first = fs.create_directory_in(root, "Same", &user).unwrap();
        let nested = fs.create_file_in(first, "same", &user, None).unwrap();
        let last = fs.create_file_in(root, "SAME", &user, None).unwrap();

        let query = SearchQuery::new().keyword("same");
        let result = search_subtree(&fs, root, &query).unwrap();
        assert_eq!(result.entries, vec![first, nested, last]);
    }

    #[test]
    fn search_is_scoped_to_subtree() {
        let mut fs = FileSystem::new();
        let user = User::new("alice");
        let root = fs.create_directory("root", &user).unwrap();
        let docs = fs.create_directory_in(root, "docs", &user).unwrap();
        let plan = fs.create_file_in(docs, "plan.txt", &user, None).unwrap();
        fs.create_file_in(root, "plan-b.txt", &user, None).unwrap();

        let result = search_subtree(&fs, docs, &SearchQuery::new().keyword("plan")).unwrap();
        assert_eq!(result.entries, vec![plan]);
        assert_eq!(result.scanned, 2);
    }

    #[test]
    fn search_from_file_root_checks_only_that_file() {
        let mut fs = FileSystem::new();
        let file = fs
            .create_file("notes.txt", &User::new("alice"), 0, None)
            .unwrap();

        let result = search_subtree(&fs, file, &SearchQuery::new()).unwrap();
        assert_eq!(result.entries, vec![file]);
    }

    #[test]
    fn unknown_root_is_an_error() {
        let mut fs = FileSystem::new();
        let root = fs.create_directory("root", &User::new("alice")).unwrap();
        fs.delete_entry(root).unwrap();

        assert!(matches!(
            search_subtree(&fs, root, &SearchQuery::new()),
            Err(FilesystemError::UnknownEntry(_))
        ));
    }
}
