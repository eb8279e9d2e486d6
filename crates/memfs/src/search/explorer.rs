//! Explorer service bound to a root directory.

use std::io::Write;

use crate::error::{FilesystemError, Result};
use crate::query::SearchQuery;
use crate::storage::EntryId;
use crate::tree::FileSystem;
use crate::types::{EntryInfo, SearchResult};
use crate::user::User;

use super::engine::search_subtree;

/// Runs keyword and owner searches over the subtree of one directory.
///
/// The explorer only reads the tree. Results are handles to live entries,
/// so they remain valid for mutating the tree once the explorer is dropped.
#[derive(Debug, Clone, Copy)]
pub struct Explorer<'a> {
    fs: &'a FileSystem,
    root: EntryId,
}

impl<'a> Explorer<'a> {
    /// Creates an explorer rooted at the directory `root`.
    pub fn new(fs: &'a FileSystem, root: EntryId) -> Result<Self> {
        if !fs.node(root)?.is_dir() {
            return Err(FilesystemError::NotADirectory(root));
        }
        Ok(Self { fs, root })
    }

    pub fn root(&self) -> EntryId {
        self.root
    }

    /// Runs a query and returns the sorted matches with traversal stats.
    pub fn run(&self, query: &SearchQuery) -> Result<SearchResult> {
        let result = search_subtree(self.fs, self.root, query)?;
        log::debug!(
            "search under {} (keyword={:?}, owner={:?}, kind={:?}): {} of {} entries matched",
            self.root,
            query.keyword_text(),
            query.owner_filter().map(User::username),
            query.kind_filter(),
            result.count(),
            result.scanned
        );
        Ok(result)
    }

    /// Returns every entry matching `keyword`, sorted by name.
    ///
    /// `None` applies no keyword constraint and returns the whole subtree.
    pub fn search(&self, keyword: Option<&str>) -> Result<Vec<EntryId>> {
        self.search_with_user(keyword, None)
    }

    /// Returns every entry matching `keyword` and created by `user`, sorted
    /// by name. Either constraint may be omitted.
    pub fn search_with_user(
        &self,
        keyword: Option<&str>,
        user: Option<&User>,
    ) -> Result<Vec<EntryId>> {
        let query = SearchQuery::new()
            .with_keyword(keyword.map(str::to_string))
            .with_owner(user.cloned());
        Ok(self.run(&query)?.entries)
    }

    /// Returns every entry created by `user`, sorted by name.
    pub fn search_by_user(&self, user: &User) -> Result<Vec<EntryId>> {
        self.search_with_user(None, Some(user))
    }

    /// Takes detached snapshots of result entries, skipping stale handles.
    pub fn describe(&self, results: &[EntryId]) -> Vec<EntryInfo> {
        results
            .iter()
            .filter_map(|id| self.fs.get(*id))
            .map(|entry| entry.info())
            .collect()
    }

    /// Writes one display line per result, or `No results found.` when
    /// there are none.
    pub fn print_search_results<W: Write>(&self, results: &[EntryId], mut out: W) -> Result<()> {
        if results.is_empty() {
            writeln!(out, "No results found.")?;
            return Ok(());
        }
        for id in results {
            match self.fs.get(*id) {
                Some(entry) => writeln!(out, "{entry}")?,
                None => log::warn!("skipping stale search result {}", id),
            }
        }
        Ok(())
    }
}
