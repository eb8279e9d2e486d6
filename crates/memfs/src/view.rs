//! Read-only views over filesystem entries.
//!
//! Derived attributes (path, recursive size) are computed on every call by
//! walking the slab, so a view always reflects the tree as it is now.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::query::Searchable;
use crate::storage::{EntryId, EntryNode, NodeKind};
use crate::tree::{FileSystem, PATH_SEPARATOR};
use crate::types::{EntryInfo, EntryKind};
use crate::user::User;

/// A borrowed view of one entry.
///
/// The view holds the filesystem immutably, so it cannot outlive a mutation.
/// Keep the [`EntryId`] to refer to the entry across mutations.
#[derive(Clone, Copy)]
pub struct EntryRef<'a> {
    fs: &'a FileSystem,
    id: EntryId,
    node: &'a EntryNode,
}

impl<'a> EntryRef<'a> {
    #[inline]
    pub(crate) fn new(fs: &'a FileSystem, id: EntryId, node: &'a EntryNode) -> Self {
        Self { fs, id, node }
    }

    #[inline]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        self.node.name()
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.node.kind()
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.node.is_file()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.node.is_dir()
    }

    #[inline]
    pub fn created_by(&self) -> &'a User {
        self.node.created_by()
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.node.created_at()
    }

    /// Returns the containing directory, or None for a root.
    #[inline]
    pub fn parent(&self) -> Option<EntryId> {
        self.node.parent()
    }

    /// Returns the child handles in insertion order (empty for files).
    #[inline]
    pub fn children(&self) -> &'a [EntryId] {
        self.node.children()
    }

    /// Returns the file content, or None for directories and empty files.
    #[inline]
    pub fn content(&self) -> Option<&'a str> {
        self.node.as_file().and_then(|file| file.content.as_deref())
    }

    /// Computes the path by walking up the parent chain.
    ///
    /// Every name is prefixed by the separator, so a root named `root`
    /// has the path `/root`.
    pub fn path(&self) -> String {
        let mut segments = vec![self.node.name()];
        let mut current = self.node.parent();
        while let Some(parent_id) = current {
            let Ok(parent) = self.fs.node(parent_id) else {
                break;
            };
            segments.push(parent.name());
            current = parent.parent();
        }

        let mut path = String::new();
        for segment in segments.iter().rev() {
            path.push(PATH_SEPARATOR);
            path.push_str(segment);
        }
        path
    }

    /// Computes the number of ancestors (0 for roots).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node.parent();
        while let Some(parent_id) = current {
            depth += 1;
            current = self.fs.node(parent_id).ok().and_then(EntryNode::parent);
        }
        depth
    }

    /// Returns the stored size of a file, or the sum of all file sizes
    /// below a directory.
    pub fn size(&self) -> u64 {
        let dir = match &self.node.kind {
            NodeKind::File(file) => return file.size,
            NodeKind::Directory(dir) => dir,
        };

        let mut total = 0u64;
        let mut stack: Vec<EntryId> = dir.children().to_vec();
        while let Some(id) = stack.pop() {
            let Ok(node) = self.fs.node(id) else {
                continue;
            };
            match &node.kind {
                NodeKind::File(file) => total = total.saturating_add(file.size),
                NodeKind::Directory(dir) => stack.extend_from_slice(dir.children()),
            }
        }
        total
    }

    /// Takes a detached snapshot of this entry.
    pub fn info(&self) -> EntryInfo {
        EntryInfo {
            id: self.id,
            kind: self.kind(),
            name: self.name().to_string(),
            path: self.path(),
            size: self.size(),
            created_by: self.created_by().clone(),
            created_at: self.created_at(),
        }
    }
}

impl Searchable for EntryRef<'_> {
    fn matches(&self, keyword: Option<&str>) -> bool {
        self.node.matches(keyword)
    }
}

impl fmt::Debug for EntryRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryRef")
            .field("id", &self.id)
            .field("node", self.node)
            .finish()
    }
}

/// Display form: kind, path, size, creator and creation time.
impl fmt::Display for EntryRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [path={}, size={}, createdBy={}, createdAt={}]",
            self.kind().label(),
            self.path(),
            self.size(),
            self.created_by(),
            self.created_at().to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}
