//! Node types stored in the filesystem slab.

use chrono::{DateTime, Utc};
use thin_vec::ThinVec;

use super::index_types::EntryId;
use crate::types::EntryKind;
use crate::user::User;

// ---------------------------------------------------------------------------
// Variant payloads
// ---------------------------------------------------------------------------

/// Payload of a file node.
///
/// `size` is independent state: changing `content` never recomputes it.
#[derive(Debug, Clone, Default)]
pub struct FileData {
    pub size: u64,
    pub content: Option<String>,
}

/// Payload of a directory node.
#[derive(Debug, Clone, Default)]
pub struct DirectoryData {
    /// Child handles in insertion order, without duplicates.
    pub(crate) children: ThinVec<EntryId>,
}

impl DirectoryData {
    /// Returns the child handles in insertion order.
    #[inline]
    pub fn children(&self) -> &[EntryId] {
        &self.children
    }

    /// Returns true if `child` is a direct child.
    #[inline]
    pub fn contains(&self, child: EntryId) -> bool {
        self.children.contains(&child)
    }

    /// Appends a child, returns false if it was already present.
    pub(crate) fn add_child(&mut self, child: EntryId) -> bool {
        if self.children.contains(&child) {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Removes a child, returns true if it was present.
    pub(crate) fn remove_child(&mut self, child: EntryId) -> bool {
        if let Some(pos) = self.children.iter().position(|&c| c == child) {
            self.children.remove(pos);
            true
        } else {
            false
        }
    }
}

/// The closed set of entry variants.
#[derive(Debug, Clone)]
pub enum NodeKind {
    File(FileData),
    Directory(DirectoryData),
}

// ---------------------------------------------------------------------------
// EntryNode
// ---------------------------------------------------------------------------

/// A node in the filesystem slab.
///
/// Holds the attributes shared by files and directories; variant-specific
/// state lives in [`NodeKind`].
#[derive(Debug, Clone)]
pub struct EntryNode {
    pub(crate) name: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) created_by: User,
    /// Back-reference to the containing directory, maintained by the tree.
    pub(crate) parent: Option<EntryId>,
    pub(crate) kind: NodeKind,
}

impl EntryNode {
    /// Creates a detached node stamped with the current time.
    pub fn new(name: String, created_by: User, kind: NodeKind) -> Self {
        Self {
            name,
            created_at: Utc::now(),
            created_by,
            parent: None,
            kind,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn created_by(&self) -> &User {
        &self.created_by
    }

    #[inline]
    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        match self.kind {
            NodeKind::File(_) => EntryKind::File,
            NodeKind::Directory(_) => EntryKind::Directory,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(_))
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File(_))
    }

    /// Returns the file payload, or None for directories.
    #[inline]
    pub fn as_file(&self) -> Option<&FileData> {
        match &self.kind {
            NodeKind::File(file) => Some(file),
            NodeKind::Directory(_) => None,
        }
    }

    /// Returns the directory payload, or None for files.
    #[inline]
    pub fn as_directory(&self) -> Option<&DirectoryData> {
        match &self.kind {
            NodeKind::Directory(dir) => Some(dir),
            NodeKind::File(_) => None,
        }
    }

    #[inline]
    pub(crate) fn as_file_mut(&mut self) -> Option<&mut FileData> {
        match &mut self.kind {
            NodeKind::File(file) => Some(file),
            NodeKind::Directory(_) => None,
        }
    }

    #[inline]
    pub(crate) fn as_directory_mut(&mut self) -> Option<&mut DirectoryData> {
        match &mut self.kind {
            NodeKind::Directory(dir) => Some(dir),
            NodeKind::File(_) => None,
        }
    }

    /// Returns the child handles (empty for files).
    #[inline]
    pub fn children(&self) -> &[EntryId] {
        self.as_directory().map(DirectoryData::children).unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dir_node(name: &str) -> EntryNode {
        EntryNode::new(
            name.to_string(),
            User::new("alice"),
            NodeKind::Directory(DirectoryData::default()),
        )
    }

    #[test]
    fn file_node_basic() {
        let node = EntryNode::new(
            "file.rs".to_string(),
            User::new("alice"),
            NodeKind::File(FileData {
                size: 1024,
                content: Some("fn main() {}".to_string()),
            }),
        );
        assert_eq!(node.name(), "file.rs");
        assert_eq!(node.parent(), None);
        assert_eq!(node.kind(), EntryKind::File);
        assert!(node.is_file());
        assert!(!node.is_dir());
        assert!(node.children().is_empty());
        assert_eq!(node.as_file().map(|f| f.size), Some(1024));
    }

    #[test]
    fn directory_children_are_deduplicated() {
        let mut node = dir_node("src");
        let child1 = EntryId::new(1, 0);
        let child2 = EntryId::new(2, 0);
        let dir = node.as_directory_mut().unwrap();

        assert!(dir.add_child(child1));
        assert!(dir.add_child(child2));
        assert!(!dir.add_child(child1));
        assert_eq!(dir.children(), &[child1, child2]);

        assert!(dir.remove_child(child1));
        assert!(!dir.remove_child(child1));
        assert_eq!(node.children(), &[child2]);
    }
}
