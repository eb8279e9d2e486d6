//! The filesystem tree: arena ownership and structural mutation.
//!
//! Every entry lives in a single [`Slab`] owned by [`FileSystem`]. Directories
//! hold child handles in insertion order and every child holds a handle to its
//! parent. Both sides of that link are only ever written here, in
//! [`FileSystem::add_entry`] and [`FileSystem::remove_entry`], so the child
//! list of a directory contains an entry exactly when the entry's parent is
//! that directory.

use crate::error::{FilesystemError, Result};
use crate::storage::{DirectoryData, EntryId, EntryNode, FileData, NodeKind, Slab};
use crate::user::User;
use crate::view::EntryRef;

/// Separator placed between names when deriving paths.
pub const PATH_SEPARATOR: char = '/';

/// An in-memory filesystem holding any number of entry trees.
///
/// Entries created without a parent are roots. Attaching and detaching moves
/// entries between trees without copying them.
#[derive(Debug, Default)]
pub struct FileSystem {
    nodes: Slab<EntryNode>,
}

impl FileSystem {
    /// Creates an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `id` refers to a live entry.
    pub fn contains(&self, id: EntryId) -> bool {
        self.nodes.contains(id)
    }

    /// Returns a read-only view of an entry, or None for a stale handle.
    pub fn get(&self, id: EntryId) -> Option<EntryRef<'_>> {
        self.nodes.get(id).map(|node| EntryRef::new(self, id, node))
    }

    /// Returns a read-only view of an entry.
    pub fn entry(&self, id: EntryId) -> Result<EntryRef<'_>> {
        self.get(id).ok_or(FilesystemError::UnknownEntry(id))
    }

    pub(crate) fn node(&self, id: EntryId) -> Result<&EntryNode> {
        self.nodes.get(id).ok_or(FilesystemError::UnknownEntry(id))
    }

    fn node_mut(&mut self, id: EntryId) -> Result<&mut EntryNode> {
        self.nodes
            .get_mut(id)
            .ok_or(FilesystemError::UnknownEntry(id))
    }

    fn directory_mut(&mut self, id: EntryId) -> Result<&mut DirectoryData> {
        self.node_mut(id)?
            .as_directory_mut()
            .ok_or(FilesystemError::NotADirectory(id))
    }

    fn file_mut(&mut self, id: EntryId) -> Result<&mut FileData> {
        self.node_mut(id)?
            .as_file_mut()
            .ok_or(FilesystemError::NotAFile(id))
    }

    /// Iterates over every live entry in slot order.
    pub fn iter(&self) -> impl Iterator<Item = EntryRef<'_>> {
        self.nodes
            .iter()
            .map(move |(id, node)| EntryRef::new(self, id, node))
    }

    /// Iterates over the handles of entries that have no parent.
    pub fn roots(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent().is_none())
            .map(|(id, _)| id)
    }

    // -----------------------------------------------------------------------
    // Creation
    // -----------------------------------------------------------------------

    /// Creates a detached, empty directory.
    pub fn create_directory(&mut self, name: &str, created_by: &User) -> Result<EntryId> {
        self.insert_node(
            name,
            created_by,
            NodeKind::Directory(DirectoryData::default()),
        )
    }

    /// Creates a detached file with an explicit size.
    pub fn create_file(
        &mut self,
        name: &str,
        created_by: &User,
        size: u64,
        content: Option<String>,
    ) -> Result<EntryId> {
        self.insert_node(name, created_by, NodeKind::File(FileData { size, content }))
    }

    /// Creates an empty directory and attaches it under `parent`.
    pub fn create_directory_in(
        &mut self,
        parent: EntryId,
        name: &str,
        created_by: &User,
    ) -> Result<EntryId> {
        self.ensure_directory(parent)?;
        let id = self.create_directory(name, created_by)?;
        self.add_entry(parent, id)?;
        Ok(id)
    }

    /// Creates a file under `parent`, sized to the character length of its
    /// content (zero when there is none).
    pub fn create_file_in(
        &mut self,
        parent: EntryId,
        name: &str,
        created_by: &User,
        content: Option<String>,
    ) -> Result<EntryId> {
        self.ensure_directory(parent)?;
        let size = content.as_deref().map_or(0, content_size);
        let id = self.create_file(name, created_by, size, content)?;
        self.add_entry(parent, id)?;
        Ok(id)
    }

    fn insert_node(&mut self, name: &str, created_by: &User, kind: NodeKind) -> Result<EntryId> {
        validate_name(name)?;
        let node = EntryNode::new(name.to_string(), created_by.clone(), kind);
        let id = self.nodes.insert(node);
        log::debug!("created {} {:?} as {}", self.nodes[id].kind().as_str(), name, id);
        Ok(id)
    }

    fn ensure_directory(&self, id: EntryId) -> Result<()> {
        if self.node(id)?.is_dir() {
            Ok(())
        } else {
            Err(FilesystemError::NotADirectory(id))
        }
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    /// Attaches `child` at the end of `parent`'s children.
    ///
    /// Returns `Ok(false)` without changes if `child` is already a child of
    /// `parent`. A child attached elsewhere is detached from its old parent
    /// first. Attaching a directory under itself or one of its descendants
    /// fails with [`FilesystemError::CycleDetected`].
    pub fn add_entry(&mut self, parent: EntryId, child: EntryId) -> Result<bool> {
        self.ensure_directory(parent)?;
        let old_parent = self.node(child)?.parent();
        if old_parent == Some(parent) {
            return Ok(false);
        }
        if self.is_ancestor_or_self(child, parent)? {
            return Err(FilesystemError::CycleDetected { parent, child });
        }

        if let Some(old_parent) = old_parent {
            log::debug!("moving {} from {} to {}", child, old_parent, parent);
            self.directory_mut(old_parent)?.remove_child(child);
        }
        self.directory_mut(parent)?.add_child(child);
        self.node_mut(child)?.parent = Some(parent);
        log::debug!("attached {} under {}", child, parent);
        Ok(true)
    }

    /// Detaches `child` from `parent`, leaving it alive as a root.
    ///
    /// Returns `Ok(false)` without changes if `child` is not a child of
    /// `parent`.
    pub fn remove_entry(&mut self, parent: EntryId, child: EntryId) -> Result<bool> {
        if !self.directory_mut(parent)?.remove_child(child) {
            return Ok(false);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
        log::debug!("detached {} from {}", child, parent);
        Ok(true)
    }

    /// Detaches an entry from its parent and frees it together with its
    /// whole subtree. Returns the number of entries freed.
    ///
    /// Handles to any freed entry become stale.
    pub fn delete_entry(&mut self, id: EntryId) -> Result<usize> {
        if let Some(parent) = self.node(id)?.parent() {
            self.remove_entry(parent, id)?;
        }

        let mut freed = 0usize;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.try_remove(current) else {
                continue;
            };
            if let NodeKind::Directory(dir) = node.kind {
                stack.extend(dir.children.iter().copied());
            }
            freed += 1;
        }
        log::debug!("deleted {} ({} entries freed)", id, freed);
        Ok(freed)
    }

    /// Returns the children of a directory in insertion order.
    pub fn children(&self, dir: EntryId) -> Result<&[EntryId]> {
        self.node(dir)?
            .as_directory()
            .map(DirectoryData::children)
            .ok_or(FilesystemError::NotADirectory(dir))
    }

    /// Returns true if `ancestor` is `id` or appears on `id`'s parent chain.
    pub fn is_ancestor_or_self(&self, ancestor: EntryId, id: EntryId) -> Result<bool> {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == ancestor {
                return Ok(true);
            }
            current = self.node(current_id)?.parent();
        }
        Ok(false)
    }

    // -----------------------------------------------------------------------
    // Attributes
    // -----------------------------------------------------------------------

    /// Renames an entry. Its position among its siblings is unchanged.
    pub fn set_name(&mut self, id: EntryId, name: &str) -> Result<()> {
        validate_name(name)?;
        let node = self.node_mut(id)?;
        log::debug!("renaming {} from {:?} to {:?}", id, node.name, name);
        node.name = name.to_string();
        Ok(())
    }

    /// Replaces a file's content. The stored size is left untouched.
    pub fn set_content(&mut self, id: EntryId, content: Option<String>) -> Result<()> {
        self.file_mut(id)?.content = content;
        Ok(())
    }

    /// Sets a file's size.
    pub fn set_size(&mut self, id: EntryId, size: u64) -> Result<()> {
        self.file_mut(id)?.size = size;
        Ok(())
    }

    /// Replaces a file's content and sets its size to the content's
    /// character length.
    pub fn rewrite_file(&mut self, id: EntryId, content: String) -> Result<()> {
        let file = self.file_mut(id)?;
        file.size = content_size(&content);
        file.content = Some(content);
        Ok(())
    }
}

/// Names must be non-blank and must not contain the path separator.
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.contains(PATH_SEPARATOR) {
        return Err(FilesystemError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn content_size(content: &str) -> u64 {
    content.chars().count() as u64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
