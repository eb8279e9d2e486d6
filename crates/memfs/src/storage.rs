//! Storage layer for the in-memory filesystem.
//!
//! This module provides the low-level data storage primitives:
//! - A generational slab that owns every entry node
//! - Compact `EntryId` handles used for parent and child links
//! - Node payloads for files and directories

mod index_types;
mod node;
mod slab;

pub use index_types::EntryId;
pub use node::{DirectoryData, EntryNode, FileData, NodeKind};
pub use slab::{Slab, SlabIter};
