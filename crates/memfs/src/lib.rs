//! In-memory hierarchical filesystem with keyword and owner search.
//!
//! This crate provides:
//! - An arena-backed tree of files and directories owned by users
//! - Path derivation and recursive size aggregation
//! - A search explorer that walks a subtree and returns entries sorted by name
//! - Plain-text tree rendering

pub mod error;
pub mod query;
pub mod render;
pub mod search;
pub mod storage;
pub mod tree;
pub mod types;
pub mod user;
pub mod view;

// Re-export main types
pub use error::{FilesystemError, Result};
pub use query::{compare_names, SearchQuery, Searchable};
pub use render::render_tree;
pub use search::Explorer;
pub use storage::EntryId;
pub use tree::{FileSystem, PATH_SEPARATOR};
pub use types::{EntryInfo, EntryKind, KindFilter, SearchResult};
pub use user::User;
pub use view::EntryRef;
