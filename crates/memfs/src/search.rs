//! Search functionality over filesystem subtrees.
//!
//! This module provides:
//! - The traversal that collects and orders matching entries
//! - The `Explorer` service bound to a root directory

mod engine;
mod explorer;

pub use engine::search_subtree;
pub use explorer::Explorer;
