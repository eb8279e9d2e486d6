//! Handle types for addressing slab slots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A handle to an entry stored in a [`Slab`](super::Slab).
///
/// The handle pairs a slot index with the generation the slot had when the
/// value was inserted. Freeing a slot bumps its generation, so a handle to a
/// deleted entry never resolves to whatever reuses the slot later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId {
    index: u32,
    generation: u32,
}

impl EntryId {
    /// Creates a handle from a slot index and generation.
    ///
    /// # Panics
    /// Panics if `index` does not fit in a u32.
    #[inline]
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        assert!(
            index <= u32::MAX as usize,
            "slab index must fit in a u32"
        );
        Self {
            index: index as u32,
            generation,
        }
    }

    /// Returns the slot index as a usize.
    #[inline]
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Returns the slot generation this handle was issued for.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}
