//! Generational slab allocator for entry nodes.
//!
//! Values live in a contiguous vector of slots. Freed slots are chained into
//! a freelist and reused by later inserts; every slot carries a generation
//! that is bumped on removal so outstanding handles can be validated.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use super::index_types::EntryId;

/// Slot contents: a value, or a link in the freelist.
#[derive(Debug, Clone)]
enum Entry<T> {
    /// Index of the next free slot.
    Vacant(usize),
    Occupied(T),
}

/// A slot together with the generation of its current (or next) occupant.
#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Slab that owns every node of a filesystem tree.
pub struct Slab<T> {
    /// Backing storage; every slot ever handed out stays initialized.
    slots: Vec<Slot<T>>,

    /// Logical element count (occupied slots only).
    len: usize,

    /// Head of the freelist (index of the next available slot).
    next: usize,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Slab<T> {
    /// Creates a new empty slab.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            next: 0,
        }
    }

    /// Inserts a value, returning a handle to it.
    pub fn insert(&mut self, value: T) -> EntryId {
        let key = self.next;
        let generation = if key == self.slots.len() {
            // Appending to end
            self.slots.push(Slot {
                generation: 0,
                entry: Entry::Occupied(value),
            });
            self.next = self.slots.len();
            0
        } else {
            // Reusing a vacant slot from the freelist
            let slot = &mut self.slots[key];
            let next_free = match slot.entry {
                Entry::Vacant(next) => next,
                Entry::Occupied(_) => unreachable!("freelist head points at an occupied slot"),
            };
            slot.entry = Entry::Occupied(value);
            self.next = next_free;
            slot.generation
        };
        self.len += 1;
        EntryId::new(key, generation)
    }

    /// Gets a reference to the value behind `id`.
    pub fn get(&self, id: EntryId) -> Option<&T> {
        match self.slots.get(id.index()) {
            Some(Slot {
                generation,
                entry: Entry::Occupied(value),
            }) if *generation == id.generation() => Some(value),
            _ => None,
        }
    }

    /// Gets a mutable reference to the value behind `id`.
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        match self.slots.get_mut(id.index()) {
            Some(Slot {
                generation,
                entry: Entry::Occupied(value),
            }) if *generation == id.generation() => Some(value),
            _ => None,
        }
    }

    /// Returns true if `id` refers to a live value.
    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    /// Removes the value behind `id` if it exists, returning it.
    pub fn try_remove(&mut self, id: EntryId) -> Option<T> {
        let next_free = self.next;
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation() || matches!(slot.entry, Entry::Vacant(_)) {
            return None;
        }
        let prev = mem::replace(&mut slot.entry, Entry::Vacant(next_free));
        slot.generation = slot.generation.wrapping_add(1);
        self.len -= 1;
        self.next = id.index();
        match prev {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant(_) => None,
        }
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the slab is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over occupied entries in slot order.
    pub fn iter(&self) -> SlabIter<'_, T> {
        SlabIter {
            slab: self,
            index: 0,
        }
    }
}

impl<T> Index<EntryId> for Slab<T> {
    type Output = T;

    fn index(&self, id: EntryId) -> &Self::Output {
        self.get(id).expect("invalid slab handle")
    }
}

impl<T> IndexMut<EntryId> for Slab<T> {
    fn index_mut(&mut self, id: EntryId) -> &mut Self::Output {
        self.get_mut(id).expect("invalid slab handle")
    }
}

impl<T> fmt::Debug for Slab<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slab")
            .field("len", &self.len)
            .field("next", &self.next)
            .field("slots", &self.slots.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Slab Iterator
// ---------------------------------------------------------------------------

/// Iterator over occupied entries in a Slab.
pub struct SlabIter<'a, T> {
    slab: &'a Slab<T>,
    index: usize,
}

impl<'a, T> Iterator for SlabIter<'a, T> {
    type Item = (EntryId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slab.slots.get(self.index) {
            let idx = self.index;
            self.index += 1;
            if let Entry::Occupied(value) = &slot.entry {
                return Some((EntryId::new(idx, slot.generation), value));
            }
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a Slab<T> {
    type Item = (EntryId, &'a T);
    type IntoIter = SlabIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
