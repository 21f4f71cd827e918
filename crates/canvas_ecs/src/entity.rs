//! Entity type and allocation utilities.
//!
//! An [`Entity`] is a lightweight `u64` identifier with no inherent data.
//! IDs are handed out by an [`EntityAllocator`] in strictly increasing order
//! and are never reused, even after the entity is destroyed.

use serde::{Deserialize, Serialize};

/// A unique entity identifier.
///
/// Entities are pure identifiers. They carry no data of their own. Components
/// are attached to entities to give them meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(u64);

impl Entity {
    /// Create an entity from a raw `u64` identifier.
    ///
    /// A raw entity is only meaningful to the [`Context`](crate::Context) that
    /// allocated it; other stores treat it as unknown.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Allocates monotonically increasing entity IDs, starting at `0`.
///
/// Destroyed IDs are never handed out again. Recycling would need a
/// generation counter next to each slot so stale handles can be detected.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    next_id: u64,
}

impl EntityAllocator {
    /// Creates a new allocator whose first ID is `0`.
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Allocates a fresh entity ID.
    ///
    /// # Panics
    ///
    /// Panics once every `u64` ID has been issued. The allocator never wraps
    /// around, since that would hand out an ID that is already in use.
    pub fn allocate(&mut self) -> Entity {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .unwrap_or_else(|| panic!("entity id space exhausted after {id}"));
        Entity(id)
    }

    /// Returns the number of entities allocated so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.next_id
    }
}
