/// Storage layer for animal records
///
/// This module defines the storage contract the rest of the crate programs
/// against and the in-memory registry that implements it.

pub mod memory;

// Re-export the main storage types
pub use memory::*;

use crate::domain::Animal;

/// Trait defining the storage interface for animals
///
/// This trait allows the front end to be written against the contract
/// rather than a concrete collection.
pub trait AnimalStorage {
    /// Append an animal; always succeeds
    fn add(&mut self, animal: Animal);

    /// Every animal with its 0-based index, in insertion order
    fn list_all(&self) -> impl Iterator<Item = (usize, &Animal)> + '_;

    /// First animal, in insertion order, whose name equals `name` exactly
    fn find_by_name(&self, name: &str) -> Option<&Animal>;

    /// Number of stored animals
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
