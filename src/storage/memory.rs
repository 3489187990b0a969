/// In-memory implementation of the animal storage interface
///
/// Records live in a `Vec` for the lifetime of the registry. Insertion order
/// is the listing order, and nothing is ever removed.

use crate::domain::Animal;
use crate::storage::AnimalStorage;

/// Vec-backed registry of animals
///
/// Not synchronised: a single owner drives it. A front end that needs
/// shared access has to wrap it in a lock.
#[derive(Debug, Default, Clone)]
pub struct MemoryRegistry {
    animals: Vec<Animal>,
}

impl MemoryRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the given animals, in order
    pub fn with_animals(animals: impl IntoIterator<Item = Animal>) -> Self {
        let mut registry = Self::new();
        for animal in animals {
            registry.add(animal);
        }
        registry
    }
}

impl AnimalStorage for MemoryRegistry {
    fn add(&mut self, animal: Animal) {
        tracing::debug!("Added {} '{}' at index {}", animal.type_name(), animal.name(), self.animals.len());
        self.animals.push(animal);
    }

    fn list_all(&self) -> impl Iterator<Item = (usize, &Animal)> + '_ {
        self.animals.iter().enumerate()
    }

    fn find_by_name(&self, name: &str) -> Option<&Animal> {
        let found = self.animals.iter().find(|animal| animal.name() == name);
        tracing::debug!("Lookup for '{}': {}", name, if found.is_some() { "hit" } else { "miss" });
        found
    }

    fn len(&self) -> usize {
        self.animals.len()
    }
}
