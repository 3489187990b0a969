/// Tool for listing all animals
///
/// This module implements the list operation.

use serde::Serialize;
use crate::domain::AnimalKind;
use crate::storage::AnimalStorage;

pub const NO_ANIMALS_FOUND: &str = "No animals found.";

/// Information about an animal in the list
#[derive(Debug, Serialize)]
pub struct AnimalSummary {
    pub index: usize,
    pub kind: AnimalKind,
    pub name: String,
    pub description: String,
}

/// Response from listing animals
#[derive(Debug, Serialize)]
pub struct ListAnimalsResponse {
    pub animals: Vec<AnimalSummary>,
}

impl ListAnimalsResponse {
    /// Console lines: `[index] description` per animal, or a single
    /// notice when the registry is empty
    pub fn lines(&self) -> Vec<String> {
        if self.animals.is_empty() {
            return vec![NO_ANIMALS_FOUND.to_string()];
        }

        self.animals
            .iter()
            .map(|summary| format!("[{}] {}", summary.index, summary.description))
            .collect()
    }
}

/// List animals from the provided storage in insertion order
pub fn list_animals<S: AnimalStorage>(storage: &S) -> ListAnimalsResponse {
    let animals = storage
        .list_all()
        .map(|(index, animal)| AnimalSummary {
            index,
            kind: animal.kind(),
            name: animal.name().to_string(),
            description: animal.describe(),
        })
        .collect();

    ListAnimalsResponse { animals }
}
