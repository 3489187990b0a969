/// Tool for adding new animals
///
/// This module implements the add operation.

use serde::{Deserialize, Serialize};
use crate::domain::{Animal, DomainError, Traits, Variant};
use crate::storage::AnimalStorage;

pub const ANIMAL_ADDED: &str = "Animal added.";

/// Parameters for adding a new animal
#[derive(Debug, Clone, Deserialize)]
pub struct AddAnimalParams {
    #[serde(flatten)]
    pub traits: Traits,
    #[serde(flatten)]
    pub variant: Variant,
}

/// Response from adding an animal
#[derive(Debug, Serialize)]
pub struct AddAnimalResponse {
    /// Position of the new record in the listing
    pub index: usize,
    pub message: String,
}

/// Validate and append a new animal to the provided storage
pub fn add_animal<S: AnimalStorage>(
    storage: &mut S,
    params: AddAnimalParams,
) -> Result<AddAnimalResponse, DomainError> {
    let animal = Animal::new(params.traits, params.variant)?;
    let index = storage.len();
    storage.add(animal);

    Ok(AddAnimalResponse {
        index,
        message: ANIMAL_ADDED.to_string(),
    })
}
