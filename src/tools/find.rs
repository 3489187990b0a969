/// Tool for looking up an animal by name
///
/// This module implements the find operation.

use serde::{Deserialize, Serialize};
use crate::storage::AnimalStorage;

pub const ANIMAL_NOT_FOUND: &str = "Animal with that name not found.";

/// Parameters for finding an animal
#[derive(Debug, Clone, Deserialize)]
pub struct FindAnimalParams {
    /// Compared exactly: case-sensitive, no trimming
    pub name: String,
}

/// Response from finding an animal
#[derive(Debug, Serialize)]
pub struct FindAnimalResponse {
    /// Description of the first matching animal, if any
    pub description: Option<String>,
}

impl FindAnimalResponse {
    pub fn found(&self) -> bool {
        self.description.is_some()
    }

    /// The line the console shows for this lookup
    pub fn line(&self) -> &str {
        self.description.as_deref().unwrap_or(ANIMAL_NOT_FOUND)
    }
}

/// Find the first animal with the given name in the provided storage
pub fn find_animal<S: AnimalStorage>(storage: &S, params: FindAnimalParams) -> FindAnimalResponse {
    FindAnimalResponse {
        description: storage.find_by_name(&params.name).map(|animal| animal.describe()),
    }
}
