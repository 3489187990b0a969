/// Sample records loaded at start-up

use crate::domain::{Animal, DomainError, Traits};

/// The three animals a fresh registry starts with, in listing order
pub fn sample_animals() -> Result<Vec<Animal>, DomainError> {
    Ok(vec![
        Animal::mammal(Traits::new("Barsik", 5, "forest", "predator", "golden", 19.5), true)?,
        Animal::bird(Traits::new("Eagle", 3, "mountains", "predator", "brown", 6.3), 2.0)?,
        Animal::fish(Traits::new("Salmon", 2, "river", "omnivore", "silver", 4.5), "fresh")?,
    ])
}
