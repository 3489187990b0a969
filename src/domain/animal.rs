/// Animal entity and related functionality
///
/// This module defines the Animal record: a shared set of base traits plus
/// exactly one variant-specific attribute. Records are validated once, at
/// construction, and are immutable afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use crate::domain::{AnimalKind, DomainError, YesNo};

/// Attributes every animal has regardless of its kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traits {
    /// Display name, also the lookup key (e.g., "Barsik")
    pub name: String,
    /// Age in whole years
    pub age: u32,
    /// Where the animal lives (e.g., "forest", "river")
    pub habitat: String,
    /// Diet type (e.g., "predator", "omnivore")
    pub diet: String,
    pub color: String,
    /// Weight in kilograms
    pub weight: f64,
}

impl Traits {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        habitat: impl Into<String>,
        diet: impl Into<String>,
        color: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            habitat: habitat.into(),
            diet: diet.into(),
            color: color.into(),
            weight,
        }
    }
}

/// The variant-specific attribute, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Variant {
    Mammal { has_fur: bool },
    /// Wingspan in metres
    Bird { wingspan: f64 },
    /// Water type, expected to be "fresh" or "salt" but not enforced
    Fish { water_type: String },
    Reptile { is_venomous: bool },
    /// Free-form skin moisture description
    Amphibian { skin_moisture: String },
}

impl Variant {
    /// Which kind of animal this variant belongs to
    pub fn kind(&self) -> AnimalKind {
        match self {
            Variant::Mammal { .. } => AnimalKind::Mammal,
            Variant::Bird { .. } => AnimalKind::Bird,
            Variant::Fish { .. } => AnimalKind::Fish,
            Variant::Reptile { .. } => AnimalKind::Reptile,
            Variant::Amphibian { .. } => AnimalKind::Amphibian,
        }
    }

    /// Labelled text for the extra attribute (e.g., "Has Fur: yes")
    fn extra_display(&self) -> String {
        match self {
            Variant::Mammal { has_fur } => format!("Has Fur: {}", YesNo::label(*has_fur)),
            Variant::Bird { wingspan } => format!("Wingspan: {} m", wingspan),
            Variant::Fish { water_type } => format!("Water Type: {}", water_type),
            Variant::Reptile { is_venomous } => format!("Venomous: {}", YesNo::label(*is_venomous)),
            Variant::Amphibian { skin_moisture } => format!("Skin Moisture: {}", skin_moisture),
        }
    }
}

/// A single animal record
///
/// Fields are private; the only way to obtain an `Animal` is through a
/// validating constructor, so a non-empty name and non-negative measures
/// hold for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedAnimal")]
pub struct Animal {
    #[serde(flatten)]
    traits: Traits,
    #[serde(flatten)]
    variant: Variant,
}

impl Animal {
    /// Create a new animal with validation
    pub fn new(mut traits: Traits, mut variant: Variant) -> Result<Self, DomainError> {
        Self::validate_name(&traits.name)?;
        traits.weight = Self::validate_measure(traits.weight).map_err(DomainError::InvalidWeight)?;
        if let Variant::Bird { wingspan } = &mut variant {
            *wingspan = Self::validate_measure(*wingspan).map_err(DomainError::InvalidWingspan)?;
        }

        Ok(Self { traits, variant })
    }

    pub fn mammal(traits: Traits, has_fur: bool) -> Result<Self, DomainError> {
        Self::new(traits, Variant::Mammal { has_fur })
    }

    pub fn bird(traits: Traits, wingspan: f64) -> Result<Self, DomainError> {
        Self::new(traits, Variant::Bird { wingspan })
    }

    pub fn fish(traits: Traits, water_type: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(traits, Variant::Fish { water_type: water_type.into() })
    }

    pub fn reptile(traits: Traits, is_venomous: bool) -> Result<Self, DomainError> {
        Self::new(traits, Variant::Reptile { is_venomous })
    }

    pub fn amphibian(traits: Traits, skin_moisture: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(traits, Variant::Amphibian { skin_moisture: skin_moisture.into() })
    }

    pub fn name(&self) -> &str {
        &self.traits.name
    }

    pub fn traits(&self) -> &Traits {
        &self.traits
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn kind(&self) -> AnimalKind {
        self.variant.kind()
    }

    /// One of "Mammal", "Bird", "Fish", "Reptile" or "Amphibian"
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Human-readable description with every field in a fixed order
    ///
    /// `Type: Mammal, Name: Rex, Age: 4, Habitat: forest, Diet: predator,
    /// Color: brown, Weight: 12 kg, Has Fur: yes`
    pub fn describe(&self) -> String {
        let t = &self.traits;
        format!(
            "Type: {}, Name: {}, Age: {}, Habitat: {}, Diet: {}, Color: {}, Weight: {} kg, {}",
            self.type_name(),
            t.name,
            t.age,
            t.habitat,
            t.diet,
            t.color,
            t.weight,
            self.variant.extra_display(),
        )
    }

    // Validation helper methods

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidName(
                "Animal name cannot be empty".to_string()
            ));
        }
        Ok(())
    }

    /// Measures must be finite and non-negative; `-0` is stored as `0`
    fn validate_measure(value: f64) -> Result<f64, f64> {
        if value.is_finite() && value >= 0.0 {
            Ok(value + 0.0)
        } else {
            Err(value)
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Wire shape of an animal before validation
#[derive(Deserialize)]
struct UncheckedAnimal {
    #[serde(flatten)]
    traits: Traits,
    #[serde(flatten)]
    variant: Variant,
}

impl TryFrom<UncheckedAnimal> for Animal {
    type Error = DomainError;

    fn try_from(raw: UncheckedAnimal) -> Result<Self, Self::Error> {
        Animal::new(raw.traits, raw.variant)
    }
}
