/// Core types and enums used throughout the domain layer
///
/// This module defines the closed set of animal kinds and the yes/no answer
/// type used by the boolean variant attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::domain::DomainError;

/// The closed set of animal categories
///
/// Every animal is exactly one of these. The numeric selector is the one the
/// menu uses ("1" for Mammal through "5" for Amphibian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalKind {
    Mammal,
    Bird,
    Fish,
    Reptile,
    Amphibian,
}

impl AnimalKind {
    /// All kinds in menu order
    pub const ALL: [AnimalKind; 5] = [
        AnimalKind::Mammal,
        AnimalKind::Bird,
        AnimalKind::Fish,
        AnimalKind::Reptile,
        AnimalKind::Amphibian,
    ];

    /// Get the display name for this kind
    pub fn type_name(&self) -> &'static str {
        match self {
            AnimalKind::Mammal => "Mammal",
            AnimalKind::Bird => "Bird",
            AnimalKind::Fish => "Fish",
            AnimalKind::Reptile => "Reptile",
            AnimalKind::Amphibian => "Amphibian",
        }
    }

    /// Menu selector for this kind
    pub fn selector(&self) -> u8 {
        match self {
            AnimalKind::Mammal => 1,
            AnimalKind::Bird => 2,
            AnimalKind::Fish => 3,
            AnimalKind::Reptile => 4,
            AnimalKind::Amphibian => 5,
        }
    }

    /// Resolve a menu selector ("1".."5") to a kind
    ///
    /// Surrounding whitespace is ignored; anything else is an unknown kind.
    pub fn from_selector(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|kind| trimmed == kind.selector().to_string())
            .ok_or_else(|| DomainError::UnknownKind(trimmed.to_string()))
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// How a "no" answer is interpreted
///
/// `Legacy` reproduces the behaviour of the program this registry replaces,
/// where both "yes" and "no" were read back as `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    #[default]
    Strict,
    Legacy,
}

/// A parsed yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Convert to a boolean under the given answer mode
    pub fn to_bool(self, mode: AnswerMode) -> bool {
        match (self, mode) {
            (YesNo::Yes, _) => true,
            (YesNo::No, AnswerMode::Strict) => false,
            (YesNo::No, AnswerMode::Legacy) => true,
        }
    }

    /// Render a boolean the way descriptions show it
    pub fn label(value: bool) -> &'static str {
        if value { "yes" } else { "no" }
    }
}

impl FromStr for YesNo {
    type Err = DomainError;

    /// Accepts "yes" or "no", case-insensitive, after trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(YesNo::Yes),
            "no" => Ok(YesNo::No),
            other => Err(DomainError::InvalidAnswer(other.to_string())),
        }
    }
}
