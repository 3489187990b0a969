/// Domain module containing the animal model
///
/// This module defines the core entity (Animal), its closed set of kinds and
/// the validation rules that every record satisfies once constructed.

pub mod animal;
pub mod types;

// Re-export public types for easy access
pub use animal::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid animal name: {0}")]
    InvalidName(String),

    #[error("Weight must be a non-negative number, got {0}")]
    InvalidWeight(f64),

    #[error("Wingspan must be a non-negative number, got {0}")]
    InvalidWingspan(f64),

    #[error("Unknown animal type: '{0}'")]
    UnknownKind(String),

    #[error("Expected 'yes' or 'no', got '{0}'")]
    InvalidAnswer(String),
}
