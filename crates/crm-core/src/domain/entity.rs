//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type CrmResult<T> = Result<T, CrmError>;

/// Domain-level errors
///
/// `Conflict` is reserved for a versioned-update extension and is not
/// produced by the current last-write-wins stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CrmError {
    NotFound(String),
    Validation(String),
    Storage(String),
    Conflict(String),
}

impl std::fmt::Display for CrmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrmError::NotFound(msg) => write!(f, "Not found: {}", msg),
            CrmError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            CrmError::Storage(msg) => write!(f, "Storage error: {}", msg),
            CrmError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for CrmError {}
