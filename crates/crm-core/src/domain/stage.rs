//! Column (Stage) Entity
//!
//! A named phase of the sales pipeline. Columns are fixed configuration,
//! never persisted; leads reference them nominally through `title`.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: u32,
    /// Display name and join key against `Lead::column`
    pub title: String,
    /// Ascending left-to-right display order
    pub order: i32,
    /// Display accent, non-functional
    pub color: String,
}

impl Entity for Column {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
