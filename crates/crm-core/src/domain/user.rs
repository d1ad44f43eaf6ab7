//! User Entity
//!
//! Public identity of a signed-in user. Passwords live only in the
//! bundled mock user table, never in this record or in storage.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "Id")]
    pub id: u32,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl Entity for User {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
