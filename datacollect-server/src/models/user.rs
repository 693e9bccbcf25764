//! User entity

use serde::{Deserialize, Serialize};

use super::EntityId;

/// Stored user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
}

/// Create user request
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
}
