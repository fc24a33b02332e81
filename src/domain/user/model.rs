//! API-facing user representation

use serde::{Deserialize, Serialize};

use super::entity::UserEntity;

/// User as it appears on the wire.
///
/// Carries the same fields as [`UserEntity`], but the password is
/// write-only: it is accepted on input and never serialized on output.
/// Suppression happens here at the serialization boundary, not in the
/// entity mapping, which copies every field in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password: entity.password,
        }
    }
}

impl From<User> for UserEntity {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password: user.password,
        }
    }
}
