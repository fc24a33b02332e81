//! User repository trait

use async_trait::async_trait;

use super::entity::UserEntity;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for user persistence.
///
/// `save` is an upsert: a record without an identifier is inserted and
/// gets one assigned, a record with an identifier replaces the stored
/// record under that key.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Point lookup by identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, DomainError>;

    /// Persist a record, assigning an identifier when unset
    async fn save(&self, entity: UserEntity) -> Result<UserEntity, DomainError>;

    /// Delete by identifier, reporting whether a record was removed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Full scan of every stored record
    async fn find_all(&self) -> Result<Vec<UserEntity>, DomainError>;

    /// Check whether a record exists for the identifier
    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
