//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{UserEntity, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of [`UserRepository`].
///
/// Identifiers are assigned from a monotonically increasing sequence,
/// starting at 1. Used by tests and when no database is configured.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, UserEntity>>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, mut entity: UserEntity) -> Result<UserEntity, DomainError> {
        let mut users = self.users.write().await;

        let id = match entity.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                entity.id = Some(id);
                id
            }
        };

        users.insert(id, entity.clone());

        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn find_all(&self) -> Result<Vec<UserEntity>, DomainError> {
        let users = self.users.read().await;

        let mut entities: Vec<UserEntity> = users.values().cloned().collect();
        entities.sort_by_key(|entity| entity.id);

        Ok(entities)
    }
}
