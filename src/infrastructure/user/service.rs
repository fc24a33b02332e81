//! User service: CRUD workflow over the repository

use std::sync::Arc;

use crate::domain::user::{User, UserEntity, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Orchestrates the five CRUD operations against the repository,
/// enforcing the must-exist precondition for read, update and delete and
/// hashing the credential on create.
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new user
    ///
    /// The identifier on the input is ignored; the repository assigns one
    /// at save time. The credential is hashed exactly once, on the
    /// plaintext from the input.
    pub async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut entity = UserEntity::from(user);
        entity.id = None;
        entity.password = self.hasher.hash(&entity.password)?;

        let saved = self.repository.save(entity).await?;

        Ok(User::from(saved))
    }

    /// Get a user by identifier
    pub async fn get(&self, id: i64) -> Result<User, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(User::from)
            .ok_or(DomainError::NotFound { id })
    }

    /// Update an existing user
    ///
    /// Looks up the record for the input's identifier, overwrites all
    /// four mutable fields with the input's values and persists the
    /// result. The credential is written through verbatim, without
    /// hashing; create is the only path that hashes. Lookup and save are
    /// two separate steps with no atomicity guarantee.
    pub async fn update(&self, user: User) -> Result<User, DomainError> {
        let entity = UserEntity::from(user);
        let id = entity
            .id
            .ok_or_else(|| DomainError::validation("id is required for update"))?;

        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })?;

        existing.first_name = entity.first_name;
        existing.last_name = entity.last_name;
        existing.email = entity.email;
        existing.password = entity.password;

        let saved = self.repository.save(existing).await?;

        Ok(User::from(saved))
    }

    /// Delete a user by identifier
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repository.exists(id).await? {
            return Err(DomainError::NotFound { id });
        }

        self.repository.delete(id).await?;

        Ok(())
    }

    /// List every user, in the order the repository yields them
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        let entities = self.repository.find_all().await?;

        Ok(entities.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;
    use crate::infrastructure::user::password::MockPasswordHasher;
    use crate::infrastructure::user::{Argon2Hasher, InMemoryUserRepository};
    use mockall::predicate::eq;

    const FIRST_NAME: &str = "Nikko";
    const LAST_NAME: &str = "Dasig";
    const EMAIL: &str = "nikkodasig@gmail.com";
    const PASSWORD: &str = "password";

    fn user_stub(id: Option<i64>) -> User {
        User {
            id,
            first_name: FIRST_NAME.to_string(),
            last_name: LAST_NAME.to_string(),
            email: EMAIL.to_string(),
            password: PASSWORD.to_string(),
        }
    }

    fn entity_stub(id: i64, password: &str) -> UserEntity {
        UserEntity {
            id: Some(id),
            first_name: FIRST_NAME.to_string(),
            last_name: LAST_NAME.to_string(),
            email: EMAIL.to_string(),
            password: password.to_string(),
        }
    }

    fn service(
        repository: MockUserRepository,
        hasher: MockPasswordHasher,
    ) -> UserService<MockUserRepository, MockPasswordHasher> {
        UserService::new(Arc::new(repository), Arc::new(hasher))
    }

    #[tokio::test]
    async fn test_create_hashes_once_and_saves_once() {
        let mut repository = MockUserRepository::new();
        let mut hasher = MockPasswordHasher::new();

        hasher
            .expect_hash()
            .once()
            .with(eq(PASSWORD))
            .returning(|_| Ok("encoded-password".to_string()));

        repository
            .expect_save()
            .once()
            .withf(|entity| entity.id.is_none() && entity.password == "encoded-password")
            .returning(|entity| {
                Ok(UserEntity {
                    id: Some(1),
                    ..entity
                })
            });

        let created = service(repository, hasher)
            .create(user_stub(None))
            .await
            .unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.first_name, FIRST_NAME);
        assert_eq!(created.last_name, LAST_NAME);
        assert_eq!(created.email, EMAIL);
        assert_eq!(created.password, "encoded-password");
    }

    #[tokio::test]
    async fn test_create_ignores_client_supplied_id() {
        let mut repository = MockUserRepository::new();
        let mut hasher = MockPasswordHasher::new();

        hasher
            .expect_hash()
            .returning(|_| Ok("encoded-password".to_string()));

        repository
            .expect_save()
            .once()
            .withf(|entity| entity.id.is_none())
            .returning(|entity| {
                Ok(UserEntity {
                    id: Some(42),
                    ..entity
                })
            });

        let created = service(repository, hasher)
            .create(user_stub(Some(99)))
            .await
            .unwrap();

        assert_eq!(created.id, Some(42));
    }

    #[tokio::test]
    async fn test_get_returns_translated_record() {
        let mut repository = MockUserRepository::new();

        repository
            .expect_find_by_id()
            .once()
            .with(eq(1))
            .returning(|_| Ok(Some(entity_stub(1, "stored-hash"))));

        let found = service(repository, MockPasswordHasher::new())
            .get(1)
            .await
            .unwrap();

        assert_eq!(found, User::from(entity_stub(1, "stored-hash")));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repository = MockUserRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(123))
            .returning(|_| Ok(None));
        repository.expect_save().never();
        repository.expect_delete().never();

        let err = service(repository, MockPasswordHasher::new())
            .get(123)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Resource not found with ID: 123");
    }

    #[tokio::test]
    async fn test_update_overwrites_all_mutable_fields() {
        let mut repository = MockUserRepository::new();
        let mut hasher = MockPasswordHasher::new();

        let stored = UserEntity {
            id: Some(1),
            first_name: "Old".to_string(),
            last_name: "Name".to_string(),
            email: "old@example.com".to_string(),
            password: "stored-hash".to_string(),
        };

        repository
            .expect_find_by_id()
            .once()
            .with(eq(1))
            .returning(move |_| Ok(Some(stored.clone())));

        // The credential from the input is written through verbatim.
        repository
            .expect_save()
            .once()
            .withf(|entity| {
                entity.id == Some(1)
                    && entity.first_name == FIRST_NAME
                    && entity.last_name == LAST_NAME
                    && entity.email == EMAIL
                    && entity.password == PASSWORD
            })
            .returning(Ok);

        hasher.expect_hash().never();

        let updated = service(repository, hasher)
            .update(user_stub(Some(1)))
            .await
            .unwrap();

        assert_eq!(updated.email, EMAIL);
        assert_eq!(updated.password, PASSWORD);
    }

    #[tokio::test]
    async fn test_update_not_found_never_saves() {
        let mut repository = MockUserRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(123))
            .returning(|_| Ok(None));
        repository.expect_save().never();

        let err = service(repository, MockPasswordHasher::new())
            .update(user_stub(Some(123)))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Resource not found with ID: 123");
    }

    #[tokio::test]
    async fn test_update_without_id_is_rejected() {
        let repository = MockUserRepository::new();

        let err = service(repository, MockPasswordHasher::new())
            .update(user_stub(None))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_checks_existence_first() {
        let mut repository = MockUserRepository::new();

        repository
            .expect_exists()
            .once()
            .with(eq(1))
            .returning(|_| Ok(true));
        repository
            .expect_delete()
            .once()
            .with(eq(1))
            .returning(|_| Ok(true));

        service(repository, MockPasswordHasher::new())
            .delete(1)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_not_found_never_deletes() {
        let mut repository = MockUserRepository::new();

        repository
            .expect_exists()
            .with(eq(123))
            .returning(|_| Ok(false));
        repository.expect_delete().never();

        let err = service(repository, MockPasswordHasher::new())
            .delete(123)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Resource not found with ID: 123");
    }

    #[tokio::test]
    async fn test_list_translates_every_record() {
        let mut repository = MockUserRepository::new();

        repository.expect_find_all().once().returning(|| {
            Ok(vec![entity_stub(1, "hash-1"), entity_stub(2, "hash-2")])
        });

        let users = service(repository, MockPasswordHasher::new())
            .list()
            .await
            .unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, Some(1));
        assert_eq!(users[1].id, Some(2));
    }

    #[tokio::test]
    async fn test_repository_failures_propagate_unchanged() {
        let mut repository = MockUserRepository::new();

        repository
            .expect_find_by_id()
            .returning(|_| Err(DomainError::storage("connection refused")));

        let err = service(repository, MockPasswordHasher::new())
            .get(1)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Storage { .. }));
    }

    // End-to-end against the in-memory repository and the real hasher.

    fn in_memory_service() -> UserService<InMemoryUserRepository, Argon2Hasher> {
        UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2Hasher::new()),
        )
    }

    #[tokio::test]
    async fn test_create_stores_hashed_credential() {
        let service = in_memory_service();

        let created = service.create(user_stub(None)).await.unwrap();
        let id = created.id.unwrap();

        let stored = service.get(id).await.unwrap();
        assert_ne!(stored.password, PASSWORD);
        assert!(stored.password.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let service = in_memory_service();

        let created = service.create(user_stub(None)).await.unwrap();
        let id = created.id.unwrap();

        let mut change = user_stub(Some(id));
        change.email = "ndasig@gmail.com".to_string();

        let first = service.update(change.clone()).await.unwrap();
        let second = service.update(change).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.email, "ndasig@gmail.com");
    }

    #[tokio::test]
    async fn test_delete_then_get_reports_not_found() {
        let service = in_memory_service();

        let created = service.create(user_stub(None)).await.unwrap();
        let id = created.id.unwrap();

        service.delete(id).await.unwrap();

        let err = service.get(id).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Resource not found with ID: {}", id)
        );
    }

    #[tokio::test]
    async fn test_list_reflects_repository_contents() {
        let service = in_memory_service();

        assert!(service.list().await.unwrap().is_empty());

        service.create(user_stub(None)).await.unwrap();
        service.create(user_stub(None)).await.unwrap();

        assert_eq!(service.list().await.unwrap().len(), 2);
    }
}
