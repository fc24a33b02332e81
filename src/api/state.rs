//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::{PasswordHasher, UserService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub http_client: reqwest::Client,
    pub actuator_health_url: String,
}

/// Object-safe facade over [`UserService`] so the state can hold the
/// service behind dynamic dispatch.
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, user: User) -> Result<User, DomainError>;
    async fn get(&self, id: i64) -> Result<User, DomainError>;
    async fn update(&self, user: User) -> Result<User, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn create(&self, user: User) -> Result<User, DomainError> {
        UserService::create(self, user).await
    }

    async fn get(&self, id: i64) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        UserService::update(self, user).await
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        actuator_health_url: impl Into<String>,
    ) -> Self {
        Self {
            user_service,
            http_client: reqwest::Client::new(),
            actuator_health_url: actuator_health_url.into(),
        }
    }
}
