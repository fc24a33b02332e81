//! User management REST API
//!
//! CRUD over a single user resource behind `/api/users`, backed by a
//! repository abstraction with in-memory and PostgreSQL implementations.
//! Credentials are hashed with Argon2 on create and never serialized on
//! output.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::user::{Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, UserService};

/// Create the application state from configuration.
///
/// Uses PostgreSQL when a database URL is configured (or the
/// `DATABASE_URL` environment variable is set), the in-memory repository
/// otherwise.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Arc::new(Argon2Hasher::new());

    let database_url = config
        .database
        .url
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok());

    let user_service: Arc<dyn api::state::UserServiceTrait> = match database_url {
        Some(url) => {
            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;

            let repository = PostgresUserRepository::new(pool);
            repository.migrate().await?;
            info!("Using PostgreSQL user repository");

            Arc::new(UserService::new(Arc::new(repository), hasher))
        }
        None => {
            info!("No database configured, using in-memory user repository");
            Arc::new(UserService::new(
                Arc::new(InMemoryUserRepository::new()),
                hasher,
            ))
        }
    };

    Ok(AppState::new(user_service, config.actuator.health_url.clone()))
}
