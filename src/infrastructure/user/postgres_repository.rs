//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::user::{UserEntity, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of [`UserRepository`]
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the users table when it does not exist yet
    pub async fn migrate(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL,
                password TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create users table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, DomainError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, email, password FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        Ok(row.map(|row| row_to_entity(&row)))
    }

    async fn save(&self, entity: UserEntity) -> Result<UserEntity, DomainError> {
        match entity.id {
            None => {
                let id: i64 = sqlx::query_scalar(
                    r#"
                    INSERT INTO users (first_name, last_name, email, password)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&entity.first_name)
                .bind(&entity.last_name)
                .bind(&entity.email)
                .bind(&entity.password)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to create user: {}", e)))?;

                Ok(UserEntity {
                    id: Some(id),
                    ..entity
                })
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO users (id, first_name, last_name, email, password)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id) DO UPDATE
                    SET first_name = EXCLUDED.first_name,
                        last_name = EXCLUDED.last_name,
                        email = EXCLUDED.email,
                        password = EXCLUDED.password
                    "#,
                )
                .bind(id)
                .bind(&entity.first_name)
                .bind(&entity.last_name)
                .bind(&entity.email)
                .bind(&entity.password)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to update user: {}", e)))?;

                Ok(entity)
            }
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> Result<Vec<UserEntity>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, email, password FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        Ok(rows.iter().map(row_to_entity).collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check user existence: {}", e)))
    }
}

fn row_to_entity(row: &sqlx::postgres::PgRow) -> UserEntity {
    UserEntity {
        id: Some(row.get("id")),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        password: row.get("password"),
    }
}
