//! User infrastructure
//!
//! The service that drives the CRUD workflow, Argon2 password hashing,
//! and the repository implementations (in-memory and PostgreSQL).

mod password;
mod postgres_repository;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::UserService;
