//! User domain
//!
//! Storage-facing record, API-facing view with the mapping between the
//! two, the repository trait, and boundary validation.

mod entity;
mod model;
mod repository;
mod validation;

pub use entity::UserEntity;
pub use model::User;
pub use repository::UserRepository;
pub use validation::{validate_email, validate_user, UserValidationError};

#[cfg(test)]
pub use repository::MockUserRepository;
