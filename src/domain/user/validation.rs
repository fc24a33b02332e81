//! Input validation for the API boundary
//!
//! Validation runs on the API-facing payload before the service is
//! invoked; the service itself never re-checks these constraints.

use thiserror::Error;

use super::model::User;

/// Errors that can occur during user input validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("firstName is required")]
    MissingFirstName,

    #[error("lastName is required")]
    MissingLastName,

    #[error("email is required")]
    MissingEmail,

    #[error("email must be a valid email address")]
    InvalidEmail,

    #[error("password is required")]
    MissingPassword,
}

/// Validate a user payload
///
/// Rules:
/// - firstName, lastName, email and password must not be blank
/// - email must be syntactically valid
pub fn validate_user(user: &User) -> Result<(), UserValidationError> {
    if user.first_name.trim().is_empty() {
        return Err(UserValidationError::MissingFirstName);
    }

    if user.last_name.trim().is_empty() {
        return Err(UserValidationError::MissingLastName);
    }

    validate_email(&user.email)?;

    if user.password.trim().is_empty() {
        return Err(UserValidationError::MissingPassword);
    }

    Ok(())
}

/// Validate an email address
///
/// Rules:
/// - Cannot be blank
/// - Exactly one '@' with a non-empty local part and domain
/// - No whitespace
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.trim().is_empty() {
        return Err(UserValidationError::MissingEmail);
    }

    if email.chars().any(char::is_whitespace) {
        return Err(UserValidationError::InvalidEmail);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(UserValidationError::InvalidEmail);
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> User {
        User {
            id: None,
            first_name: "Nikko".to_string(),
            last_name: "Dasig".to_string(),
            email: "nikkodasig@gmail.com".to_string(),
            password: "password".to_string(),
        }
    }

    #[test]
    fn test_valid_user() {
        assert!(validate_user(&valid_user()).is_ok());
    }

    #[test]
    fn test_blank_first_name() {
        let mut user = valid_user();
        user.first_name = "  ".to_string();

        assert_eq!(
            validate_user(&user),
            Err(UserValidationError::MissingFirstName)
        );
    }

    #[test]
    fn test_blank_last_name() {
        let mut user = valid_user();
        user.last_name = String::new();

        assert_eq!(
            validate_user(&user),
            Err(UserValidationError::MissingLastName)
        );
    }

    #[test]
    fn test_blank_password() {
        let mut user = valid_user();
        user.password = String::new();

        assert_eq!(
            validate_user(&user),
            Err(UserValidationError::MissingPassword)
        );
    }

    #[test]
    fn test_blank_email() {
        assert_eq!(validate_email(""), Err(UserValidationError::MissingEmail));
        assert_eq!(validate_email("  "), Err(UserValidationError::MissingEmail));
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("nikkodasig@gmail.com").is_ok());
        assert!(validate_email("a@b").is_ok());
        assert!(validate_email("first.last@example.co").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(
            validate_email("no-at-sign"),
            Err(UserValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("@example.com"),
            Err(UserValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("user@"),
            Err(UserValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("two@@example.com"),
            Err(UserValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("spaced user@example.com"),
            Err(UserValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_validation_error_messages_match_wire_field_names() {
        assert_eq!(
            UserValidationError::MissingFirstName.to_string(),
            "firstName is required"
        );
        assert_eq!(
            UserValidationError::MissingPassword.to_string(),
            "password is required"
        );
    }
}
