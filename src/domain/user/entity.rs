//! Storage-facing user record

/// User record as persisted by the repository.
///
/// The identifier is assigned by the repository on first save and never
/// changes afterwards. The password field holds the hashed credential once
/// a record has gone through the create path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl UserEntity {
    /// Create a record with the identifier unset
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_has_no_id() {
        let entity = UserEntity::new("Nikko", "Dasig", "nikkodasig@gmail.com", "password");

        assert!(entity.id.is_none());
        assert_eq!(entity.first_name, "Nikko");
        assert_eq!(entity.last_name, "Dasig");
        assert_eq!(entity.email, "nikkodasig@gmail.com");
        assert_eq!(entity.password, "password");
    }
}
