//! User domain entity and related types.
//!
//! A user is the identity half of an employee: login name, display name and
//! credentials. Users are only created, changed and removed through their
//! employee record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::password::Password;

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// "First Last", trimmed when one side is blank.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Check a plain-text password against the stored hash.
    pub fn check_password(&self, plain_text: &str) -> bool {
        Password::from_hash(self.password_hash.as_str()).verify(plain_text)
    }
}

/// Identity fields embedded in employee responses (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Given name
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: String,
    /// Family name
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: String,
    /// Unique login name
    #[cfg_attr(feature = "openapi", schema(example = "jdoe"))]
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "jdoe".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password_hash: "hashed".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name() {
        let mut user = user();
        assert_eq!(user.full_name(), "Jane Doe");

        user.last_name.clear();
        assert_eq!(user.full_name(), "Jane");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_value(user()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "jdoe");
    }

    #[test]
    fn test_check_password_against_bad_hash() {
        assert!(!user().check_password("hashed"));
    }
}
