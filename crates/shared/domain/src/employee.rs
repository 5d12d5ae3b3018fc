//! Employee domain entity and request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::user::{User, UserResponse};

/// Employee domain entity with its linked user
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: Uuid,
    pub id_number: String,
    pub position: String,
    pub department: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// ID of the linked user record
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} in {}",
            self.user.username, self.position, self.department
        )
    }
}

/// Employee creation data transfer object
///
/// String fields other than the password are trimmed on deserialization.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateEmployee {
    /// Given name
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 30, message = "First name is required (max 30 characters)"))]
    #[cfg_attr(feature = "openapi", schema(example = "Jane", max_length = 30))]
    pub first_name: String,
    /// Family name
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 30, message = "Last name is required (max 30 characters)"))]
    #[cfg_attr(feature = "openapi", schema(example = "Doe", max_length = 30))]
    pub last_name: String,
    /// Unique login name
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 150, message = "Username is required (max 150 characters)"))]
    #[cfg_attr(feature = "openapi", schema(example = "jdoe", max_length = 150))]
    pub username: String,
    /// Plain-text password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "secret123", min_length = 8))]
    pub password: String,
    /// Unique employee number
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 20, message = "ID number is required (max 20 characters)"))]
    #[cfg_attr(feature = "openapi", schema(example = "ID001", max_length = 20))]
    pub id_number: String,
    /// Job title
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Position is required (max 100 characters)"))]
    #[cfg_attr(feature = "openapi", schema(example = "Engineer", max_length = 100))]
    pub position: String,
    /// Organisational unit
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Department is required (max 100 characters)"))]
    #[cfg_attr(feature = "openapi", schema(example = "R&D", max_length = 100))]
    pub department: String,
}

impl CreateEmployee {
    /// Trim every field except the password.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password,
            id_number: self.id_number.trim().to_string(),
            position: self.position.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }
}

/// Partial employee update.
///
/// `None` means "leave unchanged". Blank strings are read as `None`, so a
/// field can never be cleared through an update. Other values are trimmed on
/// deserialization, except the password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateEmployee {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 30, message = "First name must be at most 30 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 30, message = "Last name must be at most 30 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 150, message = "Username must be at most 150 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "jdoe"))]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "blank_secret_as_none")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "newsecret123", min_length = 8))]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 20, message = "ID number must be at most 20 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "ID002"))]
    pub id_number: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 100, message = "Position must be at most 100 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Senior Engineer"))]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 100, message = "Department must be at most 100 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Engineering"))]
    pub department: Option<String>,
}

impl UpdateEmployee {
    /// Drop blank values and trim the rest (the password is kept verbatim).
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.and_then(non_blank),
            last_name: self.last_name.and_then(non_blank),
            username: self.username.and_then(non_blank),
            password: self.password.filter(|p| !p.trim().is_empty()),
            id_number: self.id_number.and_then(non_blank),
            position: self.position.and_then(non_blank),
            department: self.department.and_then(non_blank),
        }
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.id_number.is_none()
            && self.position.is_none()
            && self.department.is_none()
    }
}

/// Identity-side changes routed to the user record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<String>,
}

/// Employment-side changes routed to the employee record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub id_number: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
}

/// Employee response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployeeResponse {
    /// Unique employee identifier
    pub id: Uuid,
    /// Unique employee number
    #[cfg_attr(feature = "openapi", schema(example = "ID001"))]
    pub id_number: String,
    /// Job title
    #[cfg_attr(feature = "openapi", schema(example = "Engineer"))]
    pub position: String,
    /// Organisational unit
    #[cfg_attr(feature = "openapi", schema(example = "R&D"))]
    pub department: String,
    /// Linked user account
    pub user: UserResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            id_number: employee.id_number,
            position: employee.position,
            department: employee.department,
            user: UserResponse::from(employee.user),
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| s.trim().to_string())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_blank))
}

fn blank_secret_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_absent_and_blank_fields_are_none() {
        let update: UpdateEmployee = serde_json::from_str(
            r#"{"department": "Engineering", "username": "", "position": "   ", "password": null}"#,
        )
        .unwrap();

        assert_eq!(update.department.as_deref(), Some("Engineering"));
        assert!(update.username.is_none());
        assert!(update.position.is_none());
        assert!(update.password.is_none());
        assert!(update.first_name.is_none());
    }

    #[test]
    fn test_update_padded_values_are_trimmed_before_validation() {
        let padded = format!("{}jdoe2", " ".repeat(150));
        let update: UpdateEmployee = serde_json::from_value(serde_json::json!({
            "username": padded,
            "password": " secret123 ",
        }))
        .unwrap();

        assert_eq!(update.username.as_deref(), Some("jdoe2"));
        assert_eq!(update.password.as_deref(), Some(" secret123 "));
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_update_normalized_trims_and_drops_blank() {
        let update = UpdateEmployee {
            first_name: Some("  Jane ".to_string()),
            username: Some(" ".to_string()),
            password: Some(" secret123 ".to_string()),
            ..Default::default()
        }
        .normalized();

        assert_eq!(update.first_name.as_deref(), Some("Jane"));
        assert!(update.username.is_none());
        assert_eq!(update.password.as_deref(), Some(" secret123 "));
    }

    #[test]
    fn test_update_is_empty() {
        assert!(UpdateEmployee::default().is_empty());
        let update = UpdateEmployee {
            position: Some("Lead".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_validation_only_checks_present_fields() {
        assert!(UpdateEmployee::default().validate().is_ok());

        let update = UpdateEmployee {
            password: Some("short".to_string()),
            ..Default::default()
        };
        let errors = update.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_create_trims_and_validates() {
        let create: CreateEmployee = serde_json::from_str(
            r#"{"first_name": " Jane ", "last_name": "Doe", "username": " jdoe ",
                "password": "secret123", "id_number": "ID001",
                "position": "Engineer", "department": "R&D"}"#,
        )
        .unwrap();

        assert_eq!(create.first_name, "Jane");
        assert_eq!(create.username, "jdoe");
        assert!(create.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_blank_and_short_password() {
        let create = CreateEmployee {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            username: "   ".to_string(),
            password: "short".to_string(),
            id_number: "ID001".to_string(),
            position: "Engineer".to_string(),
            department: "R&D".to_string(),
        }
        .normalized();

        let errors = create.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("first_name"));
    }

    #[test]
    fn test_create_rejects_overlong_id_number() {
        let create = CreateEmployee {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            username: "jdoe".to_string(),
            password: "secret123".to_string(),
            id_number: "X".repeat(21),
            position: "Engineer".to_string(),
            department: "R&D".to_string(),
        };

        let errors = create.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("id_number"));
    }
}
