//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.
//! Field limits mirror the column sizes declared by the schema migrations.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum username length
pub const MAX_USERNAME_LENGTH: usize = 150;

/// Maximum first/last name length
pub const MAX_NAME_LENGTH: usize = 30;

/// Maximum employee id-number length
pub const MAX_ID_NUMBER_LENGTH: usize = 20;

/// Maximum position/department length
pub const MAX_POSITION_LENGTH: usize = 100;

// =============================================================================
// Field names
// =============================================================================

/// Field name used in validation errors for the username
pub const FIELD_USERNAME: &str = "username";

/// Field name used in validation errors for the employee id-number
pub const FIELD_ID_NUMBER: &str = "id_number";

// =============================================================================
// Messages
// =============================================================================

/// Returned when a username is already taken
pub const MSG_USERNAME_EXISTS: &str = "Username already exists.";

/// Returned when an id-number is already taken
pub const MSG_ID_NUMBER_EXISTS: &str = "ID number already exists.";

/// Returned by the JSON adapter after a successful delete
pub const MSG_EMPLOYEE_DELETED: &str = "Employee deleted successfully";

/// Returned when a required field is missing from a request body
pub const MSG_FIELD_REQUIRED: &str = "This field is required.";
