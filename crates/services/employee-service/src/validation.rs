//! Employee input validation.
//!
//! Format rules come from the `validator` derives on the request types.
//! Uniqueness of usernames and id-numbers is checked against the store here;
//! the unique constraints still back this up at write time.

use std::sync::Arc;

use tracing::warn;
use validator::Validate;

use common::AppResult;
use domain::{
    CreateEmployee, Employee, FieldErrors, UpdateEmployee, FIELD_ID_NUMBER, FIELD_USERNAME,
    MSG_ID_NUMBER_EXISTS, MSG_USERNAME_EXISTS,
};

use crate::repository::{EmployeeRepository, UserRepository};

/// Validates employee create and update payloads.
pub struct EmployeeValidator {
    users: Arc<dyn UserRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl EmployeeValidator {
    pub fn new(users: Arc<dyn UserRepository>, employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { users, employees }
    }

    /// Check a full creation payload. Every failing field is reported.
    pub async fn validate_create(&self, input: &CreateEmployee) -> AppResult<()> {
        let mut errors = format_errors(input.validate());

        if !errors.contains(FIELD_USERNAME)
            && self.users.username_taken(&input.username, None).await?
        {
            errors.add(FIELD_USERNAME, MSG_USERNAME_EXISTS);
        }

        if !errors.contains(FIELD_ID_NUMBER)
            && self.employees.id_number_taken(&input.id_number, None).await?
        {
            errors.add(FIELD_ID_NUMBER, MSG_ID_NUMBER_EXISTS);
        }

        finish("create", errors)
    }

    /// Check a partial update of `current`.
    ///
    /// Absent fields are not validated. A username or id-number equal to the
    /// employee's own current value is never a conflict.
    pub async fn validate_update(
        &self,
        current: &Employee,
        changes: &UpdateEmployee,
    ) -> AppResult<()> {
        let mut errors = format_errors(changes.validate());

        if let Some(username) = changes.username.as_deref() {
            if !errors.contains(FIELD_USERNAME)
                && username != current.user.username
                && self
                    .users
                    .username_taken(username, Some(current.user_id()))
                    .await?
            {
                errors.add(FIELD_USERNAME, MSG_USERNAME_EXISTS);
            }
        }

        if let Some(id_number) = changes.id_number.as_deref() {
            if !errors.contains(FIELD_ID_NUMBER)
                && id_number != current.id_number
                && self
                    .employees
                    .id_number_taken(id_number, Some(current.id))
                    .await?
            {
                errors.add(FIELD_ID_NUMBER, MSG_ID_NUMBER_EXISTS);
            }
        }

        finish("update", errors)
    }
}

fn format_errors(result: Result<(), validator::ValidationErrors>) -> FieldErrors {
    match result {
        Ok(()) => FieldErrors::new(),
        Err(e) => FieldErrors::from(e),
    }
}

fn finish(operation: &str, errors: FieldErrors) -> AppResult<()> {
    if !errors.is_empty() {
        warn!(operation, errors = %errors, "Employee payload rejected");
    }
    errors.into_result().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use common::AppError;
    use domain::User;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use crate::repository::{MockEmployeeRepository, MockUserRepository};

    fn create_input() -> CreateEmployee {
        CreateEmployee {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            username: "jdoe".to_string(),
            password: "secret123".to_string(),
            id_number: "ID001".to_string(),
            position: "Engineer".to_string(),
            department: "R&D".to_string(),
        }
    }

    fn existing_employee() -> Employee {
        let now = Utc::now();
        Employee {
            id: Uuid::new_v4(),
            id_number: "ID001".to_string(),
            position: "Engineer".to_string(),
            department: "R&D".to_string(),
            user: User {
                id: Uuid::new_v4(),
                username: "jdoe".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                password_hash: "hashed".to_string(),
                created_at: now,
                updated_at: now,
            },
            created_at: now,
            updated_at: now,
        }
    }

    fn build_validator(users: MockUserRepository, employees: MockEmployeeRepository) -> EmployeeValidator {
        EmployeeValidator::new(Arc::new(users), Arc::new(employees))
    }

    fn field_errors(result: AppResult<()>) -> FieldErrors {
        match result {
            Err(AppError::InvalidFields(fields)) => fields,
            other => panic!("expected field errors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_validate_create_accepts_fresh_values() {
        let mut users = MockUserRepository::new();
        users
            .expect_username_taken()
            .with(eq("jdoe"), eq(None::<Uuid>))
            .returning(|_, _| Ok(false));
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_id_number_taken()
            .with(eq("ID001"), eq(None::<Uuid>))
            .returning(|_, _| Ok(false));

        let result = build_validator(users, employees)
            .validate_create(&create_input())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_validate_create_reports_both_duplicates() {
        let mut users = MockUserRepository::new();
        users.expect_username_taken().returning(|_, _| Ok(true));
        let mut employees = MockEmployeeRepository::new();
        employees.expect_id_number_taken().returning(|_, _| Ok(true));

        let errors = field_errors(
            build_validator(users, employees)
                .validate_create(&create_input())
                .await,
        );
        assert_eq!(errors.get("username").unwrap(), ["Username already exists."]);
        assert_eq!(errors.get("id_number").unwrap(), ["ID number already exists."]);
    }

    #[tokio::test]
    async fn test_validate_create_skips_lookup_for_malformed_fields() {
        let mut input = create_input();
        input.username = "u".repeat(151);
        input.id_number = String::new();
        input.password = "short".to_string();

        let mut users = MockUserRepository::new();
        users.expect_username_taken().never();
        let mut employees = MockEmployeeRepository::new();
        employees.expect_id_number_taken().never();

        let errors = field_errors(build_validator(users, employees).validate_create(&input).await);
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["id_number", "password", "username"]);
    }

    #[tokio::test]
    async fn test_validate_update_ignores_own_values() {
        let current = existing_employee();
        let changes = UpdateEmployee {
            username: Some("jdoe".to_string()),
            id_number: Some("ID001".to_string()),
            position: Some("Lead".to_string()),
            ..Default::default()
        };

        let mut users = MockUserRepository::new();
        users.expect_username_taken().never();
        let mut employees = MockEmployeeRepository::new();
        employees.expect_id_number_taken().never();

        let result = build_validator(users, employees)
            .validate_update(&current, &changes)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_validate_update_rejects_taken_username() {
        let current = existing_employee();
        let user_id = current.user_id();
        let changes = UpdateEmployee {
            username: Some("asmith".to_string()),
            ..Default::default()
        };

        let mut users = MockUserRepository::new();
        users
            .expect_username_taken()
            .with(eq("asmith"), eq(Some(user_id)))
            .returning(|_, _| Ok(true));
        let mut employees = MockEmployeeRepository::new();
        employees.expect_id_number_taken().never();

        let errors = field_errors(
            build_validator(users, employees)
                .validate_update(&current, &changes)
                .await,
        );
        assert!(errors.contains("username"));
        assert!(!errors.contains("id_number"));
    }

    #[tokio::test]
    async fn test_validate_update_rejects_short_password() {
        let changes = UpdateEmployee {
            password: Some("short".to_string()),
            ..Default::default()
        };

        let errors = field_errors(
            build_validator(MockUserRepository::new(), MockEmployeeRepository::new())
                .validate_update(&existing_employee(), &changes)
                .await,
        );
        assert_eq!(
            errors.get("password").unwrap(),
            ["Password must be at least 8 characters"]
        );
    }
}
