//! Employee service - Handles employee onboarding use cases.
//!
//! Orchestrates validation, password hashing and the two-record writes via
//! Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    CreateEmployee, Employee, Password, ProfileChanges, UpdateEmployee, User, UserChanges,
};

use crate::infra::UnitOfWork;
use crate::validation::EmployeeValidator;
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// List every employee with its user, oldest first
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Get employee by ID
    async fn get_employee(&self, id: Uuid) -> AppResult<Employee>;

    /// Create a user and its employee record
    async fn create_employee(&self, input: CreateEmployee) -> AppResult<Employee>;

    /// Apply a partial update to the employee and its user
    async fn update_employee(&self, id: Uuid, changes: UpdateEmployee) -> AppResult<Employee>;

    /// Delete the employee together with its user
    async fn delete_employee(&self, id: Uuid) -> AppResult<()>;

    /// Check a username/password pair against the user directory
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
    validator: EmployeeValidator,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    /// Create new employee service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        let validator = EmployeeValidator::new(uow.users(), uow.employees());
        Self { uow, validator }
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> EmployeeService for EmployeeManager<U> {
    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.uow.employees().list().await
    }

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee> {
        self.uow.employees().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_employee(&self, input: CreateEmployee) -> AppResult<Employee> {
        let input = input.normalized();
        self.validator.validate_create(&input).await?;

        let password_hash = Password::new(&input.password)?.into_string();
        let CreateEmployee {
            first_name,
            last_name,
            username,
            id_number,
            position,
            department,
            ..
        } = input;

        let employee = with_transaction!(self.uow, |ctx| {
            let user = ctx
                .users()
                .create(username, first_name, last_name, password_hash)
                .await?;
            ctx.employees()
                .create(user, id_number, position, department)
                .await
        })?;

        info!(employee_id = %employee.id, username = %employee.user.username, "Employee created");
        Ok(employee)
    }

    async fn update_employee(&self, id: Uuid, changes: UpdateEmployee) -> AppResult<Employee> {
        let current = self.get_employee(id).await?;

        let changes = changes.normalized();
        self.validator.validate_update(&current, &changes).await?;

        if changes.is_empty() {
            return Ok(current);
        }

        let password_hash = match changes.password.as_deref() {
            Some(password) => Some(Password::new(password)?.into_string()),
            None => None,
        };

        let user_changes = UserChanges {
            username: changes.username,
            first_name: changes.first_name,
            last_name: changes.last_name,
            password_hash,
        };
        let profile_changes = ProfileChanges {
            id_number: changes.id_number,
            position: changes.position,
            department: changes.department,
        };
        let user_id = current.user_id();

        let employee = with_transaction!(self.uow, |ctx| {
            let user = ctx.users().update(user_id, user_changes).await?;
            ctx.employees().update(id, profile_changes, user).await
        })?;

        info!(employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    async fn delete_employee(&self, id: Uuid) -> AppResult<()> {
        let employee = self.get_employee(id).await?;
        let user_id = employee.user_id();

        with_transaction!(self.uow, |ctx| {
            ctx.employees().delete(id).await?;
            ctx.users().delete(user_id).await
        })?;

        info!(employee_id = %id, username = %employee.user.username, "Employee deleted");
        Ok(())
    }

    async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .uow
            .users()
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !user.check_password(password) {
            warn!(username, "Rejected login attempt");
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}
