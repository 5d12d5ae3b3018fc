//! Employee repository implementation.
//!
//! Every read joins the linked user so callers always receive a complete
//! `Employee`.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::entities::employee::{self, Entity as EmployeeEntity};
use super::entities::user::{self, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{Employee, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to employee records.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee (with user) by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>>;

    /// List every employee with its user, oldest first
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// True if another employee (not `except`) already owns `id_number`
    async fn id_number_taken(&self, id_number: &str, except: Option<Uuid>) -> AppResult<bool>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Join an employee row with its user row.
fn assemble(
    employee: employee::Model,
    user: Option<user::Model>,
) -> AppResult<Employee> {
    let user = user.ok_or_else(|| {
        AppError::internal(format!("Employee {} has no linked user", employee.id))
    })?;
    Ok(employee.into_domain(User::from(user)))
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result
            .map(|(employee, user)| assemble(employee, user))
            .transpose()
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let rows = EmployeeEntity::find()
            .find_also_related(UserEntity)
            .order_by_asc(employee::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        rows.into_iter()
            .map(|(employee, user)| assemble(employee, user))
            .collect()
    }

    async fn id_number_taken(&self, id_number: &str, except: Option<Uuid>) -> AppResult<bool> {
        let mut query = EmployeeEntity::find().filter(employee::Column::IdNumber.eq(id_number));
        if let Some(id) = except {
            query = query.filter(employee::Column::Id.ne(id));
        }

        let existing = query.one(&self.db).await.map_err(AppError::from)?;
        Ok(existing.is_some())
    }
}
