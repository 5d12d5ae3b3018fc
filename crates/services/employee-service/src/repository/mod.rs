//! Repository layer for data access.

pub mod entities;
mod employee_repository;
mod user_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

use sea_orm::{DbErr, SqlErr};

use common::AppError;
use domain::{FIELD_ID_NUMBER, FIELD_USERNAME, MSG_ID_NUMBER_EXISTS, MSG_USERNAME_EXISTS};

/// Map a failed write to an application error.
///
/// Unique-constraint violations are the store's final word on duplicate
/// usernames and id-numbers; they surface as the same field errors the
/// validation layer produces.
pub(crate) fn write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            if detail.contains("username") {
                AppError::field(FIELD_USERNAME, MSG_USERNAME_EXISTS)
            } else if detail.contains("id_number") {
                AppError::field(FIELD_ID_NUMBER, MSG_ID_NUMBER_EXISTS)
            } else {
                tracing::warn!("Unique constraint violated: {}", detail);
                AppError::validation("Record already exists")
            }
        }
        _ => AppError::Database(err),
    }
}
