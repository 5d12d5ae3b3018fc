//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared by the employee service and the HTTP gateway.

pub mod constants;
pub mod employee;
pub mod error;
pub mod password;
pub mod user;
pub mod validation;

pub use constants::*;
pub use employee::{
    CreateEmployee, Employee, EmployeeResponse, ProfileChanges, UpdateEmployee, UserChanges,
};
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{User, UserResponse};
pub use validation::FieldErrors;
