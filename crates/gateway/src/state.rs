//! Application state for dependency injection.

use std::sync::Arc;

use employee_service_lib::infra::Database;
use employee_service_lib::service::EmployeeService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Employee use cases
    pub employees: Arc<dyn EmployeeService>,
    /// Database handle for health probes
    pub database: Arc<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(employees: Arc<dyn EmployeeService>, database: Arc<Database>) -> Self {
        Self {
            employees,
            database,
        }
    }

    /// Wire the employee service onto an open database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let employees = employee_service_lib::employee_service(&database);
        Self::new(employees, database)
    }
}
