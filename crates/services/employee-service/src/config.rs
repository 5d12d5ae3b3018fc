//! Employee service configuration.

use common::DatabaseConfig;

/// Employee service configuration.
#[derive(Debug, Clone, Default)]
pub struct EmployeeServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl EmployeeServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `EMPLOYEE_SERVICE_DATABASE_URL` takes precedence over `DATABASE_URL`.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env("EMPLOYEE_SERVICE"),
        }
    }
}
