//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::employee_handler::DetailResponse;
use domain::{CreateEmployee, EmployeeResponse, UpdateEmployee, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Onboarding API",
        version = "1.0",
        description = "API for managing employee onboarding processes."
    ),
    paths(
        crate::handlers::employee_handler::list_employees,
        crate::handlers::employee_handler::get_employee,
        crate::handlers::employee_handler::create_employee,
        crate::handlers::employee_handler::update_employee,
        crate::handlers::employee_handler::delete_employee,
    ),
    components(
        schemas(
            CreateEmployee,
            UpdateEmployee,
            EmployeeResponse,
            UserResponse,
            DetailResponse,
        )
    ),
    tags(
        (name = "Employees", description = "Employee record management"),
    )
)]
pub struct ApiDoc;
