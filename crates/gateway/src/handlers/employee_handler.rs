//! Employee JSON handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use common::AppResult;
use domain::{CreateEmployee, EmployeeResponse, UpdateEmployee, MSG_EMPLOYEE_DELETED};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Confirmation body returned after a delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DetailResponse {
    #[schema(example = "Employee deleted successfully")]
    pub detail: String,
}

/// Create employee API routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees with their users", body = Vec<EmployeeResponse>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employees.list_employees().await?;
    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee record", body = EmployeeResponse),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employees.get_employee(id).await?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// Create an employee and its user account
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployee>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let employee = state.employees.create_employee(payload).await?;
    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// Update any subset of an employee's fields
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployee>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employees.update_employee(id, payload).await?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// Delete an employee together with its user account
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = DetailResponse),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DetailResponse>> {
    state.employees.delete_employee(id).await?;
    Ok(Json(DetailResponse {
        detail: MSG_EMPLOYEE_DELETED.to_string(),
    }))
}
