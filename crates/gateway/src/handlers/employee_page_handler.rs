//! Employee form pages.
//!
//! Successful submissions redirect to the list page with `303 See Other`.
//! Failures render an HTML page carrying the error's status.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use domain::{CreateEmployee, UpdateEmployee};

use crate::extractors::PageForm;
use crate::pages::{self, PageError};
use crate::state::AppState;

const INDEX_PATH: &str = "/employees/";

/// Fields posted by the create and edit forms. Missing fields read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub id_number: String,
    pub position: String,
    pub department: String,
}

impl EmployeeForm {
    /// Full creation payload.
    pub fn into_create(self) -> CreateEmployee {
        CreateEmployee {
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            password: self.password,
            id_number: self.id_number,
            position: self.position,
            department: self.department,
        }
    }

    /// Patch where blank inputs leave the stored value unchanged.
    pub fn into_update(self) -> UpdateEmployee {
        UpdateEmployee {
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            username: Some(self.username),
            password: Some(self.password),
            id_number: Some(self.id_number),
            position: Some(self.position),
            department: Some(self.department),
        }
        .normalized()
    }
}

/// Create employee page routes
pub fn employee_page_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(index))
        .route(INDEX_PATH, get(index))
        .route("/employees/create/", get(create))
        .route("/employees/store/", post(store))
        .route("/employees/edit/:id/", get(edit))
        .route("/employees/update/:id/", post(update))
        .route("/employees/delete/:id/", get(delete).post(delete))
}

/// List page
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let employees = state.employees.list_employees().await?;
    Ok(Html(pages::employee_index(&employees)))
}

/// Blank creation form
pub async fn create() -> Html<String> {
    Html(pages::employee_create_form())
}

/// Handle the creation form
pub async fn store(
    State(state): State<AppState>,
    PageForm(form): PageForm<EmployeeForm>,
) -> Result<Redirect, PageError> {
    state.employees.create_employee(form.into_create()).await?;
    Ok(Redirect::to(INDEX_PATH))
}

/// Pre-filled edit form
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, PageError> {
    let employee = state.employees.get_employee(id).await?;
    Ok(Html(pages::employee_edit_form(&employee)))
}

/// Handle the edit form
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    PageForm(form): PageForm<EmployeeForm>,
) -> Result<Redirect, PageError> {
    state.employees.update_employee(id, form.into_update()).await?;
    Ok(Redirect::to(INDEX_PATH))
}

/// Delete and return to the list
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, PageError> {
    state.employees.delete_employee(id).await?;
    Ok(Redirect::to(INDEX_PATH))
}
