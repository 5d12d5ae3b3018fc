//! Server-rendered HTML pages for the employee forms.
//!
//! Markup is assembled in code. Every user-supplied value passes through
//! [`escape`] before it is written into a page.

use std::fmt::Write;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use common::AppError;
use domain::{
    Employee, MAX_ID_NUMBER_LENGTH, MAX_NAME_LENGTH, MAX_POSITION_LENGTH, MAX_USERNAME_LENGTH,
    MIN_PASSWORD_LENGTH,
};

/// Error rendered as an HTML page with the status of the wrapped error.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl PageError {
    /// Text shown on the error page.
    pub fn message(&self) -> String {
        match &self.0 {
            AppError::InvalidFields(fields) => format!("Invalid data: {}", fields),
            AppError::Validation(msg) => format!("Invalid data: {}", msg),
            AppError::NotFound => "Employee not found".to_string(),
            other => other.user_message(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = error_page(status, &self.message());
        (status, Html(body)).into_response()
    }
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{content}\n</body>\n</html>\n",
        title = escape(title),
        content = content,
    )
}

/// Employee list with edit and delete actions.
pub fn employee_index(employees: &[Employee]) -> String {
    let mut content = String::from("<p><a href=\"/employees/create/\">Add employee</a></p>\n");

    if employees.is_empty() {
        content.push_str("<p>No employees yet.</p>");
        return layout("Employees", &content);
    }

    content.push_str(
        "<table>\n<thead><tr><th>Name</th><th>Username</th><th>ID number</th><th>Position</th><th>Department</th><th></th></tr></thead>\n<tbody>\n",
    );
    for employee in employees {
        let _ = write!(
            content,
            "<tr><td>{name}</td><td>{username}</td><td>{id_number}</td><td>{position}</td><td>{department}</td>\
             <td><a href=\"/employees/edit/{id}/\">Edit</a> \
             <form method=\"post\" action=\"/employees/delete/{id}/\" style=\"display:inline\"><button type=\"submit\">Delete</button></form></td></tr>\n",
            name = escape(&employee.user.full_name()),
            username = escape(&employee.user.username),
            id_number = escape(&employee.id_number),
            position = escape(&employee.position),
            department = escape(&employee.department),
            id = employee.id,
        );
    }
    content.push_str("</tbody>\n</table>");

    layout("Employees", &content)
}

/// Blank creation form posting to the store action.
pub fn employee_create_form() -> String {
    let mut fields = String::new();
    text_input(&mut fields, "first_name", "First name", "", MAX_NAME_LENGTH, true);
    text_input(&mut fields, "last_name", "Last name", "", MAX_NAME_LENGTH, true);
    text_input(&mut fields, "username", "Username", "", MAX_USERNAME_LENGTH, true);
    password_input(&mut fields, true);
    text_input(&mut fields, "id_number", "ID number", "", MAX_ID_NUMBER_LENGTH, true);
    text_input(&mut fields, "position", "Position", "", MAX_POSITION_LENGTH, true);
    text_input(&mut fields, "department", "Department", "", MAX_POSITION_LENGTH, true);

    layout("New employee", &form("/employees/store/", "Create", &fields))
}

/// Edit form pre-filled with the employee's current values.
pub fn employee_edit_form(employee: &Employee) -> String {
    let user = &employee.user;
    let mut fields = String::new();
    text_input(&mut fields, "first_name", "First name", &user.first_name, MAX_NAME_LENGTH, false);
    text_input(&mut fields, "last_name", "Last name", &user.last_name, MAX_NAME_LENGTH, false);
    text_input(&mut fields, "username", "Username", &user.username, MAX_USERNAME_LENGTH, false);
    password_input(&mut fields, false);
    text_input(&mut fields, "id_number", "ID number", &employee.id_number, MAX_ID_NUMBER_LENGTH, false);
    text_input(&mut fields, "position", "Position", &employee.position, MAX_POSITION_LENGTH, false);
    text_input(&mut fields, "department", "Department", &employee.department, MAX_POSITION_LENGTH, false);

    let action = format!("/employees/update/{}/", employee.id);
    layout(
        &format!("Edit {}", user.username),
        &form(&action, "Save", &fields),
    )
}

/// Minimal page carrying a status and message.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(
        title,
        &format!(
            "<p>{}</p>\n<p><a href=\"/employees/\">Back to employees</a></p>",
            escape(message)
        ),
    )
}

fn form(action: &str, submit: &str, fields: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{}\">\n{}<button type=\"submit\">{}</button>\n</form>\n<p><a href=\"/employees/\">Cancel</a></p>",
        escape(action),
        fields,
        escape(submit),
    )
}

fn text_input(out: &mut String, name: &str, label: &str, value: &str, max: usize, required: bool) {
    let _ = writeln!(
        out,
        "<p><label for=\"{name}\">{label}</label> <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\" maxlength=\"{max}\"{required}></p>",
        name = name,
        label = escape(label),
        value = escape(value),
        max = max,
        required = if required { " required" } else { "" },
    );
}

fn password_input(out: &mut String, required: bool) {
    let hint = if required {
        ""
    } else {
        " <small>Leave blank to keep the current password</small>"
    };
    let _ = writeln!(
        out,
        "<p><label for=\"password\">Password</label> <input type=\"password\" id=\"password\" name=\"password\" minlength=\"{}\"{}>{}</p>",
        MIN_PASSWORD_LENGTH,
        if required { " required" } else { "" },
        hint,
    );
}
