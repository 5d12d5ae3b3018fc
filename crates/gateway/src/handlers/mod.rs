//! HTTP request handlers.

pub mod employee_handler;
pub mod employee_page_handler;
pub mod health_handler;

pub use employee_handler::employee_routes;
pub use employee_page_handler::employee_page_routes;
pub use health_handler::{health_check, root};
