//! SeaORM entities.

pub mod employee;
pub mod user;
