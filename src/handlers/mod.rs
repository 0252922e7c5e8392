//! HTTP handlers for student CRUD.

pub mod student;
pub use student::*;
