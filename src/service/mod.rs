//! StudentService: use-case layer over a [`StudentRepository`](crate::repository::StudentRepository).

mod student;
pub use student::StudentService;
