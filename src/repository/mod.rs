//! Storage contract for student records and its shipped implementations.

mod memory;
mod postgres;

pub use memory::InMemoryStudentRepository;
pub use postgres::PgStudentRepository;

use crate::error::AppError;
use crate::model::{Student, StudentId};
use async_trait::async_trait;

/// Key-based persistence for [`Student`] records.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Every stored record, ordered by id.
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, AppError>;

    /// Replace the row whose id matches `student.id`, or insert under a new id
    /// when there is no id or no such row. Returns the persisted record.
    async fn save(&self, student: Student) -> Result<Student, AppError>;

    /// Remove the record if present. A missing id is not an error.
    async fn delete_by_id(&self, id: StudentId) -> Result<(), AppError>;

    /// Connectivity probe for readiness checks.
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
