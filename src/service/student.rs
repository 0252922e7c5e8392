//! Student CRUD orchestration.

use crate::error::AppError;
use crate::model::{Student, StudentId};
use crate::repository::StudentRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    /// Storage connectivity check for readiness probes.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repo.ping().await
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: StudentId) -> Result<Option<Student>, AppError> {
        self.repo.find_by_id(id).await
    }

    /// Insert `input` as a new record. Any id on the input is dropped so create never replaces.
    pub async fn create(&self, mut input: Student) -> Result<Student, AppError> {
        input.id = None;
        let created = self.repo.save(input).await?;
        tracing::info!(id = ?created.id, "student created");
        Ok(created)
    }

    /// Copy the four mutable fields of `input` onto the record stored under `id`.
    ///
    /// Returns `None` without writing when no such record exists. The fetch and the
    /// save are separate calls; a concurrent writer between them wins or loses silently.
    pub async fn update(&self, id: StudentId, input: Student) -> Result<Option<Student>, AppError> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        existing.copy_fields_from(&input);
        let saved = self.repo.save(existing).await?;
        tracing::info!(id, "student updated");
        Ok(Some(saved))
    }

    pub async fn delete(&self, id: StudentId) -> Result<(), AppError> {
        self.repo.delete_by_id(id).await?;
        tracing::info!(id, "student deleted");
        Ok(())
    }
}
