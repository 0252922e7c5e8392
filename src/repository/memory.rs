//! In-process repository. Ids start at 1 and are never reused.

use super::StudentRepository;
use crate::error::AppError;
use crate::model::{Student, StudentId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Rows {
    by_id: BTreeMap<StudentId, Student>,
    last_id: StudentId,
}

#[derive(Default)]
pub struct InMemoryStudentRepository {
    rows: Mutex<Rows>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Rows> {
        // A panic while holding the guard cannot leave a half-written row.
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.lock().by_id.values().cloned().collect())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, AppError> {
        Ok(self.lock().by_id.get(&id).cloned())
    }

    async fn save(&self, mut student: Student) -> Result<Student, AppError> {
        let mut rows = self.lock();
        let id = match student.id {
            Some(id) if rows.by_id.contains_key(&id) => id,
            _ => {
                rows.last_id += 1;
                rows.last_id
            }
        };
        student.id = Some(id);
        rows.by_id.insert(id, student.clone());
        Ok(student)
    }

    async fn delete_by_id(&self, id: StudentId) -> Result<(), AppError> {
        self.lock().by_id.remove(&id);
        Ok(())
    }
}
