//! PostgreSQL-backed repository.

use super::StudentRepository;
use crate::error::AppError;
use crate::model::{Student, StudentId};
use crate::store::STUDENTS_TABLE;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, nom, prenom, email, niveau";

#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, student: &Student) -> Result<Student, AppError> {
        let sql = format!(
            "INSERT INTO {} (nom, prenom, email, niveau) VALUES ($1, $2, $3, $4) RETURNING {}",
            STUDENTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(&student.last_name)
            .bind(&student.first_name)
            .bind(&student.email)
            .bind(&student.level)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: StudentId, student: &Student) -> Result<Option<Student>, AppError> {
        let sql = format!(
            "UPDATE {} SET nom = $2, prenom = $3, email = $4, niveau = $5 WHERE id = $1 RETURNING {}",
            STUDENTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .bind(&student.last_name)
            .bind(&student.first_name)
            .bind(&student.email)
            .bind(&student.level)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, STUDENTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Student>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, STUDENTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, student: Student) -> Result<Student, AppError> {
        if let Some(id) = student.id {
            if let Some(row) = self.update(id, &student).await? {
                return Ok(row);
            }
        }
        self.insert(&student).await
    }

    async fn delete_by_id(&self, id: StudentId) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", STUDENTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
