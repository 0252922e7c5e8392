//! Student record as stored and as exchanged on the wire.

use serde::{Deserialize, Serialize};

pub type StudentId = i64;

/// One student. `id` is `None` only before the store has assigned one.
///
/// JSON names (`nom`, `prenom`, `niveau`) are kept for existing clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    #[serde(default)]
    pub id: Option<StudentId>,
    #[serde(rename = "nom")]
    #[sqlx(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    #[sqlx(rename = "prenom")]
    pub first_name: String,
    pub email: String,
    #[serde(rename = "niveau")]
    #[sqlx(rename = "niveau")]
    pub level: String,
}

impl Student {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
            level: level.into(),
        }
    }

    /// Overwrite every field except `id` from `other`.
    pub fn copy_fields_from(&mut self, other: &Student) {
        self.last_name.clone_from(&other.last_name);
        self.first_name.clone_from(&other.first_name);
        self.email.clone_from(&other.email);
        self.level.clone_from(&other.level);
    }
}
