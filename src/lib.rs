//! Student API: CRUD REST backend for student records.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AbsentRecordMode, AppConfig, CorsOrigins, StorageBackend};
pub use error::{AppError, ConfigError};
pub use model::{Student, StudentId};
pub use repository::{InMemoryStudentRepository, PgStudentRepository, StudentRepository};
pub use routes::{app, common_routes_with_ready, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
