//! Runtime configuration types.

use axum::http::HeaderValue;
use std::net::SocketAddr;

/// Which [`StudentRepository`](crate::repository::StudentRepository) the server builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// How `GET /{id}` and `PUT /{id}` answer when the record does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AbsentRecordMode {
    /// 404 with the standard error body.
    #[default]
    NotFound,
    /// 200 with a JSON `null` body, for clients written against the legacy API.
    Null,
}

/// Allowed cross-origin callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub storage: StorageBackend,
    pub cors_origins: CorsOrigins,
    pub absent_records: AbsentRecordMode,
    pub max_body_bytes: usize,
}
