//! Load [`AppConfig`] from environment variables.

use crate::config::types::{AbsentRecordMode, AppConfig, CorsOrigins, StorageBackend};
use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/students";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any name → value lookup. Unset or blank variables take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), || {
            SocketAddr::from_str(DEFAULT_BIND_ADDR).map_err(|e| e.to_string())
        })?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), || {
            Ok(DEFAULT_MAX_CONNECTIONS)
        })?;
        let max_body_bytes = parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), || {
            Ok(DEFAULT_MAX_BODY_BYTES)
        })?;

        let storage = match get("STORAGE_BACKEND").as_deref() {
            None | Some("postgres") => StorageBackend::Postgres,
            Some("memory") => StorageBackend::Memory,
            Some(other) => return Err(invalid("STORAGE_BACKEND", other, "expected postgres or memory")),
        };

        let absent_records = match get("ABSENT_RECORD_MODE").as_deref() {
            None | Some("not_found") => AbsentRecordMode::NotFound,
            Some("null") => AbsentRecordMode::Null,
            Some(other) => return Err(invalid("ABSENT_RECORD_MODE", other, "expected not_found or null")),
        };

        let cors_origins = match get("CORS_ALLOWED_ORIGINS") {
            None => CorsOrigins::Any,
            Some(raw) => parse_origins(&raw)?,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            storage,
            cors_origins,
            absent_records,
            max_body_bytes,
        })
    }
}

fn parse_or<T, D>(name: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> Result<T, String>,
{
    match raw {
        Some(v) => v.parse().map_err(|e: T::Err| invalid(name, &v, &e.to_string())),
        None => default().map_err(|reason| invalid(name, "<default>", &reason)),
    }
}

fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    if raw == "*" {
        return Ok(CorsOrigins::Any);
    }
    let mut origins = Vec::new();
    for origin in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if origin == "*" {
            return Err(invalid("CORS_ALLOWED_ORIGINS", raw, "'*' cannot be mixed with explicit origins"));
        }
        let value = HeaderValue::from_str(origin)
            .map_err(|_| invalid("CORS_ALLOWED_ORIGINS", origin, "not a valid header value"))?;
        origins.push(value);
    }
    if origins.is_empty() {
        return Ok(CorsOrigins::Any);
    }
    Ok(CorsOrigins::List(origins))
}

fn invalid(name: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.storage, StorageBackend::Postgres);
        assert_eq!(cfg.cors_origins, CorsOrigins::Any);
        assert_eq!(cfg.absent_records, AbsentRecordMode::NotFound);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn reads_overrides() {
        let cfg = load(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("STORAGE_BACKEND", "memory"),
            ("ABSENT_RECORD_MODE", "null"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example"),
            ("MAX_BODY_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.max_connections, 12);
        assert_eq!(cfg.storage, StorageBackend::Memory);
        assert_eq!(cfg.absent_records, AbsentRecordMode::Null);
        assert_eq!(
            cfg.cors_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ])
        );
        assert_eq!(cfg.max_body_bytes, 1024);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = load(&[("STORAGE_BACKEND", "  "), ("CORS_ALLOWED_ORIGINS", "")]).unwrap();
        assert_eq!(cfg.storage, StorageBackend::Postgres);
        assert_eq!(cfg.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[("DB_MAX_CONNECTIONS", "many")]),
            Err(ConfigError::Invalid { name: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            load(&[("STORAGE_BACKEND", "mysql")]),
            Err(ConfigError::Invalid { name: "STORAGE_BACKEND", .. })
        ));
        assert!(matches!(
            load(&[("MAX_BODY_BYTES", "-1")]),
            Err(ConfigError::Invalid { name: "MAX_BODY_BYTES", .. })
        ));
        assert!(matches!(
            load(&[("CORS_ALLOWED_ORIGINS", "https://a.example,bad\u{7f}origin")]),
            Err(ConfigError::Invalid { name: "CORS_ALLOWED_ORIGINS", .. })
        ));
        assert!(matches!(
            load(&[("CORS_ALLOWED_ORIGINS", "*, https://a.example")]),
            Err(ConfigError::Invalid { name: "CORS_ALLOWED_ORIGINS", .. })
        ));
    }
}
