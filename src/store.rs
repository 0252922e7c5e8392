//! Database bootstrap: create the database and the `etudiants` table when missing.

use crate::error::{AppError, ConfigError};
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const STUDENTS_TABLE: &str = "etudiants";

/// Create the students table if it does not exist. Idempotent.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            nom TEXT NOT NULL,
            prenom TEXT NOT NULL,
            email TEXT NOT NULL,
            niveau TEXT NOT NULL
        )
        "#,
        STUDENTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Ensure the database named in `database_url` exists; create it if not. Connects to the
/// `postgres` admin database with the same host, credentials and TLS settings. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_connect_options(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the admin connection plus the target database name.
/// `None` when the URL names no database or names `postgres` itself.
fn admin_connect_options(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::Invalid {
        name: "DATABASE_URL",
        value: database_url.to_string(),
        reason: e.to_string(),
    })?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgSslMode;

    fn admin(url: &str) -> Option<(PgConnectOptions, String)> {
        admin_connect_options(url).unwrap()
    }

    #[test]
    fn admin_connection_targets_postgres_database() {
        let (opts, name) = admin("postgres://u:p@db:5432/students").unwrap();
        assert_eq!(name, "students");
        assert_eq!(opts.get_database(), Some("postgres"));
        assert_eq!(opts.get_host(), "db");
        assert_eq!(opts.get_port(), 5432);
        assert_eq!(opts.get_username(), "u");
    }

    #[test]
    fn slash_in_query_does_not_change_database_name() {
        let (opts, name) = admin("postgres://u@db/students?sslrootcert=/etc/ssl/root.crt").unwrap();
        assert_eq!(name, "students");
        assert_eq!(opts.get_database(), Some("postgres"));
        assert_eq!(opts.get_host(), "db");
    }

    #[test]
    fn tls_settings_carry_over_to_admin_connection() {
        let (opts, _) = admin("postgres://u@db/students?sslmode=require").unwrap();
        assert!(matches!(opts.get_ssl_mode(), PgSslMode::Require));
    }

    #[test]
    fn url_without_database_needs_no_bootstrap() {
        assert!(admin("postgres://u@db:5432").is_none());
        assert!(admin("postgres://u@db/postgres").is_none());
    }

    #[test]
    fn unparseable_url_is_a_config_error() {
        assert!(matches!(
            admin_connect_options("not a url"),
            Err(AppError::Config(ConfigError::Invalid { name: "DATABASE_URL", .. }))
        ));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("my\"db"), "\"my\"\"db\"");
    }
}
