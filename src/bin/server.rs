//! Student API server: reads config from env, prepares storage, serves the student routes.

use std::sync::Arc;

use student_api::{
    app, ensure_database_exists, ensure_tables, AppConfig, AppState, InMemoryStudentRepository,
    PgStudentRepository, StorageBackend, StudentRepository, StudentService,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let repo: Arc<dyn StudentRepository> = match config.storage {
        StorageBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_tables(&pool).await?;
            Arc::new(PgStudentRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; records are lost on exit");
            Arc::new(InMemoryStudentRepository::new())
        }
    };

    let state = AppState::new(StudentService::new(repo), config.absent_records);
    let router = app(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
