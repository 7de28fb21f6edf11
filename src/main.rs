use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;

use message_template_service::config::Settings;
use message_template_service::error::AppError;
use message_template_service::postgres::PostgresPool;
use message_template_service::server::{create_app, AppState};
use message_template_service::telemetry::init_telemetry;
use message_template_service::template::{
    create_template_store, PostgresTemplateStore, TemplateStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing (keep the guard alive until exit)
    let _telemetry = init_telemetry(&settings.otel)?;
    tracing::info!(storage = %settings.storage.backend, "Configuration loaded");

    // Connect storage
    let postgres_pool = connect_postgres(&settings).await?;
    let store = create_template_store(&settings.storage, postgres_pool.as_ref());
    tracing::info!(backend = store.backend_name(), "Template store ready");

    // Create application state
    let state = AppState::new(settings.clone(), store);
    let app = create_app(state);

    // Start server
    let addr = settings.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal_handler())
        .await?;

    if let Some(pool) = postgres_pool {
        pool.close().await;
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Connect to PostgreSQL and ensure the schema when the backend requires it
async fn connect_postgres(settings: &Settings) -> Result<Option<PostgresPool>, AppError> {
    if !settings.uses_postgres() {
        return Ok(None);
    }

    let pool = PostgresPool::new(&settings.database).await?;
    PostgresTemplateStore::new(pool.pool().clone())
        .ensure_schema()
        .await?;

    Ok(Some(pool))
}

async fn shutdown_signal_handler() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
