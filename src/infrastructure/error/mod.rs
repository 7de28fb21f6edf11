use thiserror::Error;

use crate::postgres::PostgresPoolError;
use crate::telemetry::TelemetryError;
use crate::template::StoreError;

/// Errors raised while bootstrapping or running the service process
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] PostgresPoolError),

    #[error("Template store error: {0}")]
    Store(#[from] StoreError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Check if running in production mode (based on RUN_MODE env var)
pub fn is_production() -> bool {
    std::env::var("RUN_MODE")
        .map(|m| m == "production" || m == "prod")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_conversion() {
        let err: AppError = StoreError::Unavailable("down".to_string()).into();
        assert!(err.to_string().contains("down"));
        assert!(matches!(err, AppError::Store(_)));
    }
}
