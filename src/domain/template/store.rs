//! Storage trait for templates.
//!
//! Backends must make `create_if_absent` a single atomic check-and-insert:
//! when several callers race on the same ID, exactly one of them succeeds
//! and every other one observes `StoreError::Conflict`.

use async_trait::async_trait;
use thiserror::Error;

use super::types::Template;

/// Errors that can occur during template storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A template with this ID is already stored
    #[error("Template already exists: {0}")]
    Conflict(String),

    /// PostgreSQL operation failed
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// Backend is temporarily unavailable
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Durable mapping from template ID to template text.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Backend type identifier used in logs and health output
    fn backend_name(&self) -> &'static str;

    /// Insert the template iff no template with the same ID exists.
    async fn create_if_absent(&self, template: &Template) -> Result<(), StoreError>;

    /// Fetch a template by ID. `Ok(None)` means it does not exist.
    async fn get(&self, id: &str) -> Result<Option<Template>, StoreError>;

    /// All stored templates in unspecified order.
    async fn list_all(&self) -> Result<Vec<Template>, StoreError>;

    /// Check that the backend can serve requests.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
