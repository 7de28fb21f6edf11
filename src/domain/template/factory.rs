//! Template store factory

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::postgres::PostgresPool;

use super::memory_store::MemoryTemplateStore;
use super::postgres_store::PostgresTemplateStore;
use super::store::TemplateStore;

/// Create a template store based on configuration.
///
/// - `"postgres"`: a `PostgresTemplateStore` if a pool is provided
/// - `"memory"` (default): a `MemoryTemplateStore`
///
/// The PostgreSQL schema is expected to exist already; see
/// `PostgresTemplateStore::ensure_schema`.
pub fn create_template_store(
    settings: &StorageConfig,
    postgres_pool: Option<&PostgresPool>,
) -> Arc<dyn TemplateStore> {
    match settings.backend.as_str() {
        "postgres" => {
            if let Some(pool) = postgres_pool {
                tracing::info!(backend = "postgres", "Creating PostgreSQL template store");
                Arc::new(PostgresTemplateStore::new(pool.pool().clone()))
            } else {
                tracing::warn!(
                    "PostgreSQL backend requested but no pool provided, falling back to memory"
                );
                Arc::new(MemoryTemplateStore::new())
            }
        }
        other => {
            if other != "memory" {
                tracing::warn!(backend = %other, "Unknown storage backend, using memory");
            }
            tracing::info!(backend = "memory", "Creating memory template store");
            Arc::new(MemoryTemplateStore::new())
        }
    }
}
