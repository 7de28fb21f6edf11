//! Message template system.
//!
//! This module provides:
//! - Template definition with `$name` placeholders
//! - Storage backends with create-if-absent semantics (memory, PostgreSQL)
//! - A single-pass substitution engine
//! - `TemplateService`, the façade the HTTP layer talks to
//!
//! # Example
//!
//! ```ignore
//! let service = TemplateService::new(Arc::new(MemoryTemplateStore::new()));
//!
//! service
//!     .create(CreateTemplateRequest::new("order-shipped", "Order $order_id ships via $carrier"))
//!     .await?;
//!
//! let mut parameters = Parameters::new();
//! parameters.insert("order_id".to_string(), "ORD-123".to_string());
//! parameters.insert("carrier".to_string(), "FedEx".to_string());
//!
//! let rendered = service.render("order-shipped", &parameters).await?;
//! assert_eq!(rendered.text, "Order ORD-123 ships via FedEx");
//! ```

mod factory;
mod memory_store;
mod postgres_store;
mod service;
mod store;
mod substitution;
mod types;

pub use factory::create_template_store;
pub use memory_store::MemoryTemplateStore;
pub use postgres_store::PostgresTemplateStore;
pub use service::TemplateService;
pub use store::{StoreError, TemplateStore};
pub use substitution::{placeholders, substitute};
pub use types::{
    CreateTemplateRequest, Parameters, RenderedMessage, Template, TemplateError, TemplateResult,
};
