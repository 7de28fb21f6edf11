//! Template service: the façade over storage and substitution.
//!
//! Ordering of checks:
//! - create validates input before the store is touched, then relies on the
//!   store's atomic `create_if_absent` for uniqueness
//! - render looks the template up first and only substitutes on a hit

use std::sync::Arc;
use std::time::Instant;

use crate::metrics::{StoreMetrics, TemplateMetrics};

use super::store::{StoreError, TemplateStore};
use super::substitution::{placeholders, substitute};
use super::types::{
    CreateTemplateRequest, Parameters, RenderedMessage, Template, TemplateError, TemplateResult,
};

/// Stateless façade composing a template store and the substitution engine
#[derive(Clone)]
pub struct TemplateService {
    store: Arc<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn TemplateStore> {
        &self.store
    }

    /// Create a template, refusing to overwrite an existing ID
    pub async fn create(&self, request: CreateTemplateRequest) -> TemplateResult<Template> {
        let template = request.into_template().inspect_err(|e| {
            TemplateMetrics::record("create", e.code());
        })?;

        let started = Instant::now();
        let result = self.store.create_if_absent(&template).await;
        StoreMetrics::observe(self.store.backend_name(), "create", started.elapsed());

        match result {
            Ok(()) => {
                tracing::debug!(template_id = %template.id, "Saved template");
                TemplateMetrics::record("create", "ok");
                TemplateMetrics::record_stored();
                Ok(template)
            }
            Err(StoreError::Conflict(id)) => {
                tracing::warn!(template_id = %id, "Attempt to overwrite template");
                let err = TemplateError::Duplicate(id);
                TemplateMetrics::record("create", err.code());
                Err(err)
            }
            Err(e) => Err(self.unavailable("create", e)),
        }
    }

    /// List every stored template
    pub async fn list(&self) -> TemplateResult<Vec<Template>> {
        let started = Instant::now();
        let result = self.store.list_all().await;
        StoreMetrics::observe(self.store.backend_name(), "list", started.elapsed());

        let templates = result.map_err(|e| self.unavailable("list", e))?;

        TemplateMetrics::record("list", "ok");
        TemplateMetrics::set_stored(templates.len());
        Ok(templates)
    }

    /// Look up a template and substitute `parameters` into its text
    pub async fn render(&self, id: &str, parameters: &Parameters) -> TemplateResult<RenderedMessage> {
        let started = Instant::now();
        let result = self.store.get(id).await;
        StoreMetrics::observe(self.store.backend_name(), "get", started.elapsed());

        let template = match result {
            Ok(Some(template)) => template,
            Ok(None) => {
                tracing::debug!(template_id = %id, "Template not found");
                let err = TemplateError::NotFound(id.to_string());
                TemplateMetrics::record("render", err.code());
                return Err(err);
            }
            Err(e) => return Err(self.unavailable("render", e)),
        };

        let started = Instant::now();
        let text = substitute(&template.text, parameters);
        TemplateMetrics::observe_render(started.elapsed());

        if tracing::enabled!(tracing::Level::DEBUG) {
            let unresolved: Vec<String> = placeholders(&template.text)
                .into_iter()
                .filter(|name| !parameters.contains_key(name))
                .collect();
            if !unresolved.is_empty() {
                tracing::debug!(
                    template_id = %id,
                    unresolved = ?unresolved,
                    "Rendered template with unresolved placeholders"
                );
            }
        }

        TemplateMetrics::record("render", "ok");
        Ok(RenderedMessage { text })
    }

    fn unavailable(&self, operation: &str, err: StoreError) -> TemplateError {
        let backend = self.store.backend_name();
        StoreMetrics::record_error(backend, operation);
        tracing::error!(
            backend = backend,
            operation = operation,
            error = %err,
            "Template store operation failed"
        );
        let err = TemplateError::Unavailable(err.to_string());
        TemplateMetrics::record(operation, err.code());
        err
    }
}
