//! In-memory template store using DashMap.
//!
//! Templates are kept in process memory and are lost on service restart.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::store::{StoreError, TemplateStore};
use super::types::Template;

/// In-memory template store.
///
/// The existence check and the insert happen under the same shard lock
/// through `DashMap::entry`, which gives at-most-one-success semantics
/// for concurrent creates of the same ID.
#[derive(Default)]
pub struct MemoryTemplateStore {
    templates: DashMap<String, Template>,
}

impl MemoryTemplateStore {
    /// Create a new, empty memory store.
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Get the number of stored templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create_if_absent(&self, template: &Template) -> Result<(), StoreError> {
        match self.templates.entry(template.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(template.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(template.clone());
                Ok(())
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Template>, StoreError> {
        Ok(self.templates.get(id).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<Template>, StoreError> {
        Ok(self
            .templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}
