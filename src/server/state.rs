use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::template::{TemplateService, TemplateStore};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub templates: TemplateService,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(settings: Settings, store: Arc<dyn TemplateStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            templates: TemplateService::new(store),
            start_time: Instant::now(),
        }
    }
}
