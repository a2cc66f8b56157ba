use crate::api::CollectionSource;
use crate::config;
use dioxus::prelude::*;
use std::sync::Arc;

/// Services shared by every page, provided once at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub source: Arc<dyn CollectionSource>,
}

impl AppContext {
    pub fn new(config: config::Config, source: Arc<dyn CollectionSource>) -> Self {
        Self { config, source }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}
