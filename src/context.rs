//! Application Context
//!
//! Backend handle provided via Leptos Context API.

use crate::api::HttpBackend;
use crate::config::AdminConfig;

#[derive(Clone)]
pub struct AppContext {
    pub backend: HttpBackend,
}

impl AppContext {
    pub fn new(config: &AdminConfig) -> Self {
        Self { backend: HttpBackend::new(config.api_base_url.clone()) }
    }
}
