//! Browser Interaction
//!
//! `window.confirm` / `window.alert` prompts and router navigation.

use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use rental_admin_core::Interaction;

#[derive(Clone)]
pub struct BrowserInteraction {
    navigate: Arc<dyn Fn(&str) + Send + Sync>,
}

impl BrowserInteraction {
    /// Must be called inside a `<Router>`
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Arc::new(move |route: &str| navigate(route, NavigateOptions::default())),
        }
    }
}

impl Interaction for BrowserInteraction {
    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        if let Err(e) = window().alert_with_message(message) {
            log::warn!("[UI] alert failed: {:?}", e);
        }
    }

    /// Deferred to the next tick; callers may still hold the view state
    fn navigate(&self, route: &str) {
        log::debug!("[UI] navigate {}", route);
        let navigate = Arc::clone(&self.navigate);
        let route = route.to_string();
        Timeout::new(0, move || navigate(&route)).forget();
    }
}
