//! Console configuration
//!
//! Layered: defaults, then build-time overrides, then an optional JSON
//! object in `<meta name="rental-admin-config" content='{...}'>`.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const META_SELECTOR: &str = "meta[name=\"rental-admin-config\"]";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Partial config; absent keys keep the previous layer
#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

impl AdminConfig {
    /// Resolve every layer. Returns the config and any warnings, which can
    /// only be logged once the logger (configured from this result) is up.
    pub fn resolve() -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let mut config = Self::default().with_overrides(
            option_env!("RENTAL_ADMIN_API_URL"),
            option_env!("RENTAL_ADMIN_LOG_LEVEL"),
            &mut warnings,
        );
        if let Some(json) = meta_config() {
            config = config.merge_json(&json, &mut warnings);
        }
        (config, warnings)
    }

    pub fn with_overrides(
        mut self,
        api_base_url: Option<&str>,
        log_level: Option<&str>,
        warnings: &mut Vec<String>,
    ) -> Self {
        if let Some(url) = api_base_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level {
            if console_logger::parse_level(level).is_some() {
                self.log_level = level.trim().to_lowercase();
            } else {
                warnings.push(format!("Unknown log level {:?}, keeping {}", level, self.log_level));
            }
        }
        self
    }

    pub fn merge_json(self, json: &str, warnings: &mut Vec<String>) -> Self {
        match serde_json::from_str::<ConfigOverlay>(json) {
            Ok(overlay) => self.with_overrides(
                overlay.api_base_url.as_deref(),
                overlay.log_level.as_deref(),
                warnings,
            ),
            Err(e) => {
                warnings.push(format!("Ignoring invalid config JSON: {}", e));
                self
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        console_logger::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

fn meta_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(META_SELECTOR).ok()??;
    meta.get_attribute("content")
}
