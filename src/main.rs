//! Rental Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod interaction;
mod pages;
mod print;

use app::App;
use config::AdminConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warnings) = AdminConfig::resolve();
    if let Err(e) = console_logger::init(config.level_filter()) {
        web_sys::console::warn_1(&format!("[APP] logger already installed: {}", e).into());
    }
    for warning in warnings {
        log::warn!("[CONFIG] {}", warning);
    }
    log::info!("[APP] Starting, backend at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
