//! Task Manager Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod dialog;
mod error;
mod filter;
mod models;
mod pages;
mod session;
mod store;
mod task_list;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("[MAIN] logger already set: {}", e).into());
    }
    log::info!("[MAIN] starting, backend at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config/> });
}
