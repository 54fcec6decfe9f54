//! Stockroom Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod guard;
mod logging;
mod models;
mod movement;
mod routes;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("[APP] starting, api at {}", config.api_base_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
