//! Pokedeck Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod error;
mod logging;
mod models;
mod render;
mod surface;
mod timers;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.log_level);
    log::info!("[APP] Mounting, catalog at {}", config.catalog.endpoint);

    mount_to_body(move || view! { <App config=config /> });
}
