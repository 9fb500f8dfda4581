//! Taskboard Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod routes;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let logger = match rolling_logger::init_logger(config::log_level(), config::LOG_BUFFER_LINES) {
        Ok(logger) => Some(logger),
        Err(e) => {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
            None
        }
    };
    log::info!("Taskboard v{} starting", env!("CARGO_PKG_VERSION"));
    mount_to_body(move || view! { <App logger=logger /> });
}
