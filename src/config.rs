//! Frontend Configuration
//!
//! Build-time settings. The API base URL lives in `task_store::config`.

use log::LevelFilter;

/// Lines kept in the in-memory log buffer
pub const LOG_BUFFER_LINES: usize = 200;

/// Log level from `TASKBOARD_LOG_LEVEL` at build time (default `info`)
pub fn log_level() -> LevelFilter {
    parse_level(option_env!("TASKBOARD_LOG_LEVEL"))
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// `window.location.origin`, empty outside a browser
pub fn browser_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
