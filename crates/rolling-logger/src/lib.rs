//! Rolling Logger
//!
//! `log` backend that writes to the browser console (stderr off wasm) and
//! keeps the most recent lines in a fixed-size circular buffer.

use std::collections::VecDeque;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

#[derive(Debug)]
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.lines.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = self.lines.lock();
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

fn format_line(record: &Record) -> String {
    format!(
        "[{} {:<5} {}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;
    let value = line.into();
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}
