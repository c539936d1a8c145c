//! Console Logger
//!
//! `log` facade sink for wasm frontends. Records are timestamped and routed to
//! the matching `console.*` method so browser devtools can filter by level.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Browser console method a record is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => ConsoleMethod::Error,
            Level::Warn => ConsoleMethod::Warn,
            Level::Info => ConsoleMethod::Info,
            Level::Debug => ConsoleMethod::Log,
            Level::Trace => ConsoleMethod::Debug,
        }
    }
}

/// Format one console line: `HH:MM:SS.mmm LEVEL target: message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} {}: {}", timestamp, level, target, message)
}

struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), record.target(), &record.args().to_string());
        let line = JsValue::from_str(&line);
        match ConsoleMethod::from(record.level()) {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Info => web_sys::console::info_1(&line),
            ConsoleMethod::Log => web_sys::console::log_1(&line),
            ConsoleMethod::Debug => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` sink.
/// Fails if another logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
