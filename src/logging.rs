// src/logging.rs
//! `log` クレートの出力先。ブラウザでは console、ネイティブ (テスト) では stderr に出すよ。

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

#[cfg(debug_assertions)]
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::Info;

struct ConsoleLogger;

impl ConsoleLogger {
    fn level_prefix(level: Level) -> &'static str {
        match level {
            Level::Error => "[ERROR]",
            Level::Warn => "[WARN ]",
            Level::Info => "[INFO ]",
            Level::Debug => "[DEBUG]",
            Level::Trace => "[TRACE]",
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} [{}] {}",
            Self::level_prefix(record.level()),
            record.module_path().unwrap_or("klondike_wasm"),
            record.args()
        );
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// ロガーを登録するよ。2 回目以降の呼び出しは何もしないで `Err` を返す。
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(MAX_LOG_LEVEL);
    Ok(())
}
