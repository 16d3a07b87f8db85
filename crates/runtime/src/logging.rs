use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

/// Stderr logger. Diagnostics must never mix into the listing on stdout,
/// so everything the facade receives goes to the error stream.
pub struct Logger {
    level: Level,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            eprintln!(
                "{} {} [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

fn get_level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

pub fn init() -> Result<(), SetLoggerError> {
    _init(get_level_from_env())
}

pub fn _init(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // log::set_max_level takes the pass-in `level`, so only wire the
    // facade up on the first call or the two can disagree.
    let init_call = LOGGER.get().is_none();

    let logger = LOGGER.get_or_init(|| Logger { level });

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
