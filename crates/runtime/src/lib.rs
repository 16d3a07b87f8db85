mod config;
pub mod logging;

pub use config::{DEFAULT_TERM_WIDTH, PROGRAM_LOG_LEVEL, PROGRAM_NAME, SHORT_FORMAT_PAD};

pub use logging::init;
