mod errcode;

pub mod logging;

pub use errcode::*;

use logging::LoggerConfig;

pub const DEFAULT_LOGGER_CONFIG: LoggerConfig = LoggerConfig {
    timestamp_format: "%Y-%m-%d %H:%M:%S.%3f",
};
