mod init;
pub use init::{init_logging, parse_rotation};
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::rolling::Rotation;

use crate::utils::app_home;

/// Log filename used by the daemon.
pub const LOG_FILENAME: &str = "record-duplicator.log";
/// Path of the active log file, set once at startup.
static LOG_FILE_PATH: OnceLock<String> = OnceLock::new();
/// Remember the log file path so structured errors can point at it.
pub fn set_log_file_path(path: String) {
    if let Err(ignored) = LOG_FILE_PATH.set(path) {
        tracing::debug!("Log file path already set; ignoring {ignored}");
    }
}
/// Log file path set at startup, or an empty string before logging is up.
pub fn get_log_file_path() -> &'static str {
    LOG_FILE_PATH.get().map_or("", String::as_str)
}
/// Configuration for the logging system.
#[derive(Debug)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: app_home().join("logs"),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
