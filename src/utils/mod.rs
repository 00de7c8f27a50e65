mod clock;
mod hash;

pub use clock::{Clock, FixedClock, SystemClock};
pub use hash::{compute_hmac, tags_match};

use std::path::PathBuf;

/// Name of the per-user data folder (config, logs).
pub const APP_FOLDER: &str = ".record-duplicator";

/// Get the per-user data folder (`~/.record-duplicator`).
#[must_use]
pub fn app_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER)
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
