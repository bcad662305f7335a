//! Logging initialization for the dashboard binary.
//!
//! The terminal is owned by the painter, so diagnostics go to
//! `./syncdash.log` in the current working directory. Failed cycles and
//! dropped fetches are logged here only; the screen shows nothing beyond
//! the offline indicator.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

const LOG_FILENAME: &str = "syncdash.log";

/// Initialize the file logger. No-ops with a stderr warning if the log file
/// cannot be created.
pub fn initialize() {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let log_path = PathBuf::from(".").join(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Info, config, file);
        }
        Err(err) => {
            eprintln!("Warning: could not create log file at {log_path:?}: {err}");
        }
    }
}
