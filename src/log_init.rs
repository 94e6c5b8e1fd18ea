//! File logger for engine diagnostics.
//!
//! Engines built with `Config::debug(true)` report every live-sheet insertion
//! through the `log` facade. Hosts without a logger of their own can route
//! those records to a file with [`init_logger`].

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;

struct FileLogger {
    file_path: String,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Installs a logger appending debug-level records to the file at `path`.
///
/// Fails if another logger is already installed.
pub fn init_logger(path: &str) -> Result<(), SetLoggerError> {
    let logger = FileLogger {
        file_path: path.to_string(),
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
