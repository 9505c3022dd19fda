// Logger setup plus conditional logging macros that are only active in debug builds

use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

const LOG_DIR_NAME: &str = "word-scramble";
const LOG_FILE_NAME: &str = "word-scramble.log";

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Where log output goes when the terminal is owned by the TUI.
#[must_use]
pub fn log_file_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR_NAME)
        .join(LOG_FILE_NAME)
}

/// Initialise `env_logger`, filtered by `RUST_LOG` (default `warn`).
///
/// With `to_file` set, records are appended to [`log_file_path`] instead of
/// stderr and the chosen path is returned.
pub fn init(to_file: bool) -> io::Result<Option<PathBuf>> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let path = if to_file {
        let path = log_file_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::options().create(true).append(true).open(&path)?;
        builder.target(Target::Pipe(Box::new(file)));
        Some(path)
    } else {
        None
    };

    // A logger may already be installed (tests, embedding); keep the existing one
    let _ = builder.try_init();
    Ok(path)
}
