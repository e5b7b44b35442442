//! Logger setup.

use std::fs::{self, File};
use std::path::Path;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use crate::error::{ConsoleError, Result};
use crate::paths;

/// Parse a level name such as `info` or `DEBUG`.
pub fn parse_level(name: &str) -> Result<LevelFilter> {
    match name.to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConsoleError::InvalidLogLevel(name.to_string())),
    }
}

/// Install the global logger.
///
/// Logs go to `log_file` when one is configured (rotating the previous
/// file first), otherwise to stderr.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            if let Some(dir) = path.parent()
                && !dir.as_os_str().is_empty()
            {
                fs::create_dir_all(dir)?;
            }
            paths::rotate_logs(path);
            let file = File::create(path)?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    log::debug!("Logger initialised at {}", level);
    Ok(())
}
