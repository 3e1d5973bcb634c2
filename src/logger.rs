use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, MAX_LOG_ENTRIES};
use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application.
///
/// Entries are kept in memory for the logs dialog and forwarded to the `log`
/// facade, which writes them to a file when file logging is enabled. Only the
/// most recent [`MAX_LOG_ENTRIES`] entries are kept in memory.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    file_path: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_path: None,
        }
    }

    /// Build a logger from the logging section, installing the file logger when enabled
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let mut logger = Self::new();
        if config.enabled {
            let path = Self::get_log_file_path()?;
            init_file_logging(&path, config.level_filter()?)?;
            logger.file_path = Some(path);
        }
        Ok(logger)
    }

    /// Log file records are written to, when file logging is enabled
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Default location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join("planner.log"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        match self.logs.lock() {
            Ok(logs) => logs.iter().rev().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Route `log` records at or above `level` into `path`.
///
/// Only one global logger can exist per process; a second call keeps the
/// first dispatcher and returns `Ok`.
pub fn init_file_logging(path: &Path, level: log::LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let applied = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file)
        .apply();

    if applied.is_err() {
        log::debug!("File logging already initialized, keeping the existing dispatcher");
    }
    Ok(())
}
