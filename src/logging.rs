use anyhow::{Context, Result};
use clap::ValueEnum;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Verbosity accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Send log records to `path`.
///
/// The terminal belongs to the game screen, so logs only ever go to a file.
pub fn init_file_logger(path: &Path, level: LogLevel) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level.into(), Config::default(), file).context("Failed to install logger")?;
    Ok(())
}
