//! File logging via log4rs. The terminal belongs to the UI, so nothing is
//! ever written to stdout or stderr.

use crate::error::FlappyError;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::fs;
use std::path::Path;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} {m}{n}";
const APPENDER: &str = "logfile";

/// Install the global logger. Only the first call in a process succeeds.
pub fn init(level: LevelFilter, path: &Path) -> Result<(), FlappyError> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)
        .map_err(|e| FlappyError::Logging(format!("{}: {}", path.display(), e)))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build(APPENDER, Box::new(logfile)),
        )
        .build(Root::builder().appender(APPENDER).build(level))
        .map_err(|e| FlappyError::Logging(e.to_string()))?;

    log4rs::init_config(config).map_err(|e| FlappyError::Logging(e.to_string()))?;
    Ok(())
}
