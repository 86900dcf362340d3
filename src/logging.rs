//! Logger setup on top of `env_logger`.
//!
//! The clock face owns the terminal, so anything written to stderr while it
//! is up tears the display. Point `log.file` (or `--log-file`) somewhere to
//! keep logs readable.

use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::Path;
use std::str::FromStr;

use crate::error::AppError;

/// Environment variable with an env_logger filter that overrides the level.
pub const LOG_ENV: &str = "ASCII_STOPWATCH_LOG";

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    LevelFilter::from_str(level)
        .map_err(|_| AppError::Logging(format!("unknown log level '{}'", level)))
}

/// Install the global logger.
pub fn init(level: LevelFilter, file: Option<&Path>) -> Result<(), AppError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_env(LOG_ENV);

    if let Some(path) = file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                AppError::Logging(format!("cannot open log file '{}': {}", path.display(), e))
            })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_names() {
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
        assert_eq!(parse_level("warn").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("trace").unwrap(), LevelFilter::Trace);
    }

    #[test]
    fn test_parse_level_rejects_unknown() {
        let err = parse_level("loud").unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_init_with_unwritable_file_fails() {
        let err = init(LevelFilter::Info, Some(Path::new("/nonexistent-dir/x/y.log")))
            .unwrap_err();
        assert!(matches!(err, AppError::Logging(_)));
    }
}
