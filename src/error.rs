//! Top-level error type for the interactive stopwatch.

use std::io;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Terminal(#[source] io::Error),
    #[error("Terminal input failed: {0}")]
    Input(#[source] io::Error),
    #[error("Failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to set up logging: {0}")]
    Logging(String),
}
