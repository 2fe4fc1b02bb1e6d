// src/error.rs
use prime_range_shared_kernel::PrimeRangeError;
use thiserror::Error;

use crate::config::ConfigBuilderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] PrimeRangeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigBuilderError),

    #[error("input stream closed before a valid range was entered")]
    EndOfInput,
}

pub type Result<T> = std::result::Result<T, AppError>;
