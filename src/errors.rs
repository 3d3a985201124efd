use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::errors::DomainError;

/// Failures while bringing the service up.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
