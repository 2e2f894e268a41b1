use thiserror::Error;

use crate::config::ConfigError;
use crate::db::StoreError;
use crate::schedule::ScheduleError;

/// Startup failures. Tracker operations themselves never fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Store(StoreError::Db(err))
    }
}
