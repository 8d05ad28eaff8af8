/// Application error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service error: {0}")]
    Service(#[from] tune_service_client::ServiceClientError),

    #[error("Storage error: {0}")]
    Storage(#[from] tune_storage::StorageError),

    #[error("Playback error: {0}")]
    Playback(#[from] tune_playback::PlaybackError),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
