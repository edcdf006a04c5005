use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("dataset error: {0}")]
    Dataset(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(message: String) -> Self {
        Self::Configuration(message)
    }

    pub fn dataset(message: String) -> Self {
        Self::Dataset(message)
    }

    pub fn internal(message: String) -> Self {
        Self::Internal(message)
    }
}
