use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShelterError {
    /// Input rejected before reaching the store
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// Anything the MongoDB driver raises, passed through as-is
    #[error("store error: {0}")]
    Store(#[from] mongodb::error::Error),
}

pub type Result<T> = std::result::Result<T, ShelterError>;
