use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutoreplaceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Pattern index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, AutoreplaceError>;
