use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("No student record at index {index} (roster holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No student with ID {0}")]
    StudentNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
