use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnakeError {
    #[error("Invalid grid size: {0} (must be positive)")]
    InvalidGridSize(i32),

    #[error("Initial snake of length {snake_len} does not fit a {size}x{size} grid")]
    SnakeDoesNotFit { snake_len: usize, size: i32 },

    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnakeError>;
