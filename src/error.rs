use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaesarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid shift {0:?}: not an integer")]
    InvalidShift(String),
}

pub type Result<T> = std::result::Result<T, CaesarError>;
