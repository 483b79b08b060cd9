use thiserror::Error;

#[derive(Error, Debug)]
pub enum PzError {
    #[error("Unknown action: {action}")]
    UnknownAction { action: String },
    #[error("Missing parameter: {0}")]
    MissingParam(&'static str),
    #[error("Transcript write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PzError>;
