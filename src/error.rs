use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
