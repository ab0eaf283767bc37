use thiserror::Error;

#[derive(Error, Debug)]
pub enum GramForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Search Pattern Error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Corpus Validation Error: {0}")]
    Validation(String),

    #[error("Locator Error: {0}")]
    Locator(String),
}

pub type GfResult<T> = Result<T, GramForgeError>;
