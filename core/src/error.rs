use thiserror::Error;

#[derive(Error, Debug)]
pub enum FundingError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Startup name space exhausted after {attempts} draws without a fresh name")]
    NameSpaceExhausted { attempts: usize },

    #[error("No investors available to lead a funding round")]
    NoInvestors,

    #[error("Store not found at '{path}' (run the generator first)")]
    StoreMissing { path: String },

    #[error("Template not found at '{path}'")]
    TemplateMissing { path: String },

    #[error("Template does not contain the marker '{marker}'")]
    MarkerMissing { marker: &'static str },

    #[error("Template contains the marker '{marker}' {count} times, expected exactly once")]
    MarkerNotUnique { marker: &'static str, count: usize },

    #[error("Document does not contain an embedded dashboard payload")]
    PayloadMissing,

    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type FundingResult<T> = Result<T, FundingError>;
