use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlintError {
    #[error("input is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("row {row}: column '{column}' has non-numeric value '{value}'")]
    InvalidValue {
        column: &'static str,
        row: usize,
        value: String,
    },

    #[error("row {row}: missing value in column '{column}'")]
    MissingField { column: &'static str, row: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GlintError>;
