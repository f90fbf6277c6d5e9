use thiserror::Error;

/// Evaluation harness errors
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Configuration error: {0}")]
    Config(#[from] envy::Error),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
