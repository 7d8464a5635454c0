use thiserror::Error;

/// Errors emitted by the generators.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("dictionary is empty")]
    EmptyDictionary,
    #[error("words generation requires a dictionary")]
    MissingDictionary,
    #[error("no candidate accepted within {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
