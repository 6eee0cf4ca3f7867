use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown subject: {0}")]
    UnknownSubject(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("unknown programming language: {0}")]
    UnknownProgrammingLanguage(String),
}
