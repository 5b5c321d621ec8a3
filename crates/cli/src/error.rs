use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Tournament error: {0}")]
    TournamentError(#[from] tournament::TournamentError),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
