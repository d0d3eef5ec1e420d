use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("empty date string")]
    Empty,
    #[error("unrecognized date format: {0}")]
    UnrecognizedFormat(String),
}
