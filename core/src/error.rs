use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell coordinates out of range")]
    IndexOutOfRange,
    #[error("Board shape does not match the fixed dimensions")]
    InvalidBoardShape,
    #[error("No board loaded yet")]
    NotReady,
    #[error("Trivia source failed: {0}")]
    NetworkFailure(String),
    #[error("Trivia source returned unusable data: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
