// Game errors: setup failures and terminal I/O problems

use thiserror::Error;

/// Errors raised outside the physics core
#[derive(Error, Debug)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed before an answer was given")]
    InputClosed,
    #[error("Invalid direction '{0}', expected U, D, L or R")]
    InvalidDirection(String),
    #[error("Invalid answer '{0}', expected Y or N")]
    InvalidAnswer(String),
    #[error("No free cell left to place {0}")]
    NoFreeCell(&'static str),
}
