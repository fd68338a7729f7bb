use thiserror::Error;

/// Errors raised while asking the player for a starting angle.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Reading stdin or writing the prompt failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stdin was closed before a valid angle was entered.
    #[error("input closed before an angle was entered")]
    EndOfInput,
}

pub type Result<T> = std::result::Result<T, PromptError>;
