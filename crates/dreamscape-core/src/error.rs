use thiserror::Error;

/// Fixed client-facing message for every malformed report submission.
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid input. Must include name, 5 questions, and 5 answers.";

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,
}
