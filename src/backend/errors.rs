use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Could not reach the quote backend: {0}")]
    Transport(String),

    #[error("Backend returned {0}")]
    Status(u16),

    #[error("Malformed backend response: {0}")]
    Decode(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

pub type SubmitResult<T> = Result<T, SubmitError>;

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SubmitError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            SubmitError::Status(status.as_u16())
        } else {
            SubmitError::Transport(err.to_string())
        }
    }
}
