use thiserror::Error;

/// Errors that can occur while talking to the text-generation service
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation API returned status {status}: {message}")]
    Api { status: u16, message: String },
}

pub type AssistantResult<T> = Result<T, AssistantError>;
