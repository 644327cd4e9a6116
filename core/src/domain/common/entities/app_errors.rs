use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid recipe payload: {0}")]
    InvalidPayload(String),

    #[error("Failed to parse LLM response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
