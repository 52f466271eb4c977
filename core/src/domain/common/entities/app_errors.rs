use thiserror::Error;

/// Failure taxonomy for the collaborator boundary. The services decide per
/// call whether a failure is substituted with a safe default or surfaced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0} API key is not configured")]
    ConfigurationMissing(&'static str),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("malformed provider response: {0}")]
    MalformedProviderResponse(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
