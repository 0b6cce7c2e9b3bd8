//! Error types for the generative-suggestion component.

/// Result type for suggestion operations.
pub type SuggestResult<T> = Result<T, SuggestError>;

/// Error type for suggestion operations.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// No API key was configured for the generative backend.
    #[error("generative API key not configured")]
    MissingApiKey,

    /// Transport-level failure talking to the generative API.
    #[error("generative API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered, but the payload was unusable (no text, or text
    /// that failed JSON parsing where a JSON shape was requested).
    #[error("unusable reply from generative API: {0}")]
    MalformedReply(String),
}
