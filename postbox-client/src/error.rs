use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the hosted posts API.
pub enum PostboxClientError {
    /// Transport-level failure (connection, TLS, body decoding).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the service.
    ///
    /// `message` is the human-readable error carried by the response body,
    /// or a generic fallback when the body has none. The display form is the
    /// message alone, so it can be shown to the user as-is.
    #[error("{message}")]
    Api {
        /// HTTP status code of the failed response.
        status: u16,
        /// Best available human-readable message.
        message: String,
    },
}

/// Result of client operations.
pub type PostboxClientResult<T> = Result<T, PostboxClientError>;
