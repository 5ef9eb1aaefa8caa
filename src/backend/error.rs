//! Error types exposed by the backend fetch layer.

use thiserror::Error;

/// Errors surfaced while validating input or communicating with the
/// sentiment-analysis backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// No application identifier was supplied.
    #[error("App ID is required")]
    MissingAppId,

    /// No review identifier was supplied.
    #[error("Review ID is required")]
    MissingReviewId,

    /// The backend base URL could not be parsed.
    #[error("backend URL is invalid: {0}")]
    InvalidBaseUrl(String),

    /// The backend reported a logical error via its `error` field.
    ///
    /// The message is surfaced to the user verbatim.
    #[error("{message}")]
    Backend {
        /// Error text exactly as the backend produced it.
        message: String,
    },

    /// The backend returned a failure status without a parseable error field.
    #[error("backend API error: {message}")]
    Api {
        /// Description of the failed request.
        message: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to the backend: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A well-status response body could not be decoded.
    #[error("backend response decoding failed: {message}")]
    Decode {
        /// Detail of the decoding failure.
        message: String,
    },

    /// A display fragment could not be rendered.
    #[error("fragment rendering failed: {message}")]
    Template {
        /// Detail from the template engine.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or was inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
