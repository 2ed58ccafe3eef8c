//! Error types for the Mangopay API client.
//!
//! # Design
//! Every non-200 response lands in `Http` with the raw status code and body;
//! the client does not distinguish 4xx from 5xx. Transport and JSON failures
//! carry the underlying error text verbatim.

use thiserror::Error;

/// Errors returned by the client, the session and transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client ID or secret is empty. Raised before any request is sent.
    #[error("define client ID and client secret in order to get a token")]
    MissingCredentials,

    /// The environment label is neither `sandbox` nor `production`.
    #[error("unknown environment: {0:?} (expected \"sandbox\" or \"production\")")]
    InvalidEnvironment(String),

    /// The request never produced a response (DNS, connect, timeout, I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a status other than the expected one.
    #[error("status: {status}, body: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
