//! Request parsing errors.

use thiserror::Error;

/// Errors produced while turning raw bytes into an [`HttpRequest`](crate::parser::HttpRequest).
#[derive(Debug, Error)]
pub enum Error {
    /// The method is not a valid token.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The request target is not origin-form or its path does not decode.
    #[error("Invalid request target: {0}")]
    InvalidPath(String),

    /// The request line does not have exactly three parts.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    #[error("Unsupported HTTP version: {0}")]
    InvalidVersion(String),

    #[error("Required header is missing: {0}")]
    MissingHeader(String),

    /// A header line has no `:` separator or an empty name.
    #[error("Invalid header line: {0}")]
    InvalidHeaderFormat(String),

    /// Fewer body bytes arrived than Content-Length declared.
    #[error("Incomplete body: expected {declared} bytes, received {received}")]
    IncompleteBody { declared: usize, received: usize },

    #[error("Empty request")]
    EmptyRequest,

    /// The body could not be decoded as JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}
