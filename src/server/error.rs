//! Server and handler errors.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors surfaced while serving a connection or returned by handlers.
///
/// A request that matches no route is not an error; it is answered with a 404.
#[derive(Debug, Error)]
pub enum Error {
    /// The request bytes could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A handler failed. Answered with a 500.
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
