//! HTTP/1.x request parsing.
//!
//! Produces the [`HttpRequest`] values the router dispatches on.

mod request;
mod method;
mod version;
mod error;
mod tests;

pub use request::{HttpRequest, parse_request};
pub(crate) use request::{declared_content_length, head_end};
pub use method::Method;
pub use version::HttpVersion;
pub use error::Error;
