//! HTTP server for microroute-rs.
//!
//! Accepts TCP connections on a tokio runtime, parses each request and hands
//! it to a [`Router`](crate::router::Router).

mod response;
mod config;
mod error;
mod http_server;

pub use response::{HttpResponse, StatusCode, NOT_FOUND_BODY};
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::HttpServer;
