//! A minimal HTTP request router.
//!
//! Routes are registered per method against patterns made of `/`-separated
//! segments. A segment starting with `:` captures the matching path segment
//! under the rest of its name; every other segment must match exactly.
//!
//! # Features
//!
//! - Named path parameters (`/users/:id`)
//! - Deterministic precedence: the first registered matching pattern wins
//! - A plain-text 404 for requests no route matches
//! - Async handlers, served by a small tokio HTTP/1.x server
//!
//! # Examples
//!
//! ## Matching a path
//!
//! ```
//! use microroute_rs::match_pattern;
//!
//! let params = match_pattern("/users/:id", "/users/42").unwrap();
//! assert_eq!(params.get("id"), Some("42"));
//!
//! assert!(match_pattern("/users/:id", "/items/42").is_none());
//! ```
//!
//! ## Building a router
//!
//! ```
//! use microroute_rs::{HttpResponse, Method, Router, StatusCode};
//!
//! let mut router = Router::new();
//! router
//!     .get("/users/me", |_ctx| async {
//!         Ok(HttpResponse::new(StatusCode::Ok).with_body_string("it's you"))
//!     })
//!     .get("/users/:id", |ctx| async move {
//!         let id = ctx.param("id").unwrap_or_default().to_string();
//!         Ok(HttpResponse::new(StatusCode::Ok).with_body_string(id))
//!     });
//!
//! // "/users/me" was registered first, so it wins over "/users/:id".
//! let (route, params) = router.lookup(&Method::GET, "/users/me").unwrap();
//! assert_eq!(route.pattern.as_str(), "/users/me");
//! assert!(params.is_empty());
//!
//! assert!(router.lookup(&Method::POST, "/users/me").is_none());
//! ```
//!
//! ## Serving
//!
//! ```no_run
//! use microroute_rs::{HttpServer, Router, ServerConfig};
//!
//! # async fn run() -> Result<(), microroute_rs::ServerError> {
//! let router = Router::new();
//! HttpServer::new(ServerConfig::default(), router).start().await
//! # }
//! ```
//!
//! See `demos/router_server.rs` for a complete server.

pub mod parser;
pub mod router;
pub mod server;

pub use parser::{Error as ParserError, HttpRequest, HttpVersion, Method, parse_request};
pub use router::{match_pattern, Context, Params, Router};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
