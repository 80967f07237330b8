//! Request routing.
//!
//! A [`Router`] maps a method and a path to the handler registered for the
//! first matching pattern. Routes are added while the router is owned
//! mutably; once it is handed to an [`HttpServer`](crate::server::HttpServer)
//! it is shared read-only between connections.

mod context;
mod handler;
mod params;
mod pattern;
mod registry;

use std::future::Future;

use crate::parser::Method;
use crate::server::{Error, HttpResponse};

pub use context::Context;
pub use handler::{HandlerFn, HandlerFuture, Route};
pub use params::Params;
pub use pattern::{match_pattern, Pattern, PARAM_MARKER};
pub use registry::Registry;

/// Dispatches requests to the handlers registered for them.
#[derive(Debug, Default)]
pub struct Router {
    registry: Registry,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method` requests whose path matches `pattern`.
    ///
    /// Registering the same method and pattern again replaces the earlier
    /// handler.
    pub fn handle_func<F, Fut>(&mut self, method: Method, pattern: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.registry
            .register(method, Pattern::new(pattern), handler::boxed(handler));
        self
    }

    pub fn get<F, Fut>(&mut self, pattern: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.handle_func(Method::GET, pattern, handler)
    }

    pub fn post<F, Fut>(&mut self, pattern: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.handle_func(Method::POST, pattern, handler)
    }

    pub fn put<F, Fut>(&mut self, pattern: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.handle_func(Method::PUT, pattern, handler)
    }

    pub fn delete<F, Fut>(&mut self, pattern: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.handle_func(Method::DELETE, pattern, handler)
    }

    pub fn patch<F, Fut>(&mut self, pattern: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.handle_func(Method::PATCH, pattern, handler)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Find the route that would serve `method` and `path`.
    ///
    /// Routes for the method are tried in registration order; the first
    /// whose pattern matches wins, together with the parameters it captured.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<(&Route, Params)> {
        self.registry
            .routes(method)
            .iter()
            .find_map(|route| route.pattern.matches(path).map(|params| (route, params)))
    }

    /// Run the handler for `ctx`, or produce the standard 404 response.
    ///
    /// The winning route's captures are merged into `ctx.params` first.
    /// At most one handler runs. Errors only come from that handler.
    pub async fn dispatch(&self, mut ctx: Context) -> Result<HttpResponse, Error> {
        match self.lookup(&ctx.request.method, &ctx.request.path) {
            Some((route, params)) => {
                ctx.params.merge(params);
                route.call(ctx).await
            }
            None => Ok(HttpResponse::not_found()),
        }
    }
}
