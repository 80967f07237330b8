//! Handler types and route entries.

use std::future::Future;
use std::pin::Pin;

use crate::router::context::Context;
use crate::router::pattern::Pattern;
use crate::server::{Error, HttpResponse};

/// Boxed future returned by a handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>;

/// A type-erased handler taking the request context by value.
pub type HandlerFn = Box<dyn Fn(Context) -> HandlerFuture + Send + Sync>;

/// Erase a handler closure into a [`HandlerFn`].
pub(crate) fn boxed<F, Fut>(handler: F) -> HandlerFn
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
{
    Box::new(move |ctx: Context| -> HandlerFuture { Box::pin(handler(ctx)) })
}

/// A pattern and the handler bound to it.
pub struct Route {
    pub pattern: Pattern,
    pub handler: HandlerFn,
}

impl Route {
    /// Run the handler.
    pub fn call(&self, ctx: Context) -> HandlerFuture {
        (self.handler)(ctx)
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}
