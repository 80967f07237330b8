//! Route storage, grouped by method.

use std::collections::HashMap;
use log::debug;

use crate::parser::Method;
use crate::router::handler::{HandlerFn, Route};
use crate::router::pattern::Pattern;

/// Routes for each method, kept in registration order.
///
/// Order decides precedence: when several patterns match a path, the one
/// registered first wins.
#[derive(Debug, Default)]
pub struct Registry {
    routes: HashMap<Method, Vec<Route>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `(method, pattern)`.
    ///
    /// Patterns are stored as given, without validation. Registering a pair
    /// that already exists replaces its handler and keeps its position.
    pub fn register(&mut self, method: Method, pattern: Pattern, handler: HandlerFn) {
        let routes = self.routes.entry(method.clone()).or_default();

        if let Some(existing) = routes.iter_mut().find(|route| route.pattern == pattern) {
            debug!("Replacing handler for {method} {pattern}");
            existing.handler = handler;
            return;
        }

        debug!("Registered route {method} {pattern}");
        routes.push(Route { pattern, handler });
    }

    /// Routes registered for `method`, in order. Empty if there are none.
    pub fn routes(&self, method: &Method) -> &[Route] {
        self.routes.get(method).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every `(method, route)` pair. Methods come in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Method, &Route)> {
        self.routes
            .iter()
            .flat_map(|(method, routes)| routes.iter().map(move |route| (method, route)))
    }

    /// Total number of routes across all methods.
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
