//! Per-request handler context.

use crate::parser::{HttpRequest, Method};
use crate::router::params::Params;

/// What a handler receives: the request and its parameter store.
///
/// A context belongs to a single request. The dispatcher merges the
/// parameters captured by the winning pattern into `params` before the
/// handler runs.
#[derive(Debug, Clone)]
pub struct Context {
    pub request: HttpRequest,
    pub params: Params,
}

impl Context {
    pub fn new(request: HttpRequest) -> Self {
        Self {
            request,
            params: Params::new(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.request.method
    }

    pub fn path(&self) -> &str {
        &self.request.path
    }

    /// Shorthand for `self.params.get(name)`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

impl From<HttpRequest> for Context {
    fn from(request: HttpRequest) -> Self {
        Self::new(request)
    }
}
