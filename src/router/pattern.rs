//! Structural matching of paths against route patterns.
//!
//! A pattern is a `/`-separated list of segments. A segment that starts with
//! [`PARAM_MARKER`] captures the path segment in the same position under the
//! rest of its text; every other segment must equal its path segment exactly.
//!
//! Patterns are not normalized. Leading and trailing slashes produce empty
//! segments that take part in the comparison like any other, and `:` alone is
//! a parameter with an empty name.

use crate::router::params::Params;

/// First character of a named-parameter segment.
pub const PARAM_MARKER: char = ':';

/// Match `path` against `pattern`.
///
/// Returns the captured parameters on success and `None` otherwise. An exact
/// byte-for-byte match always succeeds with no captures, even where the
/// segment comparison below would not.
///
/// ```
/// use microroute_rs::router::match_pattern;
///
/// let params = match_pattern("/users/:uid/posts/:pid", "/users/7/posts/99").unwrap();
/// assert_eq!(params.get("uid"), Some("7"));
/// assert_eq!(params.get("pid"), Some("99"));
///
/// assert!(match_pattern("/users/:id", "/items/5").is_none());
/// assert!(match_pattern("/a/b", "/a").is_none());
/// ```
pub fn match_pattern(pattern: &str, path: &str) -> Option<Params> {
    if pattern == path {
        return Some(Params::new());
    }

    if pattern.split('/').count() != path.split('/').count() {
        return None;
    }

    let mut params = Params::new();
    for (expected, actual) in pattern.split('/').zip(path.split('/')) {
        if expected == actual {
            continue;
        }
        match expected.strip_prefix(PARAM_MARKER) {
            Some(name) => {
                params.insert(name, actual);
            }
            None => return None,
        }
    }

    Some(params)
}

/// A registered route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
}

impl Pattern {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the parameter segments, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.raw.split('/').filter_map(|segment| segment.strip_prefix(PARAM_MARKER))
    }

    /// See [`match_pattern`].
    pub fn matches(&self, path: &str) -> Option<Params> {
        match_pattern(&self.raw, path)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
