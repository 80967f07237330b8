//! HTTP request parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::version::HttpVersion;

/// A parsed HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The percent-decoded request path, without the query string
    pub path: String,
    /// The raw query string following `?`, if any. It is not decoded.
    pub query: Option<String>,
    /// The HTTP version
    pub version: HttpVersion,
    /// The HTTP headers, names as sent by the client
    pub headers: HashMap<String, String>,
    /// The request body
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Create a request for an already decoded `path` with no query, no
    /// headers and an empty body.
    pub fn new(method: Method, path: impl Into<String>, version: HttpVersion) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            version,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Create a request from a raw request target.
    ///
    /// The target is split at the first `?`; the part before it is
    /// percent-decoded into `path` and the rest is kept verbatim as `query`.
    pub fn from_target(method: Method, target: &str, version: HttpVersion) -> Result<Self, Error> {
        let (raw_path, query) = match target.split_once('?') {
            Some((raw_path, query)) => (raw_path, Some(query.to_string())),
            None => (target, None),
        };

        let mut request = Self::new(method, decode_path(raw_path)?, version);
        request.query = query;
        Ok(request)
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replace the body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Get a header value.
    ///
    /// Header names are matched case-insensitively.
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers
            .iter()
            .find_map(|(k, v)| k.eq_ignore_ascii_case(name).then_some(v))
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }

    /// Check if the request declares a JSON body.
    pub fn is_json(&self) -> bool {
        self.get_header("Content-Type")
            .is_some_and(|content_type| content_type.starts_with("application/json"))
    }

    /// Decode the body as JSON.
    ///
    /// Fails with [`Error::MissingHeader`] unless the Content-Type is
    /// `application/json`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if !self.is_json() {
            return Err(Error::MissingHeader("Content-Type: application/json".to_string()));
        }

        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Percent-decode a request path.
///
/// `%` must be followed by two hex digits and the decoded bytes must be
/// UTF-8. `%2F` decodes to `/` like any other escape.
fn decode_path(raw: &str) -> Result<String, Error> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.iter().enumerate().filter(|(_, b)| **b == b'%').all(|(i, _)| {
        bytes.get(i + 1..i + 3).is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return Err(Error::InvalidPath(raw.to_string()));
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(|path| path.into_owned())
        .map_err(|_| Error::InvalidPath(raw.to_string()))
}

/// Offset of the blank line ending the header section, if it has arrived.
pub(crate) fn head_end(input: &[u8]) -> Option<usize> {
    input.windows(4).position(|w| w == b"\r\n\r\n")
}

/// The Content-Length declared in a header section, if present and numeric.
pub(crate) fn declared_content_length(head: &[u8]) -> Option<usize> {
    String::from_utf8_lossy(head).lines().skip(1).find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("Content-Length") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}

/// Split raw bytes into the header section and the body.
fn split_head(input: &[u8]) -> (&[u8], &[u8]) {
    match head_end(input) {
        Some(end) => (&input[..end], &input[end + 4..]),
        None => (input, &input[input.len()..]),
    }
}

/// Parse an HTTP/1.x request from a byte slice.
///
/// The body is what follows the blank line ending the headers. With a
/// `Content-Length` header it is cut to that length, and fewer bytes than
/// declared is an error.
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    let (head, body) = split_head(input);
    let head = std::str::from_utf8(head)
        .map_err(|_| Error::MalformedRequestLine("Invalid UTF-8".to_string()))?;

    let mut lines = head.lines();
    let request_line = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or(Error::EmptyRequest)?;

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let [method, target, version] = parts.as_slice() else {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    };

    let method = Method::from_str(method)?;
    if !target.starts_with('/') {
        return Err(Error::InvalidPath(target.to_string()));
    }
    let version = HttpVersion::from_str(version)?;

    let mut request = HttpRequest::from_target(method, target, version)?;
    for line in lines.take_while(|line| !line.is_empty()) {
        let (name, value) = line
            .split_once(':')
            .filter(|(name, _)| !name.trim().is_empty())
            .ok_or_else(|| Error::InvalidHeaderFormat(line.to_string()))?;
        request.headers.insert(name.trim().to_string(), value.trim().to_string());
    }

    if version.requires_host() && !request.has_header("Host") {
        return Err(Error::MissingHeader("Host".to_string()));
    }

    let body = match request.get_header("Content-Length") {
        Some(value) => {
            let declared: usize = value
                .parse()
                .map_err(|_| Error::InvalidHeaderFormat(format!("Content-Length: {value}")))?;
            if body.len() < declared {
                return Err(Error::IncompleteBody { declared, received: body.len() });
            }
            &body[..declared]
        }
        None => body,
    };

    Ok(request.with_body(body))
}
