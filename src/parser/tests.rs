//! Tests for the HTTP parser.

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::parser::{Error, HttpRequest, HttpVersion, Method, parse_request};

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /users/42 HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.path, "/users/42");
        assert_eq!(result.query, None);
        assert_eq!(result.version, HttpVersion::Http11);
        assert_eq!(result.get_header("host").unwrap(), "example.com");
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_query_is_split_from_path() {
        let request = b"GET /search?q=rust&page=2 HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.path, "/search");
        assert_eq!(result.query.as_deref(), Some("q=rust&page=2"));
    }

    #[test]
    fn test_only_first_question_mark_splits() {
        let request = HttpRequest::from_target(Method::GET, "/a?b?c", HttpVersion::Http10).unwrap();
        assert_eq!(request.path, "/a");
        assert_eq!(request.query.as_deref(), Some("b?c"));
    }

    #[test]
    fn test_path_is_percent_decoded() {
        let request = b"GET /users/hello%20world?q=a%20b HTTP/1.1\r\nHost: a\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.path, "/users/hello world");
        assert_eq!(result.query.as_deref(), Some("q=a%20b"));

        let request = HttpRequest::from_target(Method::GET, "/files/a%2Fb/caf%C3%A9", HttpVersion::Http11).unwrap();
        assert_eq!(request.path, "/files/a/b/café");
    }

    #[test]
    fn test_undecodable_path_is_rejected() {
        for target in ["/users/%zz", "/users/%4", "/users/%", "/users/%FF"] {
            let result = HttpRequest::from_target(Method::GET, target, HttpVersion::Http11);
            assert!(matches!(result, Err(Error::InvalidPath(ref p)) if p == target), "{target}");
        }
    }

    #[test]
    fn test_body_is_cut_to_content_length() {
        let request = b"POST /items HTTP/1.1\r\nHost: a\r\nContent-Length: 3\r\n\r\nabcdef";
        let result = parse_request(request).unwrap();
        assert_eq!(result.body, b"abc");
    }

    #[test]
    fn test_short_body_is_rejected() {
        let request = b"POST /items HTTP/1.1\r\nHost: a\r\nContent-Length: 10\r\n\r\nabc";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::IncompleteBody { declared: 10, received: 3 })));
    }

    #[test]
    fn test_invalid_content_length() {
        let request = b"POST /items HTTP/1.1\r\nHost: a\r\nContent-Length: lots\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidHeaderFormat(_))));
    }

    #[test]
    fn test_case_insensitive_headers() {
        let request = b"GET / HTTP/1.1\r\nHost: example.com\r\nX-Trace: abc\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert!(result.has_header("HOST"));
        assert_eq!(result.get_header("x-trace").unwrap(), "abc");
        assert!(!result.has_header("Accept"));
    }

    #[test]
    fn test_body_after_blank_line() {
        let request = b"POST /items HTTP/1.1\r\nHost: a\r\nContent-Length: 7\r\n\r\n{\"a\":1}";
        let result = parse_request(request).unwrap();
        assert_eq!(result.method, Method::POST);
        assert_eq!(result.body, b"{\"a\":1}");
    }

    #[test]
    fn test_missing_host_header() {
        let result = parse_request(b"GET / HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::MissingHeader(ref h)) if h == "Host"));
    }

    #[test]
    fn test_http10_does_not_need_host() {
        let result = parse_request(b"GET / HTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(result.version, HttpVersion::Http10);
    }

    #[test]
    fn test_extension_method_token() {
        let result = parse_request(b"PURGE /cache HTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(result.method, Method::Extension("PURGE".to_string()));
        assert_eq!(result.method.to_string(), "PURGE");
    }

    #[test]
    fn test_invalid_method() {
        let result = parse_request(b"GE(T / HTTP/1.0\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "GE(T"));
    }

    #[test]
    fn test_method_is_case_sensitive() {
        let method: Method = "get".parse().unwrap();
        assert_eq!(method, Method::Extension("get".to_string()));
        assert_ne!(method, Method::GET);
    }

    #[test]
    fn test_invalid_http_version() {
        let result = parse_request(b"GET / HTTP/9.9\r\nHost: a\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidVersion(ref v)) if v == "HTTP/9.9"));
    }

    #[test]
    fn test_target_must_be_origin_form() {
        let result = parse_request(b"GET users HTTP/1.1\r\nHost: a\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidPath(ref p)) if p == "users"));
    }

    #[test]
    fn test_malformed_request_line() {
        let result = parse_request(b"GET /\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_invalid_header_format() {
        let result = parse_request(b"GET / HTTP/1.1\r\nHost: a\r\nbogus\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidHeaderFormat(ref l)) if l == "bogus"));
    }

    #[test]
    fn test_empty_request() {
        assert!(matches!(parse_request(b""), Err(Error::EmptyRequest)));
        assert!(matches!(parse_request(b"\r\n\r\n"), Err(Error::EmptyRequest)));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct NewItem {
        name: String,
    }

    #[test]
    fn test_json_body() {
        let request = HttpRequest::new(Method::POST, "/items", HttpVersion::Http11)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(br#"{"name":"lamp"}"#.to_vec());
        let item: NewItem = request.json().unwrap();
        assert_eq!(item, NewItem { name: "lamp".to_string() });
    }

    #[test]
    fn test_json_requires_content_type() {
        let request = HttpRequest::new(Method::POST, "/items", HttpVersion::Http11)
            .with_body(br#"{"name":"lamp"}"#.to_vec());
        let result: Result<NewItem, Error> = request.json();
        assert!(matches!(result, Err(Error::MissingHeader(_))));
    }

    #[test]
    fn test_invalid_json_body() {
        let request = HttpRequest::new(Method::POST, "/items", HttpVersion::Http11)
            .with_header("Content-Type", "application/json")
            .with_body(b"{not json".to_vec());
        let result: Result<NewItem, Error> = request.json();
        assert!(matches!(result, Err(Error::JsonError(_))));
    }
}
