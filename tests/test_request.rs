use minihttpd::http::parser::parse_request_line;
use minihttpd::http::request::{Method, Request};

fn request(line: &str) -> Request {
    Request::new(parse_request_line(line).unwrap())
}

#[test]
fn test_method_from_str() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("HEAD"), Some(Method::HEAD));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));

    for other in ["PUT", "DELETE", "OPTIONS", "PATCH", "get", ""] {
        assert_eq!(Method::from_str(other), None, "{}", other);
    }
}

#[test]
fn test_request_method() {
    assert_eq!(request("HEAD /a.txt HTTP/1.0").method(), Some(Method::HEAD));
    assert_eq!(request("OPTIONS * HTTP/1.0").method(), None);
}

#[test]
fn test_get_head_post_are_implemented() {
    for line in ["GET / HTTP/1.0", "HEAD / HTTP/1.0", "POST / HTTP/1.0"] {
        assert!(!request(line).is_not_implemented(), "{}", line);
    }
}

#[test]
fn test_other_methods_are_not_implemented() {
    for line in [
        "PUT / HTTP/1.0",
        "DELETE / HTTP/1.0",
        "BREW /pot HTTP/1.0",
        "get / HTTP/1.0",
    ] {
        assert!(request(line).is_not_implemented(), "{}", line);
    }
}

#[test]
fn test_user_agent_line_is_captured() {
    let mut req = request("GET / HTTP/1.0");
    req.push_header("Host: localhost".to_string());
    req.push_header("User-Agent: curl/8.0".to_string());
    req.push_header("Accept: */*".to_string());

    assert_eq!(req.user_agent.as_deref(), Some("User-Agent: curl/8.0"));
    assert_eq!(req.headers.len(), 3);
}

#[test]
fn test_user_agent_matches_substring_anywhere() {
    let mut req = request("GET / HTTP/1.0");
    req.push_header("X-Original-User-Agent: bot".to_string());

    assert_eq!(req.user_agent.as_deref(), Some("X-Original-User-Agent: bot"));
}

#[test]
fn test_last_user_agent_wins() {
    let mut req = request("GET / HTTP/1.0");
    req.push_header("User-Agent: first".to_string());
    req.push_header("User-Agent: second".to_string());

    assert_eq!(req.user_agent.as_deref(), Some("User-Agent: second"));
}

#[test]
fn test_no_user_agent() {
    let mut req = request("GET / HTTP/1.0");
    req.push_header("Host: localhost".to_string());

    assert!(req.user_agent.is_none());
}

#[test]
fn test_malformed_headers_are_kept_raw() {
    let mut req = request("GET / HTTP/1.0");
    req.push_header("BrokenHeader".to_string());

    assert_eq!(req.headers, vec!["BrokenHeader".to_string()]);
}
