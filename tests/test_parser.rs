use minihttpd::http::parser::{ParseError, decode_line, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let line = parse_request_line("GET /testfiles/index.html HTTP/1.0").unwrap();

    assert_eq!(line.method, "GET");
    assert_eq!(line.path, "/testfiles/index.html");
}

#[test]
fn test_parse_without_version() {
    let line = parse_request_line("GET /a.htm").unwrap();

    assert_eq!(line.method, "GET");
    assert_eq!(line.path, "/a.htm");
}

#[test]
fn test_parse_extra_whitespace() {
    let line = parse_request_line("  GET \t /x.txt   HTTP/1.0  ").unwrap();

    assert_eq!(line.method, "GET");
    assert_eq!(line.path, "/x.txt");
}

#[test]
fn test_unknown_method_still_parses() {
    let line = parse_request_line("BREW /pot HTTP/1.0").unwrap();

    assert_eq!(line.method, "BREW");
}

#[test]
fn test_parse_empty_line() {
    assert_eq!(parse_request_line(""), Err(ParseError::EmptyRequestLine));
    assert_eq!(parse_request_line("   "), Err(ParseError::EmptyRequestLine));
}

#[test]
fn test_parse_missing_path() {
    assert_eq!(parse_request_line("GET"), Err(ParseError::MissingPath));
}

#[test]
fn test_decode_line_replaces_invalid_utf8() {
    let line = decode_line(b"GET /\xff HTTP/1.0\r\n");

    assert!(line.starts_with("GET /"));
    assert!(line.ends_with(" HTTP/1.0"));
}

#[test]
fn test_decode_line_without_terminator() {
    assert_eq!(decode_line(b"Host: x"), "Host: x");
}
