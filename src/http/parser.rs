use std::fmt;

use crate::http::request::RequestLine;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The request line was empty
    EmptyRequestLine,
    /// The request line had a method but no path
    MissingPath,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyRequestLine => f.write_str("empty request line"),
            ParseError::MissingPath => f.write_str("request line has no path"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Splits a request line on whitespace.
///
/// Only the first two tokens matter. The protocol version, if present, is
/// ignored along with anything after it.
pub fn parse_request_line(line: &str) -> Result<RequestLine, ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::EmptyRequestLine)?;
    let path = parts.next().ok_or(ParseError::MissingPath)?;

    Ok(RequestLine {
        raw: line.to_string(),
        method: method.to_string(),
        path: path.to_string(),
    })
}

/// Decodes one line read from the socket, dropping the `\n` or `\r\n`
/// terminator. Invalid UTF-8 is replaced rather than rejected.
pub fn decode_line(raw: &[u8]) -> String {
    let mut end = raw.len();
    if end > 0 && raw[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && raw[end - 1] == b'\r' {
        end -= 1;
    }

    String::from_utf8_lossy(&raw[..end]).into_owned()
}
