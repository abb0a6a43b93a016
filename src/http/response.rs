use std::net::IpAddr;

use bytes::Bytes;
use tokio::fs::File;

/// HTTP status codes the server can send.
///
/// - `Ok` (200): File found and streamed
/// - `BadRequest` (400): Request line without a path
/// - `Forbidden` (403): Path escapes the document root
/// - `NotFound` (404): No such file
/// - `InternalServerError` (500): File exists but could not be opened
/// - `NotImplemented` (501): Method other than GET, HEAD or POST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase sent on the status line.
    ///
    /// Phrases are upper case, as existing clients of this server expect.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "NOT FOUND");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "BAD REQUEST",
            StatusCode::Forbidden => "FORBIDDEN",
            StatusCode::NotFound => "NOT FOUND",
            StatusCode::InternalServerError => "INTERNAL SERVER ERROR",
            StatusCode::NotImplemented => "NOT IMPLEMENTED",
        }
    }
}

/// Response entity.
#[derive(Debug)]
pub enum Body {
    Empty,
    Bytes(Bytes),
    /// An opened file, streamed to the client in small chunks.
    File(File),
}

/// A response ready to be written.
///
/// HTTP/1.0 responses from this server carry at most one header,
/// `Content-type`. When it is absent an empty line stands in its place.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Body,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/html")
///     .file(file)
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: Option<String>,
    body: Body,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: Body::Empty,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Body::Bytes(body.into());
        self
    }

    pub fn file(mut self, file: File) -> Self {
        self.body = Body::File(file);
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
        }
    }
}

/// Markup at the start of every 404 page.
pub const NOT_FOUND_PAGE: &str = concat!(
    "<HTML>",
    "<HEAD><TITLE>404 Not Found</TITLE></HEAD>",
    "<BODY><img src=\"/testfiles/404.jpg\"></img></BODY></HTML><br>",
);

/// Placeholder shown on the 404 page when the client sent no User-Agent.
pub const NO_USER_AGENT: &str = "null";

impl Response {
    /// 200 OK streaming `file` with the given content type.
    pub fn file(file: File, content_type: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(content_type)
            .file(file)
            .build()
    }

    /// 404 page echoing the client's User-Agent line and address.
    pub fn not_found(user_agent: Option<&str>, peer: IpAddr) -> Self {
        let body = format!(
            "{}{}<br>{}",
            NOT_FOUND_PAGE,
            user_agent.unwrap_or(NO_USER_AGENT),
            peer
        );

        ResponseBuilder::new(StatusCode::NotFound).body(body).build()
    }

    pub fn bad_request() -> Self {
        ResponseBuilder::new(StatusCode::BadRequest).build()
    }

    pub fn forbidden() -> Self {
        ResponseBuilder::new(StatusCode::Forbidden).build()
    }

    pub fn not_implemented() -> Self {
        ResponseBuilder::new(StatusCode::NotImplemented).build()
    }

    pub fn internal_error() -> Self {
        ResponseBuilder::new(StatusCode::InternalServerError).build()
    }

    /// Drops the body, keeping status and content type (for HEAD).
    pub fn without_body(mut self) -> Self {
        self.body = Body::Empty;
        self
    }
}
