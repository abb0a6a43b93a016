/// HTTP request methods the server answers.
///
/// Any other method token is answered with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Treated like GET; the request body is never read
    POST,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("PUT"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            "POST" => Some(Method::POST),
            _ => None,
        }
    }
}

/// The first line of a request, split into its two meaningful tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Raw line as received, without the line terminator
    pub raw: String,
    /// Method token exactly as sent (may be unknown or lowercase)
    pub method: String,
    /// Request target (e.g. "/index.html")
    pub path: String,
}

/// A fully read request head.
///
/// Header lines are kept raw; only the `User-Agent` line is picked out.
#[derive(Debug, Clone)]
pub struct Request {
    pub line: RequestLine,
    pub headers: Vec<String>,
    pub user_agent: Option<String>,
}

impl Request {
    pub fn new(line: RequestLine) -> Self {
        Self {
            line,
            headers: Vec::new(),
            user_agent: None,
        }
    }

    /// Records a header line, capturing it as the user agent when it
    /// mentions `User-Agent`.
    pub fn push_header(&mut self, header: String) {
        if is_user_agent(&header) {
            self.user_agent = Some(header.clone());
        }
        self.headers.push(header);
    }

    pub fn method(&self) -> Option<Method> {
        Method::from_str(&self.line.method)
    }

    pub fn path(&self) -> &str {
        &self.line.path
    }

    /// `true` unless the method is one of GET, HEAD or POST.
    pub fn is_not_implemented(&self) -> bool {
        self.method().is_none()
    }
}

fn is_user_agent(header: &str) -> bool {
    header.contains("User-Agent")
}
