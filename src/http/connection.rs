use std::io;
use std::net::IpAddr;
use std::sync::Arc;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::http::parser::{decode_line, parse_request_line};
use crate::http::request::{Method, Request};
use crate::http::resolve::Resolution;
use crate::http::response::Response;
use crate::http::writer::write_response;
use crate::server::ServerState;

/// Handles exactly one request on one client connection.
pub struct Connection<S> {
    stream: BufReader<S>,
    peer: IpAddr,
    state: Arc<ServerState>,
    phase: ConnectionState,
}

/// The connection only ever moves forward through these states.
#[derive(Debug)]
pub enum ConnectionState {
    ReadRequestLine,
    ReadHeaders(Request),
    ResolveFile(Request),
    SendResponse(Response),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: IpAddr, state: Arc<ServerState>) -> Self {
        Self {
            stream: BufReader::new(stream),
            peer,
            state,
            phase: ConnectionState::ReadRequestLine,
        }
    }

    /// Runs the connection to completion.
    ///
    /// The stream is shut down on every path out of here, including errors.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;
        self.phase = ConnectionState::Closed;

        if let Err(e) = self.stream.shutdown().await {
            debug!(peer = %self.peer, error = %e, "Shutdown failed");
        }

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.phase, ConnectionState::Closed) {
                ConnectionState::ReadRequestLine => {
                    self.phase = self.read_request_line().await?;
                }

                ConnectionState::ReadHeaders(mut req) => {
                    self.read_headers(&mut req).await?;
                    self.phase = ConnectionState::ResolveFile(req);
                }

                ConnectionState::ResolveFile(req) => {
                    let response = self.resolve(&req).await;
                    let response = match req.method() {
                        Some(Method::HEAD) => response.without_body(),
                        _ => response,
                    };
                    self.phase = ConnectionState::SendResponse(response);
                }

                ConnectionState::SendResponse(response) => {
                    let status = response.status;
                    let sent = write_response(&mut self.stream, response).await?;
                    info!(
                        peer = %self.peer,
                        status = status.as_u16(),
                        bytes = sent,
                        "Response sent"
                    );
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    async fn read_request_line(&mut self) -> anyhow::Result<ConnectionState> {
        let Some(line) = self.read_line().await? else {
            debug!(peer = %self.peer, "Client closed before sending a request");
            return Ok(ConnectionState::Closed);
        };

        info!(peer = %self.peer, request_line = %line, "Request");

        match parse_request_line(&line) {
            Ok(request_line) => Ok(ConnectionState::ReadHeaders(Request::new(request_line))),
            Err(e) => {
                warn!(peer = %self.peer, error = %e, "Malformed request line");
                Ok(ConnectionState::SendResponse(Response::bad_request()))
            }
        }
    }

    async fn read_headers(&mut self, req: &mut Request) -> anyhow::Result<()> {
        while let Some(line) = self.read_line().await? {
            if line.is_empty() {
                return Ok(());
            }

            debug!(peer = %self.peer, header = %line, "Header");
            req.push_header(line);
        }

        debug!(peer = %self.peer, "Client closed inside the header block");
        Ok(())
    }

    async fn resolve(&self, req: &Request) -> Response {
        if req.is_not_implemented() {
            return Response::not_implemented();
        }

        let path = match self.state.root.resolve(req.path()) {
            Resolution::File(path) => path,
            Resolution::Forbidden => {
                warn!(peer = %self.peer, path = %req.path(), "Path escapes document root");
                return Response::forbidden();
            }
        };

        match open_regular_file(&path).await {
            Ok(Some(file)) => {
                let content_type = self.state.mime.content_type_for(&path);
                debug!(path = %path.display(), content_type, "Serving file");
                Response::file(file, content_type)
            }
            Ok(None) => Response::not_found(req.user_agent.as_deref(), self.peer),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cannot stat opened file");
                Response::internal_error()
            }
        }
    }

    /// Reads one line, or `None` at end of stream.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        let n = self.stream.read_until(b'\n', &mut raw).await?;

        if n == 0 {
            return Ok(None);
        }

        Ok(Some(decode_line(&raw)))
    }
}

/// Opens `path` if it is a regular file.
///
/// A path that cannot be opened for any reason, or that is not a regular
/// file, gives `Ok(None)`. Only a failure to stat an already opened file is
/// an error.
async fn open_regular_file(path: &std::path::Path) -> io::Result<Option<File>> {
    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Cannot open file");
            return Ok(None);
        }
    };

    if file.metadata().await?.is_file() {
        Ok(Some(file))
    } else {
        Ok(None)
    }
}
