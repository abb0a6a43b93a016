//! HTTP/1.0 protocol implementation.
//!
//! This module implements a small static file server speaking a reduced
//! HTTP/1.0: one request per connection, no request bodies, no keep-alive.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection handler implementing the request-response state machine
//! - **`parser`**: Splits the request line and decodes raw lines
//! - **`request`**: Request line, header lines and method classification
//! - **`resolve`**: Maps request paths onto the document root
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes the response head and streams the body
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ ReadRequestLine  │ ← First line; EOF closes, no path → 400
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   ReadHeaders    │ ← Until blank line, keep User-Agent
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   ResolveFile    │ ← 501 / 403 / 200 / 404 / 500
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   SendResponse   │ ← Head, then body in 1 KiB chunks
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use minihttpd::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! let listener = TcpListener::bind("127.0.0.1:6789").await?;
//! loop {
//!     let (socket, peer) = listener.accept().await?;
//!     let state = Arc::clone(&state);
//!     tokio::spawn(async move {
//!         let mut conn = Connection::new(socket, peer.ip(), state);
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     });
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
pub mod resolve;
