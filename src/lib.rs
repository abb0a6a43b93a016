//! minihttpd - Minimal HTTP/1.0 static file server
//!
//! Core library: MIME table, request handling and the accept loop.

pub mod cli;
pub mod config;
pub mod http;
pub mod server;
