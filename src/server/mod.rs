//! Accept loop and the state shared by every connection.

pub mod listener;

use crate::http::mime::MimeTable;
use crate::http::resolve::DocumentRoot;

/// Read-only state handed to every connection.
///
/// Built once before the listener starts; never mutated afterwards, so
/// connections share it through an `Arc` without locking.
#[derive(Debug)]
pub struct ServerState {
    pub mime: MimeTable,
    pub root: DocumentRoot,
}

impl ServerState {
    pub fn new(mime: MimeTable, root: DocumentRoot) -> Self {
        Self { mime, root }
    }
}
