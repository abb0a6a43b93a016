//! MIME type detection based on file extensions.
//!
//! The table is loaded once from a `mime.types` style file where each line
//! names a content type followed by the extensions that map to it:
//!
//! ```text
//! # comment
//! text/html   html htm
//! image/jpeg  jpeg jpg jpe
//! ```

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Content type returned for extensions the table does not know.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Error raised when the MIME types file cannot be read.
#[derive(Debug)]
pub struct ConfigError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot read MIME types file {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Immutable extension → content type mapping.
///
/// Built once at startup and shared read-only between connections.
#[derive(Debug, Clone, Default)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl MimeTable {
    /// Loads the table from a file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::parse(&text);
        tracing::debug!(
            path = %path.display(),
            entries = table.len(),
            "Loaded MIME types"
        );
        Ok(table)
    }

    /// Builds the table from the text of a MIME types file.
    ///
    /// Every token on a line maps to the line's first token, the first token
    /// included. Lines are applied top to bottom, so a repeated token keeps
    /// the mapping from the last line it appears on.
    pub fn parse(text: &str) -> Self {
        let mut types = HashMap::new();

        for line in text.lines() {
            let mut tokens = line.split_whitespace();
            let Some(content_type) = tokens.next() else {
                continue;
            };

            if content_type.contains('#') {
                continue;
            }

            types.insert(content_type.to_string(), content_type.to_string());
            for token in tokens {
                types.insert(token.to_string(), content_type.to_string());
            }
        }

        Self { types }
    }

    /// Returns the content type for `extension`, or
    /// [`DEFAULT_CONTENT_TYPE`] when it is unknown.
    ///
    /// The exact extension is tried first, then its ASCII-lowercased form,
    /// so `HTML` finds an `html` entry.
    pub fn lookup(&self, extension: &str) -> &str {
        if let Some(t) = self.types.get(extension) {
            return t;
        }

        self.types
            .get(&extension.to_ascii_lowercase())
            .map(|t| t.as_str())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Content type for a file path, based on its file name's extension.
    pub fn content_type_for(&self, path: &Path) -> &str {
        self.lookup(extension_of(path))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Extension of the file name in `path`.
///
/// Empty when the name has no `.` or when its only `.` is the first
/// character (`.profile`).
pub fn extension_of(path: &Path) -> &str {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return "";
    };

    match name.rfind('.') {
        Some(i) if i > 0 => &name[i + 1..],
        _ => "",
    }
}
