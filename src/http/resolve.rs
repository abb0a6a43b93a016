//! Mapping request paths onto the document root.

use std::path::{Component, Path, PathBuf};

/// Where a request path points on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A path inside the document root. It may not exist.
    File(PathBuf),
    /// The path tried to leave the document root.
    Forbidden,
}

/// The directory files are served from, plus the file served for `/`.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
    index: PathBuf,
}

impl DocumentRoot {
    pub fn new(root: impl Into<PathBuf>, index: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index: index.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a request target such as `/testfiles/a.htm?v=2`.
    ///
    /// The query string is dropped. `/` maps to the index file. Any `..`
    /// segment is refused; the path is otherwise taken as-is, without
    /// following symlinks or touching the filesystem.
    pub fn resolve(&self, target: &str) -> Resolution {
        let path = match target.split_once('?') {
            Some((path, _query)) => path,
            None => target,
        };

        if path == "/" {
            return Resolution::File(self.root.join(&self.index));
        }

        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();

        for component in relative.components() {
            match component {
                Component::Normal(segment) => resolved.push(segment),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Resolution::Forbidden;
                }
            }
        }

        Resolution::File(resolved)
    }
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self::new(".", "testfiles/index.html")
    }
}
