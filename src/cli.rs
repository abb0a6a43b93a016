//! Command-line handling.
//!
//! The only flag is `-mime <prefix>`, which points the server at
//! `<prefix>mime.types`. The prefix is glued to the file name as-is, so
//! `-mime conf/` and `-mime conf/my-` are both meaningful.

use std::fmt;
use std::path::PathBuf;

pub const MIME_FLAG: &str = "-mime";
pub const MIME_FILE_NAME: &str = "mime.types";

/// What the arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Args {
    /// Use the configured MIME types file.
    Default,
    /// Use `<prefix>mime.types`.
    MimePrefix(String),
}

/// Usage problems. The process prints the message and exits with status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    MissingMimePath,
    InvalidArgument,
    MimeFileMissing,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Usage::MissingMimePath => {
                "Type -mime /your/file/path if you want to specify a path for your mime.types"
            }
            Usage::InvalidArgument => "No valid argument",
            Usage::MimeFileMissing => "Use -mime to specify a path where mime.types exists.",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Usage {}

/// Parses the arguments that follow the program name.
pub fn parse_args<I, T>(args: I) -> Result<Args, Usage>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();

    match args.as_slice() {
        [] => Ok(Args::Default),
        [flag] if flag == MIME_FLAG => Err(Usage::MissingMimePath),
        [flag, prefix] if flag == MIME_FLAG => Ok(Args::MimePrefix(prefix.clone())),
        // a prefix followed by more arguments falls back to the default file
        [flag, ..] if flag == MIME_FLAG => Ok(Args::Default),
        _ => Err(Usage::InvalidArgument),
    }
}

/// `<prefix>mime.types`, by string concatenation rather than a path join.
pub fn mime_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", prefix, MIME_FILE_NAME))
}
