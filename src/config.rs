use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "MINIHTTPD_CONFIG";

/// Environment variable overriding the listen address.
pub const LISTEN_ENV: &str = "LISTEN";

/// Server settings.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```yaml
/// listen_addr: 127.0.0.1:8080
/// document_root: /srv/www
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Directory request paths are resolved against
    pub document_root: PathBuf,
    /// File served for `/`, relative to the document root
    pub index_file: PathBuf,
    /// MIME types file loaded at startup
    pub mime_types: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:6789".to_string(),
            document_root: PathBuf::from("."),
            index_file: PathBuf::from("testfiles/index.html"),
            mime_types: PathBuf::from("./mime.types"),
        }
    }
}

impl Config {
    /// Loads settings from the file named by `MINIHTTPD_CONFIG`, if set,
    /// then applies the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let text = std::fs::read_to_string(&path).with_context(|| {
                    format!("cannot read config file {}", PathBuf::from(&path).display())
                })?;
                Self::from_yaml(&text)?
            }
            None => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("invalid config file")
    }
}
