use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_METRICS_PATH: &str = "_assets/strlength.txt";
const DEFAULT_MAX_DOCUMENT_CHARS: usize = 4096;

/// Service configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Glyph width definition file. A missing file is tolerated at load time.
    pub metrics_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    /// Longest document (in chars) accepted by the layout and export endpoints.
    pub max_document_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            metrics_path: std::env::var("METRICS_PATH")
                .unwrap_or_else(|_| DEFAULT_METRICS_PATH.to_string())
                .into(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_document_chars: match std::env::var("MAX_DOCUMENT_CHARS") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("MAX_DOCUMENT_CHARS must be a positive integer, got '{raw}'"))?,
                Err(_) => DEFAULT_MAX_DOCUMENT_CHARS,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            metrics_path: DEFAULT_METRICS_PATH.into(),
            port: 8080,
            rust_log: "info".to_string(),
            max_document_chars: DEFAULT_MAX_DOCUMENT_CHARS,
        }
    }
}
