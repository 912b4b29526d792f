use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_COUNSELOR_API_URL: &str = "http://localhost:8080/chat";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// `None` means the bundled career table.
    pub catalog_path: Option<PathBuf>,
    /// `None` keeps favorites in memory only (set `DATA_DIR` to an empty string).
    pub data_dir: Option<PathBuf>,
    pub counselor_api_url: String,
    pub counselor_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            catalog_path: std::env::var("CATALOG_PATH").ok().map(PathBuf::from),
            data_dir: match std::env::var("DATA_DIR") {
                Ok(dir) if dir.trim().is_empty() => None,
                Ok(dir) => Some(PathBuf::from(dir)),
                Err(_) => Some(PathBuf::from("./data/store")),
            },
            counselor_api_url: normalize_endpoint(
                &std::env::var("COUNSELOR_API_URL")
                    .unwrap_or_else(|_| DEFAULT_COUNSELOR_API_URL.to_string()),
            ),
            counselor_timeout_secs: std::env::var("COUNSELOR_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("COUNSELOR_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

/// The counselor gateway routes on `/chat/`, so the trailing slash is required.
fn normalize_endpoint(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}
