use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_CANDIDATES_CSV: &str = "FY25_Candidates database.csv";
const DEFAULT_MODEL_DIR: &str = "Models";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub candidates_csv: PathBuf,
    pub model_dir: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
    pub session_ttl_minutes: i64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            candidates_csv: optional_env("CANDIDATES_CSV")
                .unwrap_or_else(|| DEFAULT_CANDIDATES_CSV.to_string())
                .into(),
            model_dir: optional_env("MODEL_DIR")
                .unwrap_or_else(|| DEFAULT_MODEL_DIR.to_string())
                .into(),
            admin_username: optional_env("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            admin_password: require_env("ADMIN_PASSWORD")?,
            session_ttl_minutes: optional_env("SESSION_TTL_MINUTES")
                .unwrap_or_else(|| "480".to_string())
                .parse::<i64>()
                .context("SESSION_TTL_MINUTES must be a whole number of minutes")?,
            port: optional_env("PORT")
                .unwrap_or_else(|| "5500".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
