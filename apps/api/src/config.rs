use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::optimization::policy::ScoringMode;

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When set, resumes are persisted as JSON files under this directory.
    /// Otherwise they live in memory for the lifetime of the process.
    pub data_dir: Option<PathBuf>,
    pub scoring_mode: ScoringMode,
    /// Cosmetic pause before handler-level scoring, in milliseconds.
    pub analysis_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            data_dir: None,
            scoring_mode: ScoringMode::Detailed,
            analysis_delay_ms: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            data_dir: lookup("DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            scoring_mode: match lookup("SCORING_MODE") {
                Some(v) => v
                    .parse::<ScoringMode>()
                    .map_err(anyhow::Error::msg)
                    .context("SCORING_MODE must be 'detailed' or 'basic'")?,
                None => defaults.scoring_mode,
            },
            analysis_delay_ms: match lookup("ANALYSIS_DELAY_MS") {
                Some(v) => v
                    .parse::<u64>()
                    .context("ANALYSIS_DELAY_MS must be a non-negative integer")?,
                None => defaults.analysis_delay_ms,
            },
        })
    }
}
