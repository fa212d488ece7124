// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::history;

const ENV_PATH: &str = "APP_CONFIG_PATH";
const DEFAULT_PATH: &str = "config/app.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_history_capacity() -> usize {
    history::DEFAULT_CAPACITY
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            history_capacity: default_history_capacity(),
        }
    }
}

impl AppConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load config using env var + fallbacks:
    /// 1) $APP_CONFIG_PATH (must exist if set)
    /// 2) config/app.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_PATH) {
            let pb = PathBuf::from(p);
            return Self::load_from(&pb)
                .with_context(|| format!("{ENV_PATH} points to an unreadable config"));
        }
        let default = PathBuf::from(DEFAULT_PATH);
        if default.exists() {
            return Self::load_from(&default);
        }
        Ok(Self::default())
    }
}
