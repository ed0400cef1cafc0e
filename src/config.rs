//! Runtime configuration read from the environment

use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_DATA_DIR: &str = ".cache";

/// Placeholder value shipped in sample setups; treated as "no key configured".
pub const API_KEY_SENTINEL: &str = "YOUR_TMDB_API_KEY_HERE";

const API_KEY_VAR: &str = "TMDB_API_KEY";
const BASE_URL_VAR: &str = "TMDB_BASE_URL";
const DATA_DIR_VAR: &str = "MOVIES_RS_DATA_DIR";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).map(|k| k.trim().to_string());
        let base_url = lookup(BASE_URL_VAR)
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        Self {
            api_key,
            base_url,
            data_dir,
        }
    }

    /// The configured key, unless it is missing, blank or still the sentinel.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty() && *k != API_KEY_SENTINEL)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
