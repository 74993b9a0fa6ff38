use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";
pub const DEFAULT_FAVORITES_FILE: &str = "favorite_games.txt";
pub const DEFAULT_HIGHSCORE_FILE: &str = "minigame_highscores.txt";

pub const API_KEY_VAR: &str = "RAWG_API_KEY";
pub const BASE_URL_VAR: &str = "RAWG_BASE_URL";
pub const FAVORITES_FILE_VAR: &str = "FAVORITES_FILE";
pub const HIGHSCORE_FILE_VAR: &str = "HIGHSCORE_FILE";

/// Process-wide settings, built once at startup and read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// RAWG API key, blank when the environment doesn't provide one
    pub api_key: String,

    /// Base URL that resource paths are appended to
    pub base_url: String,

    /// Newline-delimited favorite titles
    pub favorites_path: PathBuf,

    /// Reserved for the minigame high scores; nothing reads or writes it yet
    pub highscore_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            favorites_path: PathBuf::from(DEFAULT_FAVORITES_FILE),
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_FILE),
        }
    }
}

impl Config {
    /// Load `.env` (if any) and read settings from the environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup(API_KEY_VAR).unwrap_or_default();
        if api_key.trim().is_empty() {
            tracing::warn!("{} is not set, catalog requests will be rejected", API_KEY_VAR);
        }

        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let favorites_path = lookup(FAVORITES_FILE_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.favorites_path);

        let highscore_path = lookup(HIGHSCORE_FILE_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.highscore_path);

        Self {
            api_key,
            base_url,
            favorites_path,
            highscore_path,
        }
    }

    /// Full URL for a resource path such as `games` or `genres`
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }
}
