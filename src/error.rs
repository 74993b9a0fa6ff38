use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the game browser
#[derive(Error, Debug)]
pub enum BrowserError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// File and console I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Provider errors
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// Favorites file has never been written
    #[error("Favorites file not found: {}", .0.display())]
    FavoritesMissing(PathBuf),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BrowserError>;
