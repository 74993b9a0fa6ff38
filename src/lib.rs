//! # Game Browser
//!
//! Console browser for the RAWG video game database:
//! - Title search showing the best match
//! - Top 10 rated games per genre
//! - Locally persisted, deduplicated favorites list
//! - Pluggable catalog sources behind an async trait
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use game_browser::{Catalog, Config, RawgProvider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let catalog = Catalog::new(Arc::new(RawgProvider::new(&config)?));
//!
//!     if let Some(game) = catalog.search_first("celeste").await {
//!         println!("Found: {} - {:?}/5", game.name, game.rating);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod providers;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod menu;
pub mod error;

// Re-export primary types
pub use crate::core::{Game, Genre, Page};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{BrowserError, Result};
pub use favorites::{FavoritesStore, SaveOutcome};
pub use menu::{MenuController, MenuState};
pub use providers::{CatalogSource, RawgProvider, StaticSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
