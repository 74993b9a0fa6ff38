use game_browser::{Catalog, Config, FavoritesStore, MenuController, RawgProvider};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so it stays out of the menu
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    tracing::debug!(
        "Using {} (favorites: {}, high scores: {})",
        config.base_url,
        config.favorites_path.display(),
        config.highscore_path.display()
    );

    let rawg = Arc::new(RawgProvider::new(&config)?);
    let catalog = Catalog::new(rawg);
    let favorites = FavoritesStore::new(config.favorites_path.clone());

    let stdin = io::stdin();
    let mut menu = MenuController::new(catalog, favorites, stdin.lock(), io::stdout());
    menu.run().await?;

    Ok(())
}
