use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::core::{Game, Genre, Page};
use crate::providers::{params, CatalogSource, QueryParams};

/// Most games listed for a genre
pub const TOP_GAMES_LIMIT: usize = 10;

/// Typed lookups on top of a [`CatalogSource`]
#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn CatalogSource>,
}

impl Catalog {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Best match for a free-text title
    pub async fn search_first(&self, title: &str) -> Option<Game> {
        let query = params([("search", title.to_string()), ("page_size", "1".to_string())]);
        let games: Vec<Game> = self.fetch_page("games", &query).await;
        games.into_iter().next()
    }

    /// Every genre the service knows, in service order
    pub async fn genres(&self) -> Vec<Genre> {
        self.fetch_page("genres", &QueryParams::new()).await
    }

    /// Highest rated games of a genre, at most [`TOP_GAMES_LIMIT`], best first
    pub async fn top_rated(&self, genre_id: u64) -> Vec<Game> {
        let query = params([
            ("genres", genre_id.to_string()),
            ("page_size", TOP_GAMES_LIMIT.to_string()),
            ("ordering", "-rating".to_string()),
        ]);

        let mut games: Vec<Game> = self.fetch_page("games", &query).await;
        games.truncate(TOP_GAMES_LIMIT);

        // Stable, so equal ratings keep the service's order
        games.sort_by(|a, b| {
            b.rating_value()
                .partial_cmp(&a.rating_value())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        games
    }

    async fn fetch_page<T: DeserializeOwned>(&self, resource: &str, query: &QueryParams) -> Vec<T> {
        match self.source.fetch(resource, query).await {
            Some(body) => decode_page(self.source.name(), resource, body),
            None => {
                tracing::debug!("{} returned nothing for {}", self.source.name(), resource);
                Vec::new()
            }
        }
    }
}

/// Results of a list document.
///
/// A malformed envelope counts as empty; a malformed record is skipped without
/// dropping the rest of the page.
fn decode_page<T: DeserializeOwned>(source: &str, resource: &str, body: Value) -> Vec<T> {
    let page = match serde_json::from_value::<Page<Value>>(body) {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!("Unexpected {} response from {}: {}", resource, source, e);
            return Vec::new();
        }
    };

    tracing::debug!("{} returned {} of {} {}", source, page.results.len(), page.count, resource);

    page.into_results()
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<T>(record) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Skipping malformed {} record from {}: {}", resource, source, e);
                None
            }
        })
        .collect()
}
