pub mod rawg;
pub mod fixed;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

pub use fixed::StaticSource;
pub use rawg::RawgProvider;

/// Query parameters for a catalog request, sent in key order
pub type QueryParams = BTreeMap<String, String>;

/// Build [`QueryParams`] from literal pairs
pub fn params<K, V, I>(pairs: I) -> QueryParams
where
    K: Into<String>,
    V: ToString,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.to_string()))
        .collect()
}

/// Trait for remote catalog sources (RAWG, canned fixtures)
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one resource (`games`, `genres`, ...) as raw JSON.
    ///
    /// Transport and HTTP failures are reported here and come back as `None`;
    /// callers treat `None` like an empty result set.
    async fn fetch(&self, resource: &str, params: &QueryParams) -> Option<Value>;

    /// Get source name
    fn name(&self) -> &str;
}
