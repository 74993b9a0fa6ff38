use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::{BrowserError, Result};
use crate::providers::{CatalogSource, QueryParams};

/// RAWG video game database provider
pub struct RawgProvider {
    client: Client,
    config: Config,
}

impl RawgProvider {
    /// Create new RAWG provider from the startup config
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Caller params with the API key merged in; the configured key always wins
    pub fn query_with_key(&self, params: &QueryParams) -> QueryParams {
        let mut query = params.clone();
        query.insert("key".to_string(), self.config.api_key.clone());
        query
    }

    /// Single GET, no retry
    async fn try_fetch(&self, resource: &str, params: &QueryParams) -> Result<Value> {
        let url = self.config.resource_url(resource);
        tracing::debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&self.query_with_key(params))
            .send()
            .await
            .map_err(|e| BrowserError::Provider {
                provider: "rawg".to_string(),
                message: format!("Request to {} failed: {}", resource, e),
            })?;

        if !response.status().is_success() {
            return Err(BrowserError::Provider {
                provider: "rawg".to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| BrowserError::Provider {
                provider: "rawg".to_string(),
                message: format!("Invalid JSON: {}", e),
            })?;

        Ok(body)
    }
}

#[async_trait]
impl CatalogSource for RawgProvider {
    async fn fetch(&self, resource: &str, params: &QueryParams) -> Option<Value> {
        match self.try_fetch(resource, params).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!("An error occurred while fetching {}: {}", resource, e);
                None
            }
        }
    }

    fn name(&self) -> &str {
        "rawg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::params;

    fn provider(base_url: &str, api_key: &str) -> RawgProvider {
        let config = Config {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            ..Config::default()
        };
        RawgProvider::new(&config).unwrap()
    }

    #[test]
    fn test_key_is_merged() {
        let rawg = provider("https://api.rawg.io/api", "secret");
        let query = rawg.query_with_key(&params([("search", "hades"), ("page_size", "1")]));

        assert_eq!(query.get("key").map(String::as_str), Some("secret"));
        assert_eq!(query.get("search").map(String::as_str), Some("hades"));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_configured_key_overrides_caller_key() {
        let rawg = provider("https://api.rawg.io/api", "secret");
        let query = rawg.query_with_key(&params([("key", "other")]));
        assert_eq!(query.get("key").map(String::as_str), Some("secret"));
    }

    /// Answer a single request with a raw HTTP response, returning the request head
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf[..n]).to_string()
        });

        (base_url, handle)
    }

    #[tokio::test]
    async fn test_success_returns_body_and_sends_key() {
        let (base_url, server) = serve_once("200 OK", r#"{"count": 0, "results": []}"#).await;
        let rawg = provider(&base_url, "secret");

        let body = rawg.fetch("games", &params([("search", "celeste")])).await.unwrap();
        assert_eq!(body["count"], 0);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/games?"));
        assert!(request.contains("key=secret"));
        assert!(request.contains("search=celeste"));
    }

    #[tokio::test]
    async fn test_unauthorized_yields_none() {
        let (base_url, server) = serve_once("401 Unauthorized", r#"{"error": "The key parameter is not provided"}"#).await;
        let rawg = provider(&base_url, "");

        assert!(rawg.fetch("genres", &QueryParams::new()).await.is_none());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_yields_none() {
        let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;
        let rawg = provider(&base_url, "secret");

        assert!(rawg.fetch("games", &QueryParams::new()).await.is_none());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_json_yields_none() {
        let (base_url, server) = serve_once("200 OK", "not json").await;
        let rawg = provider(&base_url, "secret");

        assert!(rawg.fetch("games", &QueryParams::new()).await.is_none());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_host_yields_none() {
        // Nothing listens on port 1
        let rawg = provider("http://127.0.0.1:1/api", "secret");
        assert!(rawg.fetch("genres", &QueryParams::new()).await.is_none());
    }

    #[tokio::test]
    #[ignore] // Requires network access and RAWG_API_KEY
    async fn test_rawg_genres() {
        let config = Config::from_env();
        let rawg = RawgProvider::new(&config).unwrap();
        let body = rawg.fetch("genres", &QueryParams::new()).await.unwrap();
        assert!(body["results"].as_array().is_some_and(|r| !r.is_empty()));
    }
}
