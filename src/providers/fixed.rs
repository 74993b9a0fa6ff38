use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::providers::{CatalogSource, QueryParams};

/// A recorded `fetch` call
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCall {
    pub resource: String,
    pub params: QueryParams,
}

/// Catalog source answering from canned JSON documents.
///
/// Resources without a registered document behave like a failed request.
/// Every call is recorded so callers can check what would have been sent.
#[derive(Default)]
pub struct StaticSource {
    responses: HashMap<String, Value>,
    calls: Mutex<Vec<FetchCall>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `resource` with `body`
    pub fn with_response(mut self, resource: impl Into<String>, body: Value) -> Self {
        self.responses.insert(resource.into(), body);
        self
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self, resource: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.resource == resource)
            .count()
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self, resource: &str, params: &QueryParams) -> Option<Value> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(FetchCall {
                resource: resource.to_string(),
                params: params.clone(),
            });

        let body = self.responses.get(resource).cloned();
        if body.is_none() {
            tracing::error!("No canned response for {}", resource);
        }
        body
    }

    fn name(&self) -> &str {
        "static"
    }
}
