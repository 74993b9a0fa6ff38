use serde::{Deserialize, Serialize};

use crate::core::game::null_as_default;

/// List envelope shared by every RAWG list resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Total matches on the server, not the length of `results`
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,

    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,

    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}
