use crate::canonical::MapToken;
use serde::{Deserialize, Serialize};

const MAP_QUERY: &str = "?map=";
const TOKEN_SEPARATOR: char = ',';

/// A faceted search URL and, once decoded, its canonical path.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalSearchUrl {
    pub raw_path: String,
    pub encoding: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_path: Option<String>,
}

impl CanonicalSearchUrl {
    pub fn new(raw_path: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            raw_path: raw_path.into(),
            encoding: encoding.into(),
            canonical_path: None,
        }
    }

    /// Splits the `path?map=tokens` form delivered by the search statistics feed.
    /// A URL without a `map` query gets an empty encoding.
    pub fn parse(url: &str) -> Self {
        match url.split_once(MAP_QUERY) {
            Some((path, encoding)) => Self::new(path, encoding),
            None => Self::new(url, ""),
        }
    }

    /// Path segments without the leading `/`.
    pub fn segments(&self) -> Vec<&str> {
        let path = self.raw_path.strip_prefix('/').unwrap_or(&self.raw_path);
        if path.is_empty() {
            return Vec::new();
        }
        path.split('/').collect()
    }

    pub fn tokens(&self) -> Vec<MapToken> {
        if self.encoding.is_empty() {
            return Vec::new();
        }
        self.encoding
            .split(TOKEN_SEPARATOR)
            .map(MapToken::parse)
            .collect()
    }
}
