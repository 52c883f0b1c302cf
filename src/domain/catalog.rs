//! Catalog rows and search filtering
//!
//! The catalog lists every platform that can be installed. `search` narrows it
//! down with a case-insensitive substring match against the whole serialized
//! row, so a query hits names, titles, descriptions and package names alike.

use serde::{Deserialize, Serialize};

/// Query that disables filtering
pub const MATCH_ALL_QUERY: &str = "all";

/// One platform row from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable platform identifier
    #[serde(rename = "type")]
    pub type_id: String,
    /// Human readable title
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// Names of the packages the platform declares
    #[serde(default)]
    pub packages: Vec<String>,
}

impl CatalogEntry {
    /// Whether the lowercased serialized row contains `query` (already lowercased)
    fn matches(&self, query: &str) -> bool {
        serde_json::to_string(self)
            .map(|data| data.to_lowercase().contains(query))
            .unwrap_or(false)
    }
}

/// Lazy iterator over the catalog entries matching a query
///
/// Clone it before consuming to walk the same matches again.
#[derive(Debug, Clone)]
pub struct CatalogMatches<'a> {
    entries: std::slice::Iter<'a, CatalogEntry>,
    query: Option<String>,
}

impl<'a> Iterator for CatalogMatches<'a> {
    type Item = &'a CatalogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        match self.query.as_deref() {
            Some(query) => self.entries.by_ref().find(|entry| entry.matches(query)),
            None => self.entries.next(),
        }
    }
}

/// Filter catalog entries by a search query, keeping catalog order
///
/// `None`, an empty query and the literal `all` keep every entry.
pub fn filter_catalog<'a>(entries: &'a [CatalogEntry], query: Option<&str>) -> CatalogMatches<'a> {
    let query = query
        .filter(|q| !q.is_empty() && *q != MATCH_ALL_QUERY)
        .map(str::to_lowercase);

    CatalogMatches {
        entries: entries.iter(),
        query,
    }
}
