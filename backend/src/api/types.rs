//! REST API types.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::{Language, SiteRecord};

/// Query string of `/api/sites` and `/api/export`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SitesParams {
    /// `국문`/`ko` or `영문`/`en`; Korean when absent.
    pub lang: Option<String>,
    /// Sheet tab; the language's own tab when absent.
    pub tab: Option<String>,
    /// Search query; everything when absent.
    pub q: Option<String>,
}

/// Response of `/api/sites`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitesResponse {
    pub language: Language,
    pub tab: String,
    /// Tabs offered for `language`
    pub tabs: Vec<String>,
    /// Records loaded from the tab
    pub total: usize,
    /// Records matching the query
    pub matched: usize,
    /// RFC 3339 UTC time of the load
    pub fetched_at: String,
    pub sites: Vec<SiteRecord>,
}

impl SitesResponse {
    pub fn new(language: Language, tab: String, total: usize, sites: Vec<SiteRecord>) -> Self {
        Self {
            language,
            tab,
            tabs: language.tabs().iter().map(|t| t.to_string()).collect(),
            total,
            matched: sites.len(),
            fetched_at: chrono::Utc::now().to_rfc3339(),
            sites,
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
        "sites": [],
    })
}
