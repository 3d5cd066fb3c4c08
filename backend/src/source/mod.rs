//! Client for the spreadsheet values endpoint (the tabular data source).
//!
//! One GET per call:
//!
//! ```text
//! {base_url}/v4/spreadsheets/{sheet_id}/values/{tab}?key={api_key}
//! ```
//!
//! The body carries an optional `values` field holding the grid. Errors are
//! returned as [`SourceError`]; the fail-soft policy lives in
//! [`crate::loader`], not here.

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::api::logs::{log_info_indent, log_success};
use crate::config::SheetConfig;
use crate::error::{SourceError, SourceResult};
use crate::models::Grid;

/// Values endpoint response
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    /// Absent when the range holds no data
    #[serde(default)]
    values: Option<Vec<Vec<Value>>>,
}

/// Google API error response
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Sheets values client. Cheap to clone; the connection pool is shared.
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    config: SheetConfig,
}

impl SheetsClient {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Request URL for a tab. The tab is percent-encoded as one path segment.
    pub fn values_url(&self, tab: &str) -> SourceResult<Url> {
        let mut url = Url::parse(&format!("{}/v4/spreadsheets", self.config.base_url))
            .map_err(|e| SourceError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(format!("{} cannot be a base", self.config.base_url)))?
            .push(&self.config.sheet_id)
            .push("values")
            .push(tab);

        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }

    /// Fetch the raw grid of a tab, header rows included.
    ///
    /// An empty or absent `values` field yields an empty grid.
    pub async fn fetch_values(&self, tab: &str) -> SourceResult<Grid> {
        let url = self.values_url(tab)?;
        log_info_indent(format!("Fetching sheet tab '{}'...", tab), 1);

        let mut request = self.http.get(url);
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(err) => match err.error.status {
                    Some(code) => format!("{} ({})", err.error.message, code),
                    None => err.error.message,
                },
                Err(_) => body.chars().take(200).collect(),
            };
            return Err(SourceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ValuesResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::InvalidJson(e.to_string()))?;

        let grid: Grid = parsed
            .values
            .unwrap_or_default()
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();

        log_success(format!("Received {} rows from '{}'", grid.len(), tab));
        Ok(grid)
    }
}

/// Text of one cell. Numbers and booleans keep their JSON form; null is empty.
fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> SheetsClient {
        SheetsClient::new(SheetConfig::new("sheet123", "secret"))
    }

    #[test]
    fn test_values_url_layout() {
        let url = client().values_url("Report").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet123/values/Report?key=secret"
        );
    }

    #[test]
    fn test_values_url_encodes_tab() {
        let url = client().values_url("보고서 2/A").unwrap();
        let s = url.as_str();
        assert!(s.contains("/values/%EB%B3%B4%EA%B3%A0%EC%84%9C%202%2FA?"));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("a")), "a");
        assert_eq!(cell_text(&json!(12)), "12");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&Value::Null), "");
    }

    #[test]
    fn test_missing_values_field_decodes() {
        let parsed: ValuesResponse =
            serde_json::from_str(r#"{"range": "Report!A1:Z1000", "majorDimension": "ROWS"}"#).unwrap();
        assert!(parsed.values.is_none());
    }
}
