//! Application configuration.
//!
//! The sheet id and API key are passed explicitly into the loader through a
//! [`SheetConfig`]. [`SheetConfig::from_env`] reads them from the environment
//! (after loading `.env` if present); the CLI flags take precedence.

use std::env;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Google Sheets API base URL.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Default request timeout for the values endpoint.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default port for `infosheet serve`.
pub const DEFAULT_PORT: u16 = 3000;

/// Suggested file name for the contact export.
pub const EXPORT_FILE_NAME: &str = "industry_info_sites.csv";

/// Number of leading rows in every sheet tab that hold titles and column headers.
pub const HEADER_ROWS: usize = 2;

const SHEET_ID_VARS: &[&str] = &["SHEET_ID", "REACT_APP_SHEET_ID"];
const API_KEY_VARS: &[&str] = &["SHEETS_API_KEY", "REACT_APP_API_KEY"];
const BASE_URL_VAR: &str = "SHEETS_BASE_URL";
const TIMEOUT_VAR: &str = "SHEETS_TIMEOUT_SECS";

/// Connection settings for the tabular data source.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Spreadsheet identifier (the long id in the sheet URL).
    pub sheet_id: String,
    /// Static API key sent as the `key` query parameter.
    pub api_key: String,
    /// Scheme and host of the values endpoint, without trailing slash.
    pub base_url: String,
    /// Per-request timeout. `None` disables it.
    pub timeout: Option<Duration>,
}

impl SheetConfig {
    /// Create a configuration for the public Sheets API.
    pub fn new(sheet_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `SHEET_ID` and `SHEETS_API_KEY` are required (the `REACT_APP_` prefixed
    /// names are accepted as well). `SHEETS_BASE_URL` and
    /// `SHEETS_TIMEOUT_SECS` are optional.
    pub fn from_env() -> ConfigResult<Self> {
        Self::resolve(None, None)
    }

    /// Build a configuration where explicit values win over the environment.
    pub fn resolve(sheet_id: Option<String>, api_key: Option<String>) -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let sheet_id = sheet_id
            .or_else(|| first_var(SHEET_ID_VARS))
            .ok_or(ConfigError::Missing("SHEET_ID"))?;
        let api_key = api_key
            .or_else(|| first_var(API_KEY_VARS))
            .ok_or(ConfigError::Missing("SHEETS_API_KEY"))?;

        let mut config = Self::new(sheet_id, api_key);

        if let Some(url) = first_var(&[BASE_URL_VAR]) {
            config = config.with_base_url(&url)?;
        }

        if let Some(raw) = first_var(&[TIMEOUT_VAR]) {
            config.timeout = parse_timeout(&raw)?;
        }

        Ok(config)
    }

    /// Point the loader at another host (a proxy or a local stub).
    pub fn with_base_url(mut self, url: &str) -> ConfigResult<Self> {
        let trimmed = url.trim().trim_end_matches('/');
        reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Set or clear the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Timeout in whole seconds; `0` disables it.
fn parse_timeout(raw: &str) -> ConfigResult<Option<Duration>> {
    let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: TIMEOUT_VAR,
        value: raw.to_string(),
    })?;
    Ok((secs > 0).then_some(Duration::from_secs(secs)))
}

/// First non-empty value among the given environment variables.
fn first_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}
