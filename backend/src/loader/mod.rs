//! Dataset loader: one fetch, header stripping, normalization.
//!
//! The loader is fail-soft. Transport failures, error statuses and bad JSON
//! are logged and turned into an empty list, so callers only ever see
//! "no results", never an error value.
//!
//! ```rust,ignore
//! use infosheet::{DatasetLoader, Language, SheetConfig};
//!
//! let loader = DatasetLoader::new(SheetConfig::from_env()?);
//! let sites = loader.load("리포트", Language::Korean).await;
//! ```

use crate::api::logs::{log_error, log_info, log_success, log_warning};
use crate::config::SheetConfig;
use crate::models::{Language, SiteRecord};
use crate::normalize::{normalize_grid, SheetRecord};
use crate::source::SheetsClient;

/// Loads typed records from one spreadsheet.
#[derive(Clone)]
pub struct DatasetLoader {
    client: SheetsClient,
}

impl DatasetLoader {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            client: SheetsClient::new(config),
        }
    }

    pub fn client(&self) -> &SheetsClient {
        &self.client
    }

    /// Load the industry sites of `tab`, with placeholders in `language`.
    pub async fn load(&self, tab: &str, language: Language) -> Vec<SiteRecord> {
        self.load_as(tab, language).await
    }

    /// Load any record layout from `tab`.
    ///
    /// Rows come back in sheet order. Never fails; see the module docs.
    pub async fn load_as<R: SheetRecord>(&self, tab: &str, language: Language) -> Vec<R> {
        log_info(format!("📖 Loading '{}' ({})", tab, language));

        match self.client.fetch_values(tab).await {
            Ok(grid) if grid.is_empty() => {
                log_warning(format!("Sheet tab '{}' is empty", tab));
                Vec::new()
            }
            Ok(grid) => {
                let records: Vec<R> = normalize_grid(&grid, language);
                log_success(format!("Normalized {} records", records.len()));
                records
            }
            Err(e) => {
                log_error(format!("API request failed for '{}': {}", tab, e));
                Vec::new()
            }
        }
    }
}
