//! Error types for the Infosheet pipeline.
//!
//! - [`ConfigError`] - Missing or invalid sheet configuration
//! - [`SourceError`] - Tabular data source (Sheets API) failures
//! - [`ExportError`] - CSV serialization and file output
//! - [`AppError`] - Top-level errors for the CLI and HTTP server
//!
//! The dataset loader never returns a [`SourceError`]: it logs it and
//! degrades to an empty record list. The other types propagate with `?`.

use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building a [`crate::config::SheetConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is neither passed explicitly nor set in the environment.
    #[error("Missing {0} (set it in the environment or pass it on the command line)")]
    Missing(&'static str),

    /// The data source base URL does not parse.
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// A numeric setting does not parse.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

// =============================================================================
// Data Source Errors
// =============================================================================

/// Errors from the spreadsheet values endpoint.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure (DNS, connection refused, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Non-2xx response.
    #[error("API error (HTTP {status}): {message}")]
    Status { status: u16, message: String },

    /// Body is not a valid values response.
    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    /// The request URL could not be built from the sheet id and tab.
    #[error("Cannot build request URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SourceError::Timeout
        } else if e.is_decode() {
            SourceError::InvalidJson(e.to_string())
        } else {
            SourceError::Request(e.to_string())
        }
    }
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while producing the CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the export file failed.
    #[error("Export IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Application Errors (top-level)
// =============================================================================

/// Top-level error for the binary and the HTTP server.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for data source calls.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for the CLI and server.
pub type AppResult<T> = Result<T, AppError>;
