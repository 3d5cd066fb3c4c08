//! # Infosheet - industry information sites from a Google Sheet
//!
//! Fetches a sheet tab through the Sheets values API, normalizes the raw
//! grid into typed [`SiteRecord`]s, filters them by a search query and
//! exports the contact columns as CSV.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Sheets API  │────▶│   Loader    │────▶│   Search    │────▶│  Terminal / │
//! │ (values)    │     │ (normalize) │     │  (filter)   │     │  HTTP view  │
//! └─────────────┘     └──────┬──────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │ CSV export  │
//!                     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use infosheet::{filter, DatasetLoader, Language, SheetConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = DatasetLoader::new(SheetConfig::from_env()?);
//!     let sites = loader.load("Report", Language::English).await;
//!     for site in filter(&sites, "statistics") {
//!         println!("{}", site.site_name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Sheet configuration and constants
//! - [`models`] - Language, records, export row
//! - [`normalize`] - Raw row to record mapping
//! - [`source`] - Sheets values client
//! - [`loader`] - Fail-soft dataset loader
//! - [`search`] - Query filter
//! - [`export`] - Contact CSV export
//! - [`view`] - View state, labels, text rendering
//! - [`api`] - HTTP server and log streaming

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Pipeline
pub mod normalize;
pub mod source;
pub mod loader;
pub mod search;
pub mod export;

// Presentation
pub mod view;

// HTTP API
pub mod api;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{SheetConfig, EXPORT_FILE_NAME};

pub use error::{AppError, AppResult, ConfigError, ExportError, SourceError};

pub use models::{ContactRow, Grid, Language, Professor, RawRow, SiteRecord, UniversityRecord};

pub use normalize::{normalize, normalize_grid, SheetRecord};

pub use source::SheetsClient;

pub use loader::DatasetLoader;

pub use search::{filter, Searchable};

pub use export::{export_csv, write_csv_file, write_csv_to};

pub use view::{
    labels, render_card, render_lines, render_page, render_university, Labels, LoadTicket,
    ViewController,
};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
