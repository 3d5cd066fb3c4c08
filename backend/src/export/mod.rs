//! Contact CSV export.
//!
//! Projects each record to [`ContactRow`] (site name, category, main service,
//! contact, remarks) and writes standard CSV: header row, CRLF terminators,
//! fields quoted when they contain a comma, quote or line break.
//!
//! Callers pass the full loaded list; the export never depends on the
//! current search query.

use std::fs;
use std::path::{Path, PathBuf};

use crate::api::logs::log_success;
use crate::config::EXPORT_FILE_NAME;
use crate::error::ExportResult;
use crate::models::{ContactRow, SiteRecord};

/// MIME type for the download response.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Serialize the contact projection of `records` to CSV bytes.
pub fn export_csv(records: &[SiteRecord]) -> ExportResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(ContactRow::from(record))?;
    }

    if records.is_empty() {
        writer.write_record(ContactRow::HEADERS)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}

impl ContactRow {
    /// Column names of the export, in order.
    pub const HEADERS: [&'static str; 5] = ["siteName", "category", "mainService", "contact", "remarks"];
}

/// Write the export as [`EXPORT_FILE_NAME`] inside `dir`.
pub fn write_csv_file(records: &[SiteRecord], dir: &Path) -> ExportResult<PathBuf> {
    write_csv_to(records, &dir.join(EXPORT_FILE_NAME))
}

/// Write the export to an explicit path, creating parent directories.
pub fn write_csv_to(records: &[SiteRecord], path: &Path) -> ExportResult<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let bytes = export_csv(records)?;
    fs::write(path, &bytes)?;
    log_success(format!("💾 Exported {} contacts to {}", records.len(), path.display()));
    Ok(path.to_path_buf())
}
