//! Domain models for the site directory.
//!
//! - [`Language`] - The two display languages (국문 / 영문)
//! - [`SiteRecord`] - One industry information site, fully normalized
//! - [`ContactRow`] - The five-field projection written to the CSV export
//! - [`UniversityRecord`] / [`Professor`] - The university directory variant
//!
//! Records are built once per load by [`crate::normalize`] and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One spreadsheet row as returned by the data source. Trailing cells may be absent.
pub type RawRow = Vec<String>;

/// The raw two-dimensional grid of a sheet tab.
pub type Grid = Vec<RawRow>;

// =============================================================================
// Language
// =============================================================================

/// Display language. Selects the sheet tabs, the placeholder and the UI copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "국문")]
    Korean,
    #[serde(rename = "영문")]
    English,
}

impl Language {
    /// The label used by the sheet and the language toggle.
    pub fn label(self) -> &'static str {
        match self {
            Language::Korean => "국문",
            Language::English => "영문",
        }
    }

    /// Substituted for every missing or empty cell.
    pub fn placeholder(self) -> &'static str {
        match self {
            Language::Korean => "정보 없음",
            Language::English => "Information not available",
        }
    }

    /// Sheet tabs offered for this language, in display order.
    pub fn tabs(self) -> &'static [&'static str] {
        match self {
            Language::Korean => &["리포트", "국문", "보고서2"],
            Language::English => &["Report", "영문", "Report2"],
        }
    }

    /// Tab selected after switching to this language.
    pub fn default_tab(self) -> &'static str {
        self.label()
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Korean => Language::English,
            Language::English => Language::Korean,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "국문" | "ko" | "korean" => Ok(Language::Korean),
            "영문" | "en" | "english" => Ok(Language::English),
            other => Err(format!("unknown language '{}' (expected 국문/ko or 영문/en)", other)),
        }
    }
}

// =============================================================================
// Site Record
// =============================================================================

/// A normalized industry information site.
///
/// Every string field is non-empty and `tools_used` has at least one element;
/// missing cells hold the placeholder of the language the record was loaded in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub site_name: String,
    pub category: String,
    pub main_service: String,
    pub website: String,
    pub coverage: String,
    /// Multi-line note; lines are joined with `-` in the sheet.
    pub contact: String,
    pub remarks: String,
    pub tools_used: Vec<String>,
}

/// Row of the contact export, in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRow {
    pub site_name: String,
    pub category: String,
    pub main_service: String,
    pub contact: String,
    pub remarks: String,
}

impl From<&SiteRecord> for ContactRow {
    fn from(site: &SiteRecord) -> Self {
        Self {
            site_name: site.site_name.clone(),
            category: site.category.clone(),
            main_service: site.main_service.clone(),
            contact: site.contact.clone(),
            remarks: site.remarks.clone(),
        }
    }
}

// =============================================================================
// University Directory
// =============================================================================

/// Professor heading a lab in the university directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub name: String,
    pub email: String,
    pub research_area: String,
}

/// One lab of the university directory sheet. This sheet is Korean only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityRecord {
    pub university: String,
    pub department: String,
    pub lab: String,
    pub professor: Professor,
    pub website: String,
}
