//! Row normalization: raw spreadsheet rows to typed records.
//!
//! Columns are mapped by position. A cell that is absent (short row) or empty
//! is replaced by the placeholder of the active language, so a malformed row
//! never fails; it degrades to placeholders field by field.
//!
//! | Position | [`SiteRecord`] field      |
//! |----------|---------------------------|
//! | 0        | `site_name`               |
//! | 1        | `category`                |
//! | 2        | `main_service`            |
//! | 3        | `website`                 |
//! | 4        | `coverage`                |
//! | 5        | `contact`                 |
//! | 6        | `remarks`                 |
//! | 7        | `tools_used` (comma list) |

use crate::config::HEADER_ROWS as DEFAULT_HEADER_ROWS;
use crate::models::{Language, Professor, SiteRecord, UniversityRecord};

/// A record type that can be built from one positional spreadsheet row.
///
/// The loader is generic over this trait; each implementation is the column
/// mapping of one sheet layout.
pub trait SheetRecord: Sized {
    /// Leading rows of the tab that are not data.
    const HEADER_ROWS: usize = DEFAULT_HEADER_ROWS;

    /// Build a record from one row. Must not fail.
    fn from_row(row: &[String], language: Language) -> Self;
}

/// Normalize one row of the industry site sheet.
pub fn normalize(row: &[String], language: Language) -> SiteRecord {
    let placeholder = language.placeholder();

    SiteRecord {
        site_name: cell_or(row, 0, placeholder),
        category: cell_or(row, 1, placeholder),
        main_service: cell_or(row, 2, placeholder),
        website: cell_or(row, 3, placeholder),
        coverage: cell_or(row, 4, placeholder),
        contact: cell_or(row, 5, placeholder),
        remarks: cell_or(row, 6, placeholder),
        tools_used: split_list(row.get(7).map(String::as_str), placeholder),
    }
}

impl SheetRecord for SiteRecord {
    fn from_row(row: &[String], language: Language) -> Self {
        normalize(row, language)
    }
}

impl SheetRecord for UniversityRecord {
    /// The university sheet has Korean copy only; the language is ignored.
    fn from_row(row: &[String], _language: Language) -> Self {
        let placeholder = Language::Korean.placeholder();

        UniversityRecord {
            university: cell_or(row, 0, placeholder),
            department: cell_or(row, 1, placeholder),
            lab: cell_or(row, 2, placeholder),
            professor: Professor {
                name: cell_or(row, 3, placeholder),
                email: cell_or(row, 4, placeholder),
                research_area: cell_or(row, 5, placeholder),
            },
            website: cell_or(row, 6, placeholder),
        }
    }
}

/// Cell at `index` if present and non-empty, else the placeholder.
pub fn cell_or(row: &[String], index: usize, placeholder: &str) -> String {
    match row.get(index) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => placeholder.to_string(),
    }
}

/// Split a comma-delimited cell into trimmed, non-empty items.
///
/// Returns `[placeholder]` when the cell is absent or holds no items.
pub fn split_list(cell: Option<&str>, placeholder: &str) -> Vec<String> {
    let items: Vec<String> = cell
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();

    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items
    }
}

/// Drop the header rows and normalize the rest, preserving sheet order.
pub fn normalize_grid<R: SheetRecord>(grid: &[Vec<String>], language: Language) -> Vec<R> {
    grid.iter()
        .skip(R::HEADER_ROWS)
        .map(|row| R::from_row(row, language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn string_fields(site: &SiteRecord) -> [&str; 7] {
        [
            site.site_name.as_str(),
            site.category.as_str(),
            site.main_service.as_str(),
            site.website.as_str(),
            site.coverage.as_str(),
            site.contact.as_str(),
            site.remarks.as_str(),
        ]
    }

    #[test]
    fn test_full_row_maps_positionally() {
        let site = normalize(
            &row(&["Acme", "Tech", "Consulting", "acme.com", "Global", "c", "r", "a, b"]),
            Language::English,
        );

        assert_eq!(site.site_name, "Acme");
        assert_eq!(site.category, "Tech");
        assert_eq!(site.main_service, "Consulting");
        assert_eq!(site.website, "acme.com");
        assert_eq!(site.coverage, "Global");
        assert_eq!(site.contact, "c");
        assert_eq!(site.remarks, "r");
        assert_eq!(site.tools_used, vec!["a", "b"]);
    }

    #[test]
    fn test_every_truncation_is_fully_populated() {
        let full = row(&["n", "c", "s", "w", "g", "ct", "rm", "t1,t2"]);

        for lang in [Language::Korean, Language::English] {
            for len in 0..=full.len() {
                let site = normalize(&full[..len], lang);
                for (i, field) in string_fields(&site).iter().enumerate() {
                    assert!(!field.is_empty());
                    if i >= len {
                        assert_eq!(*field, lang.placeholder());
                    }
                }
                assert!(!site.tools_used.is_empty());
                if len < 8 {
                    assert_eq!(site.tools_used, vec![lang.placeholder()]);
                }
            }
        }
    }

    #[test]
    fn test_empty_cells_use_placeholder() {
        let site = normalize(&row(&["", "Tech", "", "", "", "", "", ""]), Language::Korean);

        assert_eq!(site.site_name, "정보 없음");
        assert_eq!(site.category, "Tech");
        assert_eq!(site.remarks, "정보 없음");
        assert_eq!(site.tools_used, vec!["정보 없음"]);
    }

    #[test]
    fn test_tools_skip_blank_items() {
        let site = normalize(
            &row(&["a", "b", "c", "d", "e", "f", "g", " tool1 , , tool2 ,"]),
            Language::English,
        );
        assert_eq!(site.tools_used, vec!["tool1", "tool2"]);

        let site = normalize(&row(&["a", "b", "c", "d", "e", "f", "g", " , "]), Language::English);
        assert_eq!(site.tools_used, vec!["Information not available"]);
    }

    #[test]
    fn test_whitespace_cell_is_kept() {
        let site = normalize(&row(&[" "]), Language::English);
        assert_eq!(site.site_name, " ");
    }

    #[test]
    fn test_university_row_nests_professor() {
        let uni = UniversityRecord::from_row(
            &row(&["서울대학교", "컴퓨터공학부", "AI 연구실", "홍길동", "hong@snu.ac.kr"]),
            Language::English,
        );

        assert_eq!(uni.university, "서울대학교");
        assert_eq!(uni.professor.name, "홍길동");
        assert_eq!(uni.professor.email, "hong@snu.ac.kr");
        assert_eq!(uni.professor.research_area, "정보 없음");
        assert_eq!(uni.website, "정보 없음");
    }

    #[test]
    fn test_normalize_grid_skips_headers_and_keeps_order() {
        let grid = vec![
            row(&["title"]),
            row(&["사이트명", "분야"]),
            row(&["B"]),
            row(&["A"]),
        ];
        let sites: Vec<SiteRecord> = normalize_grid(&grid, Language::Korean);

        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].site_name, "B");
        assert_eq!(sites[1].site_name, "A");
    }

    #[test]
    fn test_normalize_grid_headers_only() {
        let grid = vec![row(&["title"]), row(&["header"])];
        let sites: Vec<SiteRecord> = normalize_grid(&grid, Language::Korean);
        assert!(sites.is_empty());
    }
}
