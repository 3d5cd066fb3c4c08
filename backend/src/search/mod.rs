//! Substring search over loaded records.
//!
//! Recomputed from the full list on every query; there is no index.

use crate::models::{SiteRecord, UniversityRecord};

/// Records that expose a text to match search queries against.
pub trait Searchable {
    fn search_text(&self) -> String;
}

impl Searchable for SiteRecord {
    /// Site name, main service and category, space-joined.
    fn search_text(&self) -> String {
        format!("{} {} {}", self.site_name, self.main_service, self.category)
    }
}

impl Searchable for UniversityRecord {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.university, self.department, self.lab, self.professor.name
        )
    }
}

/// Records whose search text contains `query`, ignoring case, in input order.
///
/// An empty query matches everything.
pub fn filter<'a, R: Searchable>(records: &'a [R], query: &str) -> Vec<&'a R> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.search_text().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;
    use crate::normalize::normalize;

    fn site(name: &str, category: &str, service: &str) -> SiteRecord {
        let row: Vec<String> = [name, category, service, "", "", "", "", ""]
            .iter()
            .map(|s| s.to_string())
            .collect();
        normalize(&row, Language::English)
    }

    fn names<'a>(sites: &[&'a SiteRecord]) -> Vec<&'a str> {
        sites.iter().map(|s| s.site_name.as_str()).collect()
    }

    fn sample() -> Vec<SiteRecord> {
        vec![
            site("Statista", "Market data", "Statistics portal"),
            site("KOSIS", "Government", "National statistics"),
            site("Crunchbase", "Startups", "Company profiles"),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let sites = sample();
        let result = filter(&sites, "");
        assert_eq!(names(&result), vec!["Statista", "KOSIS", "Crunchbase"]);
    }

    #[test]
    fn test_case_insensitive_match() {
        let sites = sample();
        assert_eq!(names(&filter(&sites, "STATISTICS")), vec!["Statista", "KOSIS"]);
        assert_eq!(names(&filter(&sites, "kosis")), vec!["KOSIS"]);
    }

    #[test]
    fn test_matches_category() {
        let sites = sample();
        assert_eq!(names(&filter(&sites, "startups")), vec!["Crunchbase"]);
    }

    #[test]
    fn test_ignores_unsearched_fields() {
        let mut sites = sample();
        sites[0].coverage = "Worldwide".into();
        sites[0].contact = "Worldwide desk".into();
        assert!(filter(&sites, "worldwide").is_empty());
    }

    #[test]
    fn test_match_spans_joined_fields() {
        let sites = sample();
        // name + " " + main service
        assert_eq!(names(&filter(&sites, "kosis national")), vec!["KOSIS"]);
    }

    #[test]
    fn test_korean_query() {
        let sites = vec![site("통계청", "정부", "국가통계포털"), site("DART", "공시", "전자공시")];
        assert_eq!(names(&filter(&sites, "통계")), vec!["통계청"]);
    }

    #[test]
    fn test_every_result_contains_query() {
        let sites = sample();
        for q in ["a", "st", "S", "profiles", "zzz"] {
            for hit in filter(&sites, q) {
                assert!(hit.search_text().to_lowercase().contains(&q.to_lowercase()));
            }
        }
    }
}
