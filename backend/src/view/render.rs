//! Plain-text rendering of site cards.

use crate::models::{Language, SiteRecord, UniversityRecord};
use crate::view::labels::labels;

/// Separator spreadsheet authors use for line breaks inside the contact cell.
pub const CONTACT_LINE_SEPARATOR: char = '-';

/// Split a contact cell into display lines.
///
/// Splits on `-`, trims every piece and drops the empty ones, keeping order.
pub fn render_lines(contact: &str) -> Vec<String> {
    contact
        .split(CONTACT_LINE_SEPARATOR)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// One site card:
///
/// ```text
/// Acme (Tech)
/// Main Service: Consulting
/// Coverage: Global
/// Contact:
///   Contact: x
///   Contact: y
/// Visit Website: acme.com
/// ```
pub fn render_card(site: &SiteRecord, language: Language) -> String {
    let l = labels(language);
    let mut lines = vec![
        format!("{} ({})", site.site_name, site.category),
        format!("{}{}", l.main_service, site.main_service),
        format!("{}{}", l.coverage, site.coverage),
        l.contact.to_string(),
    ];
    lines.extend(render_lines(&site.contact).into_iter().map(|line| format!("  {}", line)));
    lines.push(format!("{}: {}", l.website_link, site.website));
    lines.join("\n")
}

/// The result area of the page: loading text, "no results", or the cards.
pub fn render_page(sites: &[&SiteRecord], language: Language, loading: bool) -> String {
    let l = labels(language);
    if loading {
        return l.loading.to_string();
    }
    if sites.is_empty() {
        return l.no_results.to_string();
    }
    sites
        .iter()
        .map(|site| render_card(site, language))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One line per lab of the university directory.
pub fn render_university(lab: &UniversityRecord) -> String {
    format!(
        "{} {} - {} ({}, {}) [{}] {}",
        lab.university,
        lab.department,
        lab.lab,
        lab.professor.name,
        lab.professor.email,
        lab.professor.research_area,
        lab.website
    )
}
