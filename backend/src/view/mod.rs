//! View state for the site directory, independent of any rendering surface.
//!
//! The controller owns the language, the selected tab, the query, the loading
//! flag and the current record list. Every state change that needs new data
//! hands out a [`LoadTicket`]; the caller runs the load and reports back with
//! [`ViewController::complete_load`]. Only the ticket issued last is applied,
//! so a slow response for a tab the user already left cannot overwrite a
//! newer one.
//!
//! ```rust,ignore
//! let mut view = ViewController::new();
//! let ticket = view.begin_load();
//! let sites = loader.load(&ticket.tab, ticket.language).await;
//! view.complete_load(ticket, sites);
//! println!("{}", view.render());
//! ```

pub mod labels;
pub mod render;

pub use labels::{labels, Labels};
pub use render::{render_card, render_lines, render_page, render_university};

use crate::error::ExportResult;
use crate::export::export_csv;
use crate::models::{Language, SiteRecord};
use crate::search::filter;

/// Tab shown before the user picks one.
pub const INITIAL_TAB: &str = "리포트";

/// A load the controller is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    /// Monotonically increasing per controller.
    pub token: u64,
    pub language: Language,
    pub tab: String,
}

#[derive(Debug, Clone)]
pub struct ViewController {
    language: Language,
    tab: String,
    query: String,
    loading: bool,
    records: Vec<SiteRecord>,
    latest_token: u64,
}

impl ViewController {
    /// Korean, on the report tab, loading.
    pub fn new() -> Self {
        Self::with_state(Language::Korean, INITIAL_TAB)
    }

    pub fn with_state(language: Language, tab: impl Into<String>) -> Self {
        Self {
            language,
            tab: tab.into(),
            query: String::new(),
            loading: true,
            records: Vec::new(),
            latest_token: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn tab(&self) -> &str {
        &self.tab
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Full record list of the last applied load.
    pub fn records(&self) -> &[SiteRecord] {
        &self.records
    }

    pub fn tabs(&self) -> &'static [&'static str] {
        self.language.tabs()
    }

    pub fn labels(&self) -> &'static Labels {
        labels(self.language)
    }

    /// Switch language and jump to that language's own tab.
    pub fn toggle_language(&mut self) -> LoadTicket {
        self.language = self.language.toggled();
        self.tab = self.language.default_tab().to_string();
        self.begin_load()
    }

    /// Select a tab. Re-selecting the current tab does not reload.
    pub fn select_tab(&mut self, tab: &str) -> Option<LoadTicket> {
        if tab == self.tab {
            return None;
        }
        self.tab = tab.to_string();
        Some(self.begin_load())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a load for the current language and tab.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_token += 1;
        self.loading = true;
        LoadTicket {
            token: self.latest_token,
            language: self.language,
            tab: self.tab.clone(),
        }
    }

    /// Apply a finished load. Returns `false` and changes nothing when the
    /// ticket has been superseded.
    pub fn complete_load(&mut self, ticket: LoadTicket, records: Vec<SiteRecord>) -> bool {
        if ticket.token != self.latest_token {
            return false;
        }
        self.records = records;
        self.loading = false;
        true
    }

    /// Records matching the current query.
    pub fn visible(&self) -> Vec<&SiteRecord> {
        filter(&self.records, &self.query)
    }

    /// CSV of every loaded record, regardless of the query.
    pub fn export_csv(&self) -> ExportResult<Vec<u8>> {
        export_csv(&self.records)
    }

    /// Result area for the current state.
    pub fn render(&self) -> String {
        render_page(&self.visible(), self.language, self.loading)
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn site(name: &str) -> SiteRecord {
        normalize(&[name.to_string(), "Cat".to_string()], Language::Korean)
    }

    #[test]
    fn test_initial_state() {
        let view = ViewController::new();
        assert_eq!(view.language(), Language::Korean);
        assert_eq!(view.tab(), "리포트");
        assert!(view.is_loading());
        assert!(view.records().is_empty());
        assert_eq!(view.tabs(), &["리포트", "국문", "보고서2"]);
    }

    #[test]
    fn test_toggle_language_resets_tab() {
        let mut view = ViewController::new();

        let ticket = view.toggle_language();
        assert_eq!(view.language(), Language::English);
        assert_eq!(view.tab(), "영문");
        assert_eq!(ticket.tab, "영문");
        assert_eq!(ticket.language, Language::English);

        view.toggle_language();
        assert_eq!(view.language(), Language::Korean);
        assert_eq!(view.tab(), "국문");
    }

    #[test]
    fn test_select_same_tab_does_not_reload() {
        let mut view = ViewController::new();
        assert!(view.select_tab("리포트").is_none());

        let ticket = view.select_tab("보고서2").unwrap();
        assert_eq!(ticket.tab, "보고서2");
        assert!(view.is_loading());
    }

    #[test]
    fn test_tokens_increase() {
        let mut view = ViewController::new();
        let a = view.begin_load();
        let b = view.select_tab("국문").unwrap();
        let c = view.toggle_language();
        assert!(a.token < b.token && b.token < c.token);
    }

    #[test]
    fn test_latest_load_wins_regardless_of_completion_order() {
        let mut view = ViewController::new();
        let old = view.begin_load();
        let new = view.select_tab("국문").unwrap();

        assert!(view.complete_load(new, vec![site("new")]));
        assert!(!view.complete_load(old, vec![site("old")]));

        assert_eq!(view.records().len(), 1);
        assert_eq!(view.records()[0].site_name, "new");
        assert!(!view.is_loading());
    }

    #[test]
    fn test_stale_completion_keeps_loading() {
        let mut view = ViewController::new();
        let old = view.begin_load();
        let _pending = view.toggle_language();

        assert!(!view.complete_load(old, vec![site("old")]));
        assert!(view.is_loading());
        assert!(view.records().is_empty());
    }

    #[test]
    fn test_reload_replaces_list_wholesale() {
        let mut view = ViewController::new();
        let t = view.begin_load();
        view.complete_load(t, vec![site("a"), site("b")]);

        let t = view.select_tab("국문").unwrap();
        view.complete_load(t, vec![site("c")]);

        let names: Vec<&str> = view.records().iter().map(|s| s.site_name.as_str()).collect();
        assert_eq!(names, vec!["c"]);
    }

    #[test]
    fn test_query_filters_view_but_not_export() {
        let mut view = ViewController::new();
        let t = view.begin_load();
        view.complete_load(t, vec![site("Alpha"), site("Beta")]);

        view.set_query("alp");
        assert_eq!(view.visible().len(), 1);

        let csv = String::from_utf8(view.export_csv().unwrap()).unwrap();
        assert!(csv.contains("Alpha"));
        assert!(csv.contains("Beta"));
    }

    #[test]
    fn test_render_uses_state() {
        let mut view = ViewController::new();
        assert_eq!(view.render(), "로딩 중...");

        let t = view.begin_load();
        view.complete_load(t, vec![]);
        assert_eq!(view.render(), "검색 결과가 없습니다.");

        let t = view.toggle_language();
        view.complete_load(t, vec![site("Alpha")]);
        view.set_query("zzz");
        assert_eq!(view.render(), "No results found.");
    }
}
