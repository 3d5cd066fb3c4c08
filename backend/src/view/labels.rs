//! Fixed UI copy for the two display languages.

use crate::models::Language;

/// All user-facing strings of the site directory for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub loading: &'static str,
    pub search_placeholder: &'static str,
    pub search: &'static str,
    /// Button that switches to the other language.
    pub toggle_language: &'static str,
    pub download: &'static str,
    pub no_results: &'static str,
    /// Prefix of the main service line (none in Korean).
    pub main_service: &'static str,
    pub coverage: &'static str,
    pub contact: &'static str,
    pub website_link: &'static str,
}

const KOREAN: Labels = Labels {
    title: "AI로 만드는 맞춤 정보 수집 사이트",
    subtitle: "산업정보, 경쟁사 분석, 시장동향 등 보고서 작성에 필요한 정보를 쉽게 모아드립니다.",
    loading: "로딩 중...",
    search_placeholder: "웹사이트명, 주요 서비스, 분야 검색...",
    search: "검색",
    toggle_language: "영문 보기",
    download: "연락처 및 서비스 CSV 다운로드",
    no_results: "검색 결과가 없습니다.",
    main_service: "",
    coverage: "서비스 범위: ",
    contact: "핵심 내용 요약:",
    website_link: "리포트 다운로드",
};

const ENGLISH: Labels = Labels {
    title: "Custom Information Collection Site Powered by AI",
    subtitle: "Easily gather information for reports including industry info, competitor analysis, and market trends.",
    loading: "Loading...",
    search_placeholder: "Search site name, services, categories...",
    search: "Search",
    toggle_language: "View in Korean",
    download: "Download Contact and Service CSV",
    no_results: "No results found.",
    main_service: "Main Service: ",
    coverage: "Coverage: ",
    contact: "Contact:",
    website_link: "Visit Website",
};

/// Copy for `language`.
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Korean => &KOREAN,
        Language::English => &ENGLISH,
    }
}
