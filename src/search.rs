use scraper::{Html, Selector};
use std::time::Duration;

use crate::error::SourceError;
use crate::models::{Category, CompanyQuery, Fragment, Provenance};
use crate::resolver::DataSource;

const SEARCH_URL: &str = "https://html.duckduckgo.com/html/";
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const QUERY_SUFFIX: &str = "employee reviews work culture";
const MAX_SNIPPETS: usize = 10;

/// Result-snippet selectors, most specific first. Search engines change
/// their markup often, so a miss here is expected.
pub const SNIPPET_SELECTORS: &[&str] = &[
    ".result__snippet",
    "a.result__snippet",
    "div.VwiC3b",
    "span.aCOpRe",
    ".b_caption p",
];

/// Collects snippet texts for the first selector that matches anything.
pub fn extract_snippets(html: &str, selectors: &[&str]) -> Vec<String> {
    let document = Html::parse_document(html);

    for selector in selectors {
        let Ok(parsed) = Selector::parse(selector) else {
            log::debug!("Skipping invalid selector: {}", selector);
            continue;
        };

        let snippets: Vec<String> = document
            .select(&parsed)
            .map(|element| clean_snippet(&element.text().collect::<Vec<_>>().join(" ")))
            .filter(|text| !text.is_empty())
            .take(MAX_SNIPPETS)
            .collect();

        if !snippets.is_empty() {
            return snippets;
        }
    }

    Vec::new()
}

/// Collapses whitespace and strips a leading "Mar 3, 2024 — " style date stamp.
fn clean_snippet(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let re = match regex::Regex::new(r"^[A-Z][a-z]{2} \d{1,2}, \d{4}\s*[—–-]\s*") {
        Ok(re) => re,
        Err(_) => return collapsed,
    };
    re.replace(&collapsed, "").trim().to_string()
}

#[derive(Debug)]
pub struct SearchSnippetSource {
    endpoint: String,
    timeout: Duration,
}

impl SearchSnippetSource {
    pub fn new(timeout: Duration) -> Self {
        Self {
            endpoint: SEARCH_URL.to_string(),
            timeout,
        }
    }
}

impl DataSource for SearchSnippetSource {
    fn name(&self) -> &'static str {
        "web-search"
    }

    fn provenance(&self) -> Provenance {
        Provenance::LiveSearch
    }

    fn supports(&self, category: Category) -> bool {
        category == Category::Culture
    }

    fn fetch(&self, company: &CompanyQuery, _category: Category) -> Result<Vec<Fragment>, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        let query = format!("{} {}", company, QUERY_SUFFIX);
        let response = client.get(&self.endpoint).query(&[("q", query.as_str())]).send()?;

        if !response.status().is_success() {
            return Err(SourceError::Unavailable(format!(
                "search request failed with status {}",
                response.status()
            )));
        }

        let html = response.text()?;
        Ok(extract_snippets(&html, SNIPPET_SELECTORS)
            .into_iter()
            .map(Fragment::snippet)
            .collect())
    }
}
