use serde::Deserialize;
use std::time::Duration;

use crate::error::SourceError;
use crate::models::{Category, CompanyQuery, Fragment, NewsItem, Provenance};
use crate::resolver::DataSource;

const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
const PAGE_SIZE: &str = "20";

#[derive(Debug, Deserialize)]
struct NewsApiSourceName {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    #[serde(default)]
    source: Option<NewsApiSourceName>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

/// Decodes a news-search payload into items, dropping removed or untitled articles.
pub fn parse_news_response(body: &str) -> Result<Vec<NewsItem>, SourceError> {
    let response: NewsApiResponse =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;

    if response.status != "ok" {
        return Err(SourceError::Unavailable(format!(
            "news API returned status '{}': {}",
            response.status,
            response.message.unwrap_or_default()
        )));
    }

    Ok(response
        .articles
        .into_iter()
        .filter_map(|article| {
            let title = article.title.unwrap_or_default().trim().to_string();
            if title.is_empty() || title == "[Removed]" {
                return None;
            }
            Some(NewsItem {
                title,
                description: article.description.unwrap_or_default(),
                link: article.url.unwrap_or_default(),
                source: article.source.and_then(|s| s.name).unwrap_or_default(),
                published_at: article.published_at.unwrap_or_default(),
            })
        })
        .collect())
}

pub fn build_query(company: &CompanyQuery, qualifiers: &str) -> String {
    let qualifiers = qualifiers.trim();
    if qualifiers.is_empty() {
        format!("\"{}\"", company)
    } else {
        format!("\"{}\" AND {}", company, qualifiers)
    }
}

#[derive(Debug)]
pub struct NewsApiSource {
    api_key: String,
    language: String,
    qualifiers: String,
    endpoint: String,
    timeout: Duration,
}

impl NewsApiSource {
    pub fn new(api_key: String, language: String, qualifiers: String, timeout: Duration) -> Self {
        Self {
            api_key,
            language,
            qualifiers,
            endpoint: NEWS_API_URL.to_string(),
            timeout,
        }
    }

    fn client(&self) -> Result<reqwest::blocking::Client, SourceError> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(SourceError::from)
    }
}

impl DataSource for NewsApiSource {
    fn name(&self) -> &'static str {
        "news-api"
    }

    fn provenance(&self) -> Provenance {
        Provenance::LiveNews
    }

    fn supports(&self, category: Category) -> bool {
        category == Category::News
    }

    fn fetch(&self, company: &CompanyQuery, _category: Category) -> Result<Vec<Fragment>, SourceError> {
        let query = build_query(company, &self.qualifiers);
        let response = self
            .client()?
            .get(&self.endpoint)
            .query(&[
                ("q", query.as_str()),
                ("language", self.language.as_str()),
                ("sortBy", "publishedAt"),
                ("pageSize", PAGE_SIZE),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(SourceError::Unavailable(format!(
                "news API request failed with status {}",
                status
            )));
        }

        let body = response.text()?;
        let items = parse_news_response(&body)?;
        Ok(items.into_iter().map(Fragment::News).collect())
    }
}
