use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::industry::Industry;

/// A company name as typed by the user, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyQuery(String);

impl CompanyQuery {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-folded key used for dataset lookups.
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for CompanyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub published_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Integer(v) => write!(f, "{}", v),
            MetricValue::Float(v) => write!(f, "{:.1}", v),
            MetricValue::Text(v) => f.write_str(v),
        }
    }
}

pub type ReputationRecord = BTreeMap<String, MetricValue>;

/// Culture keyword to mention count.
pub type CultureKeywords = BTreeMap<String, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    News,
    Culture,
    Reputation,
}

impl Category {
    #[allow(dead_code)]
    pub const ALL: [Category; 3] = [Category::News, Category::Culture, Category::Reputation];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::News => "news",
            Category::Culture => "culture",
            Category::Reputation => "reputation",
        };
        f.write_str(name)
    }
}

/// One raw piece of data handed back by a source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    News(NewsItem),
    Snippet { text: String },
    Metric { name: String, value: MetricValue },
    /// A culture keyword with how often reviewers mention it.
    Keyword { term: String, count: u32 },
}

impl Fragment {
    pub fn snippet(text: impl Into<String>) -> Self {
        Fragment::Snippet { text: text.into() }
    }

    /// The fields that carry analysable text, in concatenation order.
    pub fn text_fields(&self) -> Vec<&str> {
        match self {
            Fragment::News(item) => vec![item.title.as_str(), item.description.as_str()],
            Fragment::Snippet { text } => vec![text.as_str()],
            Fragment::Metric { .. } | Fragment::Keyword { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    LiveNews,
    LiveSearch,
    Cache,
    Synthetic,
    /// No source produced anything.
    None,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provenance::LiveNews => "live news API",
            Provenance::LiveSearch => "live web search",
            Provenance::Cache => "cached dataset",
            Provenance::Synthetic => "synthetic (fabricated)",
            Provenance::None => "none",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

pub const POSITIVE_THRESHOLD: f64 = 0.1;
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentVerdict {
    pub score: f64,
    pub label: SentimentLabel,
}

impl SentimentVerdict {
    pub fn from_score(score: f64) -> Self {
        let label = if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        Self { score, label }
    }

    pub fn neutral() -> Self {
        Self::from_score(0.0)
    }
}

/// A single entry of the cached dataset file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub metrics: ReputationRecord,
    #[serde(default)]
    pub positive_feedback: Vec<String>,
    #[serde(default)]
    pub negative_feedback: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub culture_keywords: CultureKeywords,
}

impl CompanyRecord {
    pub fn fragments(&self, category: Category) -> Vec<Fragment> {
        match category {
            Category::News => self.news.iter().cloned().map(Fragment::News).collect(),
            Category::Culture => {
                let mut out = Vec::new();
                if !self.summary.trim().is_empty() {
                    out.push(Fragment::snippet(self.summary.clone()));
                }
                out.extend(
                    self.positive_feedback
                        .iter()
                        .chain(&self.negative_feedback)
                        .chain(&self.highlights)
                        .map(|s| Fragment::snippet(s.clone())),
                );
                out
            }
            Category::Reputation => self
                .metrics
                .iter()
                .map(|(name, value)| Fragment::Metric {
                    name: name.clone(),
                    value: value.clone(),
                })
                .chain(self.culture_keywords.iter().map(|(term, &count)| Fragment::Keyword {
                    term: term.clone(),
                    count,
                }))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextSection {
    pub provenance: Provenance,
    pub failures: Vec<String>,
    pub fragments: Vec<Fragment>,
    pub corpus: String,
    /// `None` when the section has no data at all.
    pub sentiment: Option<SentimentVerdict>,
    pub keywords: Vec<(String, usize)>,
}

impl TextSection {
    pub fn has_data(&self) -> bool {
        !self.fragments.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReputationSection {
    pub provenance: Provenance,
    pub failures: Vec<String>,
    pub metrics: ReputationRecord,
    pub culture_keywords: CultureKeywords,
}

impl ReputationSection {
    /// Culture keywords, most mentioned first. Ties are alphabetical.
    pub fn ranked_keywords(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .culture_keywords
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub company: CompanyQuery,
    pub industry: Industry,
    pub generated_at: String,
    pub news: TextSection,
    pub culture: TextSection,
    pub reputation: ReputationSection,
    pub overall: Option<SentimentVerdict>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_query_trims_and_rejects_blank() {
        assert_eq!(CompanyQuery::new("  Acme Corp ").unwrap().as_str(), "Acme Corp");
        assert!(CompanyQuery::new("").is_none());
        assert!(CompanyQuery::new("   \t").is_none());
        assert_eq!(CompanyQuery::new("ACME").unwrap().folded(), "acme");
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(SentimentVerdict::from_score(0.11).label, SentimentLabel::Positive);
        assert_eq!(SentimentVerdict::from_score(0.1).label, SentimentLabel::Neutral);
        assert_eq!(SentimentVerdict::from_score(-0.1).label, SentimentLabel::Neutral);
        assert_eq!(SentimentVerdict::from_score(-0.1001).label, SentimentLabel::Negative);
        assert_eq!(SentimentVerdict::neutral().score, 0.0);
    }

    #[test]
    fn test_news_fragment_text_fields_keep_empty_description() {
        let fragment = Fragment::News(NewsItem {
            title: "Layoffs announced".to_string(),
            ..Default::default()
        });
        assert_eq!(fragment.text_fields(), vec!["Layoffs announced", ""]);
    }

    #[test]
    fn test_metric_value_deserializes_loosely() {
        let record: ReputationRecord = serde_json::from_str(
            r#"{"Satisfaction %": 82, "Glassdoor Rating (/5)": 4.1, "reviews count": "1.2k"}"#,
        )
        .unwrap();
        assert_eq!(record["Satisfaction %"], MetricValue::Integer(82));
        assert_eq!(record["Glassdoor Rating (/5)"], MetricValue::Float(4.1));
        assert_eq!(record["reviews count"], MetricValue::Text("1.2k".to_string()));
    }

    #[test]
    fn test_record_culture_fragments_in_order() {
        let record = CompanyRecord {
            summary: "Acme is known for R&D.".to_string(),
            positive_feedback: vec!["Great teams".to_string()],
            negative_feedback: vec!["Slow promotions".to_string()],
            highlights: vec!["Strong brand".to_string()],
            ..Default::default()
        };
        let texts: Vec<String> = record
            .fragments(Category::Culture)
            .iter()
            .map(|f| f.text_fields().join(" "))
            .collect();
        assert_eq!(
            texts,
            vec!["Acme is known for R&D.", "Great teams", "Slow promotions", "Strong brand"]
        );
    }

    #[test]
    fn test_culture_keywords_survive_load_and_save() {
        let raw = r#"{"summary": "ok", "culture_keywords": {"Trust": 12, "innovation": 30}}"#;
        let record: CompanyRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.culture_keywords["Trust"], 12);

        let saved = serde_json::to_value(&record).unwrap();
        assert_eq!(saved["culture_keywords"]["Trust"], 12);
        assert_eq!(saved["culture_keywords"]["innovation"], 30);
        let reloaded: CompanyRecord = serde_json::from_value(saved).unwrap();
        assert_eq!(reloaded, record);
    }

    #[test]
    fn test_reputation_fragments_carry_culture_keywords() {
        let mut record = CompanyRecord::default();
        record.metrics.insert("Satisfaction %".to_string(), MetricValue::Integer(80));
        record.culture_keywords.insert("Trust".to_string(), 9);
        let fragments = record.fragments(Category::Reputation);
        assert_eq!(fragments.len(), 2);
        assert_eq!(
            fragments[1],
            Fragment::Keyword {
                term: "Trust".to_string(),
                count: 9
            }
        );
        assert!(fragments[1].text_fields().is_empty());
    }

    #[test]
    fn test_ranked_keywords_most_mentioned_first() {
        let section = ReputationSection {
            provenance: Provenance::Cache,
            failures: Vec::new(),
            metrics: ReputationRecord::new(),
            culture_keywords: [("Agility", 7), ("Trust", 20), ("Empathy", 7)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        };
        assert_eq!(
            section.ranked_keywords(),
            vec![("Trust", 20), ("Agility", 7), ("Empathy", 7)]
        );
    }

    #[test]
    fn test_record_tolerates_missing_sections() {
        let record: CompanyRecord = serde_json::from_str(r#"{"summary": "ok"}"#).unwrap();
        assert!(record.fragments(Category::News).is_empty());
        assert!(record.fragments(Category::Reputation).is_empty());
        assert_eq!(record.fragments(Category::Culture).len(), 1);
    }
}
