use crate::aggregate::{aggregate, fragment_text};
use crate::industry::Classifier;
use crate::keywords;
use crate::models::{
    AnalysisResult, Category, CompanyQuery, CultureKeywords, Fragment, ReputationRecord,
    ReputationSection, TextSection,
};
use crate::resolver::{Resolution, SourceResolver};
use crate::sentiment::SentimentScorer;

/// Runs resolve, aggregate, score and extract for one company at a time.
pub struct Analyzer<'a> {
    resolver: &'a SourceResolver,
    scorer: SentimentScorer,
    classifier: Classifier,
    top_n: usize,
}

impl<'a> Analyzer<'a> {
    pub fn new(
        resolver: &'a SourceResolver,
        scorer: SentimentScorer,
        classifier: Classifier,
        top_n: usize,
    ) -> Self {
        Self {
            resolver,
            scorer,
            classifier,
            top_n,
        }
    }

    pub fn analyze(&self, company: &CompanyQuery) -> AnalysisResult {
        let news = self.text_section(self.resolver.resolve(company, Category::News));
        let culture = self.text_section(self.resolver.resolve(company, Category::Culture));
        let reputation = reputation_section(self.resolver.resolve(company, Category::Reputation));

        let all_texts: Vec<String> = news
            .fragments
            .iter()
            .chain(&culture.fragments)
            .map(fragment_text)
            .collect();
        let overall = if news.has_data() || culture.has_data() {
            Some(self.scorer.score(&all_texts))
        } else {
            None
        };

        AnalysisResult {
            company: company.clone(),
            industry: self.classifier.classify(company.as_str()),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            news,
            culture,
            reputation,
            overall,
        }
    }

    fn text_section(&self, resolution: Resolution) -> TextSection {
        log::debug!(
            "{}: {} fragments from {}",
            resolution.category,
            resolution.fragments.len(),
            resolution.provenance
        );
        let failures = resolution.failures.iter().map(|f| f.describe()).collect();
        let corpus = aggregate(&resolution.fragments);

        let (sentiment, keywords) = if resolution.is_empty() {
            (None, Vec::new())
        } else {
            let texts: Vec<String> = resolution.fragments.iter().map(fragment_text).collect();
            (Some(self.scorer.score(&texts)), keywords::extract(&corpus, self.top_n))
        };

        TextSection {
            provenance: resolution.provenance,
            failures,
            fragments: resolution.fragments,
            corpus,
            sentiment,
            keywords,
        }
    }
}

fn reputation_section(resolution: Resolution) -> ReputationSection {
    let mut metrics = ReputationRecord::new();
    let mut culture_keywords = CultureKeywords::new();
    for fragment in &resolution.fragments {
        match fragment {
            Fragment::Metric { name, value } => {
                metrics.insert(name.clone(), value.clone());
            }
            Fragment::Keyword { term, count } => {
                culture_keywords.insert(term.clone(), *count);
            }
            _ => {}
        }
    }

    ReputationSection {
        provenance: resolution.provenance,
        failures: resolution.failures.iter().map(|f| f.describe()).collect(),
        metrics,
        culture_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, DatasetSource};
    use crate::error::SourceError;
    use crate::models::{Provenance, SentimentLabel};
    use crate::resolver::tests::StubSource;
    use crate::sentiment::tests::FixedPolarity;
    use crate::synthetic::{metric_ranges, SyntheticDataProvider, SyntheticSource, KEYWORD_COUNTS};

    const ACME: &str = r#"{
        "Acme": {
            "news": [
                {"title": "Acme wins award", "description": "Best employer"},
                {"title": "Acme expands", "description": "New offices"},
                {"title": "Acme layoffs", "description": "Cuts announced"}
            ]
        }
    }"#;

    fn acme_scorer() -> SentimentScorer {
        SentimentScorer::new(Box::new(FixedPolarity::from_pairs(&[
            ("Acme wins award Best employer", 0.8),
            ("Acme expands New offices", 0.4),
            ("Acme layoffs Cuts announced", -0.6),
        ])))
    }

    #[test]
    fn test_cached_company_mean_polarity() {
        let dataset = Dataset::from_json_str(ACME).unwrap();
        let resolver = SourceResolver::new(vec![Box::new(DatasetSource::new(dataset))]);
        let analyzer = Analyzer::new(&resolver, acme_scorer(), Classifier::standard(), 5);

        let result = analyzer.analyze(&CompanyQuery::new("acme").unwrap());
        let verdict = result.news.sentiment.unwrap();
        assert!((verdict.score - 0.2).abs() < 1e-9);
        assert_eq!(verdict.label, SentimentLabel::Positive);
        assert_eq!(result.news.provenance, Provenance::Cache);
        assert!(result.news.corpus.starts_with("Acme wins award Best employer Acme expands"));
        assert_eq!(result.news.keywords[0], ("acme".to_string(), 3));
        assert!(result.news.keywords.len() <= 5);

        // no culture or reputation data in this record
        assert!(!result.culture.has_data());
        assert!(result.culture.sentiment.is_none());
        assert_eq!(result.reputation.provenance, Provenance::None);
    }

    #[test]
    fn test_unknown_company_without_key_falls_to_synthetic() {
        let resolver = SourceResolver::new(vec![
            Box::new(DatasetSource::new(Dataset::empty())),
            Box::new(SyntheticSource::new(SyntheticDataProvider::new(Some(11)))),
        ]);
        let analyzer = Analyzer::new(&resolver, SentimentScorer::vader(), Classifier::standard(), 10);

        let result = analyzer.analyze(&CompanyQuery::new("Nobody Knows Ltd").unwrap());
        assert_eq!(result.news.provenance, Provenance::Synthetic);
        assert_eq!(result.culture.provenance, Provenance::Synthetic);
        assert_eq!(result.reputation.provenance, Provenance::Synthetic);
        assert!(result.overall.is_some());

        for range in metric_ranges(result.industry) {
            assert!(range.contains(&result.reputation.metrics[range.name]));
        }
        assert!(!result.reputation.culture_keywords.is_empty());
        assert!(result.reputation.culture_keywords.values().all(|c| KEYWORD_COUNTS.contains(c)));
    }

    #[test]
    fn test_live_timeout_then_empty_cache_then_synthetic() {
        let resolver = SourceResolver::new(vec![
            Box::new(StubSource::new(
                "news-api",
                Provenance::LiveNews,
                Err(SourceError::Unavailable("timed out".to_string())),
            )),
            Box::new(DatasetSource::new(Dataset::empty())),
            Box::new(SyntheticSource::new(SyntheticDataProvider::new(Some(5)))),
        ]);
        let analyzer = Analyzer::new(&resolver, SentimentScorer::vader(), Classifier::standard(), 10);

        let result = analyzer.analyze(&CompanyQuery::new("Acme").unwrap());
        assert_eq!(result.news.provenance, Provenance::Synthetic);
        assert_eq!(result.news.failures.len(), 1);
        assert!(result.news.failures[0].contains("timed out"));
    }

    #[test]
    fn test_no_data_is_distinct_from_neutral() {
        let resolver = SourceResolver::new(vec![Box::new(StubSource::new(
            "cache",
            Provenance::Cache,
            Ok(vec![]),
        ))]);
        let analyzer = Analyzer::new(&resolver, SentimentScorer::vader(), Classifier::standard(), 10);

        let result = analyzer.analyze(&CompanyQuery::new("Acme").unwrap());
        assert!(result.news.sentiment.is_none());
        assert!(result.culture.sentiment.is_none());
        assert!(result.overall.is_none());
        assert!(result.news.keywords.is_empty());
        assert_eq!(result.news.corpus, "");
        assert!(result.reputation.metrics.is_empty());
    }

    #[test]
    fn test_neutral_text_still_reports_verdict() {
        let resolver = SourceResolver::new(vec![Box::new(StubSource::new(
            "cache",
            Provenance::Cache,
            Ok(vec![Fragment::snippet("The office is on the third floor")]),
        ))]);
        let analyzer = Analyzer::new(
            &resolver,
            SentimentScorer::new(Box::new(FixedPolarity::from_pairs(&[]))),
            Classifier::standard(),
            10,
        );

        let result = analyzer.analyze(&CompanyQuery::new("Acme").unwrap());
        let verdict = result.culture.sentiment.unwrap();
        assert_eq!(verdict.label, SentimentLabel::Neutral);
        assert_eq!(verdict.score, 0.0);
    }
}
