use crate::config::Config;
use crate::dataset::{Dataset, DatasetSource};
use crate::error::{ConfigError, SourceError};
use crate::models::{Category, CompanyQuery, Fragment, Provenance};
use crate::news::NewsApiSource;
use crate::search::SearchSnippetSource;
use crate::synthetic::{SyntheticDataProvider, SyntheticSource};

// --- Source trait ---

pub trait DataSource {
    fn name(&self) -> &'static str;
    fn provenance(&self) -> Provenance;
    fn supports(&self, category: Category) -> bool;
    fn fetch(&self, company: &CompanyQuery, category: Category) -> Result<Vec<Fragment>, SourceError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceFailure {
    pub source: &'static str,
    pub error: SourceError,
}

impl SourceFailure {
    pub fn describe(&self) -> String {
        format!("{}: {}", self.source, self.error)
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub category: Category,
    pub fragments: Vec<Fragment>,
    pub provenance: Provenance,
    pub failures: Vec<SourceFailure>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

// --- Resolver ---

/// Tries sources in priority order and keeps the first non-empty answer.
pub struct SourceResolver {
    sources: Vec<Box<dyn DataSource>>,
}

impl SourceResolver {
    pub fn new(sources: Vec<Box<dyn DataSource>>) -> Self {
        Self { sources }
    }

    /// Builds the standard chain: live news, live search, dataset, synthetic.
    /// Fails only on misconfiguration.
    pub fn from_config(config: &Config, dataset: Dataset) -> Result<Self, ConfigError> {
        config.validate(!dataset.is_empty())?;

        let mut sources: Vec<Box<dyn DataSource>> = Vec::new();
        if config.live {
            if let Some(key) = &config.news_api_key {
                sources.push(Box::new(NewsApiSource::new(
                    key.clone(),
                    config.news_language.clone(),
                    config.news_qualifiers.clone(),
                    config.timeout,
                )));
            }
            if config.live_search {
                sources.push(Box::new(SearchSnippetSource::new(config.timeout)));
            }
        }
        if !dataset.is_empty() {
            sources.push(Box::new(DatasetSource::new(dataset)));
        }
        if config.synthetic {
            sources.push(Box::new(SyntheticSource::new(SyntheticDataProvider::new(
                config.seed,
            ))));
        }
        Ok(Self::new(sources))
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn resolve(&self, company: &CompanyQuery, category: Category) -> Resolution {
        let mut failures = Vec::new();

        for source in self.sources.iter().filter(|s| s.supports(category)) {
            match source.fetch(company, category) {
                Ok(fragments) if !fragments.is_empty() => {
                    log::debug!(
                        "{} data for '{}' resolved by {} ({} fragments)",
                        category,
                        company,
                        source.name(),
                        fragments.len()
                    );
                    return Resolution {
                        category,
                        fragments,
                        provenance: source.provenance(),
                        failures,
                    };
                }
                Ok(_) => {
                    log::debug!("{} returned no {} data for '{}'", source.name(), category, company);
                }
                Err(error) => {
                    log::warn!("{} failed for '{}' ({}): {}", source.name(), company, category, error);
                    failures.push(SourceFailure {
                        source: source.name(),
                        error,
                    });
                }
            }
        }

        Resolution {
            category,
            fragments: Vec::new(),
            provenance: Provenance::None,
            failures,
        }
    }
}
