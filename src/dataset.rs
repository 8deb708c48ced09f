use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::SourceError;
use crate::models::{Category, CompanyQuery, CompanyRecord, Fragment, Provenance};
use crate::resolver::DataSource;

/// Company records loaded once at startup and never mutated afterwards.
#[derive(Debug, Default)]
pub struct Dataset {
    records: HashMap<String, CompanyRecord>,
    folded: HashMap<String, String>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the dataset file, degrading to an empty dataset when the file
    /// is missing or unusable.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::warn!("Dataset {} not found; cached lookups disabled", path.display());
            return Self::empty();
        }
        match Self::read(path) {
            Ok(dataset) => {
                log::info!("Loaded {} companies from {}", dataset.len(), path.display());
                dataset
            }
            Err(e) => {
                log::warn!("Ignoring dataset {}: {:#}", path.display(), e);
                Self::empty()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Parses a `{ "<company>": { ...record... } }` document. Records that do
    /// not match the schema are skipped.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("Dataset is not valid JSON")?;
        let entries = value
            .as_object()
            .ok_or_else(|| anyhow!("Dataset must be a JSON object keyed by company name"))?;

        let mut dataset = Self::empty();
        for (name, entry) in entries {
            match serde_json::from_value::<CompanyRecord>(entry.clone()) {
                Ok(record) => dataset.insert(name.clone(), record),
                Err(e) => log::warn!("Skipping malformed dataset record '{}': {}", name, e),
            }
        }
        Ok(dataset)
    }

    pub fn insert(&mut self, name: String, record: CompanyRecord) {
        // first spelling wins the case-folded slot
        self.folded
            .entry(name.to_lowercase())
            .or_insert_with(|| name.clone());
        self.records.insert(name, record);
    }

    /// Exact name first, then case-folded.
    pub fn lookup(&self, company: &CompanyQuery) -> Option<&CompanyRecord> {
        self.records.get(company.as_str()).or_else(|| {
            self.folded
                .get(&company.folded())
                .and_then(|name| self.records.get(name))
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub struct DatasetSource {
    dataset: Dataset,
}

impl DatasetSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DataSource for DatasetSource {
    fn name(&self) -> &'static str {
        "dataset"
    }

    fn provenance(&self) -> Provenance {
        Provenance::Cache
    }

    fn supports(&self, _category: Category) -> bool {
        true
    }

    fn fetch(&self, company: &CompanyQuery, category: Category) -> Result<Vec<Fragment>, SourceError> {
        Ok(self
            .dataset
            .lookup(company)
            .map(|record| record.fragments(category))
            .unwrap_or_default())
    }
}
