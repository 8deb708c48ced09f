use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";
pub const DEFAULT_DATASET_FILE: &str = "sample_reviews.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_QUALIFIERS: &str = "(employees OR workplace OR culture OR layoffs OR hiring)";

#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: Option<String>,
    pub dataset_path: PathBuf,
    /// Master switch for network sources.
    pub live: bool,
    pub live_search: bool,
    pub synthetic: bool,
    /// Treat a missing news API key as fatal instead of skipping the source.
    pub require_live: bool,
    pub seed: Option<u64>,
    pub timeout: Duration,
    pub top_n: usize,
    pub news_language: String,
    pub news_qualifiers: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_api_key: None,
            dataset_path: PathBuf::from(DEFAULT_DATASET_FILE),
            live: true,
            live_search: true,
            synthetic: true,
            require_live: false,
            seed: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            top_n: DEFAULT_TOP_N,
            news_language: "en".to_string(),
            news_qualifiers: DEFAULT_QUALIFIERS.to_string(),
        }
    }
}

impl Config {
    /// Reads the API key from the environment; blank values count as unset.
    pub fn api_key_from_env() -> Option<String> {
        env::var(NEWS_API_KEY_VAR)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// Explicit path, else `./sample_reviews.json` when present, else the
    /// per-user data directory.
    pub fn resolve_dataset_path(explicit: Option<PathBuf>) -> PathBuf {
        if let Some(path) = explicit {
            return path;
        }
        let local = PathBuf::from(DEFAULT_DATASET_FILE);
        if local.exists() {
            return local;
        }
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "hrdd") {
            proj_dirs.data_dir().join(DEFAULT_DATASET_FILE)
        } else {
            local
        }
    }

    fn news_enabled(&self) -> bool {
        self.live && self.news_api_key.is_some()
    }

    /// Checked before any resolution starts.
    pub fn validate(&self, dataset_available: bool) -> Result<(), ConfigError> {
        if self.require_live && !self.news_enabled() {
            return Err(ConfigError::MissingCredential {
                source_name: "The live news source",
                variable: NEWS_API_KEY_VAR,
            });
        }
        let any_live = self.news_enabled() || (self.live && self.live_search);
        if !any_live && !dataset_available && !self.synthetic {
            return Err(ConfigError::NoDataSource);
        }
        Ok(())
    }

    /// One-time startup notice about disabled sources.
    pub fn report_startup(&self) {
        if !self.live {
            log::warn!("Offline mode: live news and web search are disabled");
        } else if self.news_api_key.is_none() {
            log::warn!(
                "{} not set; live news lookups disabled, falling back to search, dataset and synthetic data",
                NEWS_API_KEY_VAR
            );
        }
        if !self.synthetic {
            log::info!("Synthetic fallback disabled");
        }
    }
}
