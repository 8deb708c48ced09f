use thiserror::Error;

/// Problems that stop the pipeline before any resolution starts.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{source_name} is required but {variable} is not set. Set it with: export {variable}=your-key-here")]
    MissingCredential {
        source_name: &'static str,
        variable: &'static str,
    },

    #[error("No usable data source configured: live sources are off, no dataset was found and synthetic fallback is disabled")]
    NoDataSource,
}

/// A single source failing. Always recovered by moving on to the next source.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Unavailable(format!("timed out: {}", err))
        } else if err.is_decode() {
            SourceError::Malformed(err.to_string())
        } else {
            SourceError::Unavailable(err.to_string())
        }
    }
}
