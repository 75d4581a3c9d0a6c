use thiserror::Error;

/// Error type for scraping operations. Nothing is caught or retried inside
/// the crawler; any failure aborts the whole run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP fetch failure
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// The embedded projects object is missing or still malformed after repair
    #[error("embedded data error: {0}")]
    Parse(String),

    /// A scraped text field matches no recognized pattern
    #[error("unrecognized text format: {0}")]
    Format(String),

    /// An expected HTML element or attribute is absent
    #[error("missing element: {0}")]
    MissingElement(String),
}
