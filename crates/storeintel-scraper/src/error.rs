use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    /// The storefront homepage could not be fetched. This is the only fetch
    /// failure that aborts a whole insights run.
    #[error("website not found or inaccessible: {url} ({reason})")]
    UnreachableSite { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ScraperError {
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::UnreachableSite { .. })
    }
}
