use thiserror::Error;

/// Coarse classification of catalog failures, as seen by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog could not be reached or answered with something unusable
    Network,
    /// A lookup returned no results
    NotFound,
}

/// Errors that can occur when querying the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse catalog response from {url}: {source}")]
    ParseFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Catalog base URL {url} cannot carry a path")]
    UnusableBaseUrl { url: String },

    #[error("Catalog response for {query} has no results list")]
    MissingResults { query: &'static str },

    #[error("Discovery {id} not found")]
    NotFound { id: String },

    #[error("Catalog returned an unusable record for {id}: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: RecordError,
    },
}

impl CatalogError {
    /// Classify this error into one of the two failure kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::RequestFailed { .. }
            | CatalogError::HttpStatus { .. }
            | CatalogError::ParseFailed { .. }
            | CatalogError::InvalidUrl(_)
            | CatalogError::UnusableBaseUrl { .. }
            | CatalogError::MissingResults { .. }
            | CatalogError::InvalidRecord { .. } => ErrorKind::Network,
        }
    }
}

/// Errors raised while turning a raw catalog record into a view model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Record '{title}' has neither trackId nor collectionId")]
    MissingId { title: String },

    #[error("Record '{title}' has no preview URL")]
    MissingPreview { title: String },

    #[error("Record does not match the catalog schema: {reason}")]
    Malformed { reason: String },
}
