use url::Url;

use crate::error::CatalogError;

/// Public endpoint of the iTunes Search API
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Options for catalog queries
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog; `/search` and `/lookup` are appended to it
    pub base_url: Url,
    /// Search term used for the trending list
    pub trending_term: String,
    /// Search term used for the documentaries list
    pub documentary_term: String,
    /// Page size for trending, search and category queries
    pub page_size: usize,
    /// Page size for free-text video searches
    pub video_limit: usize,
    /// Page size for the documentaries list
    pub documentary_limit: usize,
    /// Page size for the related videos attached to a discovery
    pub related_limit: usize,
}

impl CatalogConfig {
    /// Default configuration pointed at a different catalog host
    ///
    /// The URL must be able to carry a path (`mailto:` and `data:` URLs cannot).
    pub fn with_base_url(base_url: &str) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::UnusableBaseUrl {
                url: base_url.to_string(),
            });
        }

        Ok(Self {
            base_url,
            ..Default::default()
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("valid default base URL"),
            trending_term: "science discovery".to_string(),
            documentary_term: "documentary education science".to_string(),
            page_size: 20,
            video_limit: 10,
            documentary_limit: 20,
            related_limit: 5,
        }
    }
}
