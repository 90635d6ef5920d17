// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

use crate::error::CatalogError;

use super::config::CatalogConfig;

/// Minimum number of characters (exclusive) a title word needs to count as a keyword
const MIN_KEYWORD_CHARS: usize = 3;

/// Maximum number of keywords taken from a title
const MAX_KEYWORDS: usize = 2;

/// A single read-only request against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogQuery<'a> {
    /// Podcasts matching the configured trending term
    Trending,
    /// A podcast together with its episodes
    Lookup { id: &'a str },
    /// Free-text search over podcasts and audiobooks
    Search { term: &'a str },
    /// Free-text search over movie titles
    Videos { term: &'a str },
    /// Movies matching the configured documentary term
    Documentaries,
    /// Movies matching keywords taken from a discovery title
    RelatedVideos { keywords: &'a str },
}

impl CatalogQuery<'_> {
    /// Short name used when reporting events for this query
    pub fn name(&self) -> &'static str {
        match self {
            CatalogQuery::Trending => "trending",
            CatalogQuery::Lookup { .. } => "details",
            CatalogQuery::Search { .. } => "search",
            CatalogQuery::Videos { .. } => "videos",
            CatalogQuery::Documentaries => "documentaries",
            CatalogQuery::RelatedVideos { .. } => "related-videos",
        }
    }

    /// Build the full request URL for this query
    pub fn to_url(&self, config: &CatalogConfig) -> Result<Url, CatalogError> {
        let endpoint = match self {
            CatalogQuery::Lookup { .. } => "lookup",
            _ => "search",
        };

        let mut url = config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::UnusableBaseUrl {
                url: config.base_url.to_string(),
            })?
            .pop_if_empty()
            .push(endpoint);

        {
            let mut pairs = url.query_pairs_mut();
            match self {
                CatalogQuery::Trending => {
                    pairs
                        .append_pair("term", &config.trending_term)
                        .append_pair("media", "podcast")
                        .append_pair("entity", "podcast")
                        .append_pair("limit", &config.page_size.to_string());
                }
                CatalogQuery::Lookup { id } => {
                    pairs
                        .append_pair("id", id)
                        .append_pair("entity", "podcastEpisode");
                }
                CatalogQuery::Search { term } => {
                    pairs
                        .append_pair("term", term)
                        .append_pair("media", "podcast,audiobook")
                        .append_pair("entity", "podcast,audiobook")
                        .append_pair("limit", &config.page_size.to_string());
                }
                CatalogQuery::Videos { term } => {
                    pairs
                        .append_pair("term", term)
                        .append_pair("media", "movie")
                        .append_pair("entity", "movie")
                        .append_pair("attribute", "movieTerm")
                        .append_pair("limit", &config.video_limit.to_string());
                }
                CatalogQuery::Documentaries => {
                    pairs
                        .append_pair("term", &config.documentary_term)
                        .append_pair("media", "movie")
                        .append_pair("entity", "movie")
                        .append_pair("limit", &config.documentary_limit.to_string());
                }
                CatalogQuery::RelatedVideos { keywords } => {
                    pairs
                        .append_pair("term", keywords)
                        .append_pair("media", "movie")
                        .append_pair("entity", "movie")
                        .append_pair("limit", &config.related_limit.to_string());
                }
            }
        }

        Ok(url)
    }
}

/// Derive search keywords from a discovery title
///
/// Keeps the first two space-separated words longer than three characters,
/// joined by a single space. Returns `None` when no word qualifies.
pub fn related_keywords(title: &str) -> Option<String> {
    let keywords: Vec<&str> = title
        .split(' ')
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
        .take(MAX_KEYWORDS)
        .collect();

    if keywords.is_empty() {
        None
    } else {
        Some(keywords.join(" "))
    }
}
