// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{CatalogError, RecordError};
use crate::http::HttpClient;
use crate::model::{ContentType, Discovery, DiscoveryDetails, DiscoveryVideo, Episode, VideoKind};
use crate::report::{CatalogEvent, NoopReporter, SharedReporter};

use super::config::CatalogConfig;
use super::query::{CatalogQuery, related_keywords};
use super::record::{CatalogRecord, CatalogResponse};

/// Categories shown on the home feed next to the trending list
pub const HOME_CATEGORIES: [&str; 2] = ["science", "history"];

/// Everything the home feed shows, fetched in one go
#[derive(Debug, Clone, Serialize)]
pub struct HomeFeed {
    pub trending: Vec<Discovery>,
    pub science: Vec<Discovery>,
    pub history: Vec<Discovery>,
}

/// Read-only client for the discovery catalog
///
/// Every operation is a single attempt: no retries, no caching, no
/// timeouts beyond what the transport imposes. Queries share nothing but
/// the immutable configuration, so a client can serve concurrent callers.
pub struct CatalogClient<C> {
    http: C,
    config: CatalogConfig,
    reporter: SharedReporter,
}

impl<C: HttpClient> CatalogClient<C> {
    /// Create a client with the default configuration and no reporting
    pub fn new(http: C) -> Self {
        Self::with_config(http, CatalogConfig::default(), NoopReporter::shared())
    }

    /// Create a client with explicit configuration and reporter
    pub fn with_config(http: C, config: CatalogConfig, reporter: SharedReporter) -> Self {
        Self {
            http,
            config,
            reporter,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Podcasts matching the trending term, always tagged as podcasts
    pub async fn trending(&self) -> Result<Vec<Discovery>, CatalogError> {
        let query = CatalogQuery::Trending;
        let results = self.fetch_list(&query).await?;

        Ok(self.map_records(&query, results, |record| {
            Discovery::from_record_as(record, ContentType::Podcast)
        }))
    }

    /// A discovery with its episodes and related videos
    ///
    /// The first lookup result is the discovery itself, the rest are its
    /// episodes. A body with an empty or missing result list means the id is
    /// unknown. Related videos are fetched afterwards; if that fails the
    /// details are still returned, with no videos.
    pub async fn details(&self, id: &str) -> Result<DiscoveryDetails, CatalogError> {
        let query = CatalogQuery::Lookup { id };
        let mut results = self.fetch(&query).await?.unwrap_or_default().into_iter();

        let Some(parent) = results.next() else {
            let err = CatalogError::NotFound { id: id.to_string() };
            self.report_failure(&query, &err);
            return Err(err);
        };

        let parent = CatalogRecord::from_value(parent).map_err(|source| {
            let err = CatalogError::InvalidRecord {
                id: id.to_string(),
                source,
            };
            self.report_failure(&query, &err);
            err
        })?;

        let content_type = ContentType::from_kind(parent.kind.as_deref().unwrap_or_default());
        let discovery_id = parent.id().unwrap_or_else(|| id.to_string());
        let discovery = Discovery::with_id(&parent, discovery_id, content_type);

        let episodes = self.map_records(&query, results.collect(), |record| {
            Episode::from_record(record, &discovery.artwork_url)
        });

        let videos = match self.related_videos(&discovery.title).await {
            Ok(videos) => videos,
            Err(e) => {
                self.reporter.report(CatalogEvent::EnrichmentFailed {
                    discovery_id: discovery.id.clone(),
                    error: e.to_string(),
                });
                Vec::new()
            }
        };

        Ok(DiscoveryDetails {
            discovery,
            episodes,
            videos,
        })
    }

    /// Free-text search over podcasts and audiobooks
    pub async fn search(&self, term: &str) -> Result<Vec<Discovery>, CatalogError> {
        let query = CatalogQuery::Search { term };
        let results = self.fetch_list(&query).await?;

        Ok(self.map_records(&query, results, Discovery::from_record))
    }

    /// Discoveries for a category; the category name is used as the search term
    pub async fn by_category(&self, category: &str) -> Result<Vec<Discovery>, CatalogError> {
        self.search(category).await
    }

    /// Playable videos whose title matches `term`
    pub async fn videos(&self, term: &str) -> Result<Vec<DiscoveryVideo>, CatalogError> {
        self.fetch_videos(&CatalogQuery::Videos { term }, VideoKind::Preview)
            .await
    }

    /// Playable educational documentaries
    pub async fn documentaries(&self) -> Result<Vec<DiscoveryVideo>, CatalogError> {
        self.fetch_videos(&CatalogQuery::Documentaries, VideoKind::Documentary)
            .await
    }

    /// Playable videos related to a discovery title
    ///
    /// Titles without any word longer than three characters yield no
    /// keywords; no request is made for them.
    pub async fn related_videos(&self, title: &str) -> Result<Vec<DiscoveryVideo>, CatalogError> {
        let Some(keywords) = related_keywords(title) else {
            return Ok(Vec::new());
        };

        self.fetch_videos(
            &CatalogQuery::RelatedVideos {
                keywords: &keywords,
            },
            VideoKind::Related,
        )
        .await
    }

    /// The trending list plus the fixed home categories, fetched concurrently
    ///
    /// Only a trending failure fails the feed. A category that cannot be
    /// loaded is reported and shown as an empty section.
    pub async fn home(&self) -> Result<HomeFeed, CatalogError> {
        let [science, history] = HOME_CATEGORIES;

        let (trending, science_result, history_result) = futures::join!(
            self.trending(),
            self.by_category(science),
            self.by_category(history),
        );

        Ok(HomeFeed {
            trending: trending?,
            science: self.category_or_empty(science, science_result),
            history: self.category_or_empty(history, history_result),
        })
    }

    fn category_or_empty(
        &self,
        category: &str,
        result: Result<Vec<Discovery>, CatalogError>,
    ) -> Vec<Discovery> {
        result.unwrap_or_else(|e| {
            self.reporter.report(CatalogEvent::CategoryFailed {
                category: category.to_string(),
                error: e.to_string(),
            });
            Vec::new()
        })
    }

    async fn fetch_videos(
        &self,
        query: &CatalogQuery<'_>,
        kind: VideoKind,
    ) -> Result<Vec<DiscoveryVideo>, CatalogError> {
        let results = self.fetch_list(query).await?;

        Ok(self.map_records(query, results, |record| {
            DiscoveryVideo::from_record(record, kind)
        }))
    }

    /// Send a query and return its raw result list, reporting the outcome
    ///
    /// `None` means the body had no `results` field at all.
    async fn fetch(&self, query: &CatalogQuery<'_>) -> Result<Option<Vec<Value>>, CatalogError> {
        let url = query.to_url(&self.config)?;

        self.reporter.report(CatalogEvent::RequestStarted {
            query: query.name(),
            url: url.to_string(),
        });

        match self.fetch_url(&url).await {
            Ok(results) => {
                self.reporter.report(CatalogEvent::RequestCompleted {
                    query: query.name(),
                    results: results.as_ref().map_or(0, Vec::len),
                });
                Ok(results)
            }
            Err(e) => {
                self.report_failure(query, &e);
                Err(e)
            }
        }
    }

    /// Like [`Self::fetch`], but a missing result list is an error
    async fn fetch_list(&self, query: &CatalogQuery<'_>) -> Result<Vec<Value>, CatalogError> {
        self.fetch(query).await?.ok_or_else(|| {
            let err = CatalogError::MissingResults {
                query: query.name(),
            };
            self.report_failure(query, &err);
            err
        })
    }

    async fn fetch_url(&self, url: &Url) -> Result<Option<Vec<Value>>, CatalogError> {
        let response = self
            .http
            .get(url)
            .await
            .map_err(|e| CatalogError::RequestFailed {
                url: url.to_string(),
                source: e,
            })?;

        if !response.is_success() {
            return Err(CatalogError::HttpStatus {
                url: url.to_string(),
                status: response.status,
            });
        }

        Ok(CatalogResponse::parse(&response.body, url)?.results)
    }

    /// Validate and map raw records, leaving out (and reporting) the ones that do not fit
    fn map_records<T>(
        &self,
        query: &CatalogQuery<'_>,
        results: Vec<Value>,
        map: impl Fn(&CatalogRecord) -> Result<T, RecordError>,
    ) -> Vec<T> {
        results
            .into_iter()
            .filter_map(|value| {
                match CatalogRecord::from_value(value).and_then(|record| map(&record)) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        self.reporter.report(CatalogEvent::RecordSkipped {
                            query: query.name(),
                            reason: e.to_string(),
                        });
                        None
                    }
                }
            })
            .collect()
    }

    fn report_failure(&self, query: &CatalogQuery<'_>, error: &CatalogError) {
        self.reporter.report(CatalogEvent::RequestFailed {
            query: query.name(),
            error: error.to_string(),
        });
    }
}
