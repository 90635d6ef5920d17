// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::catalog::CatalogRecord;
use crate::error::RecordError;

use super::artwork::artwork_url;
use super::episode::Episode;
use super::genre::genre_name;
use super::video::DiscoveryVideo;

/// What kind of listening experience a discovery offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Podcast,
    Audiobook,
    Course,
}

impl ContentType {
    /// Infer the content type from the catalog's kind string
    pub fn from_kind(kind: &str) -> Self {
        if kind == "audiobook" {
            ContentType::Audiobook
        } else {
            ContentType::Podcast
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContentType::Podcast => "podcast",
            ContentType::Audiobook => "audiobook",
            ContentType::Course => "course",
        })
    }
}

/// A browsable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discovery {
    pub id: String,
    pub title: String,
    pub description: String,
    /// 100x100 artwork URL; see [`Discovery::artwork`] for other sizes
    pub artwork_url: String,
    /// Release date exactly as sent by the catalog
    pub release_date: String,
    pub genres: Vec<String>,
    pub genre_ids: Vec<u64>,
    pub kind: String,
    pub content_type: ContentType,
}

impl Discovery {
    /// Map a record, inferring the content type from its `kind`
    ///
    /// `wrapperType` only fills the stored `kind` field; it never makes a
    /// record an audiobook.
    pub fn from_record(record: &CatalogRecord) -> Result<Self, RecordError> {
        let content_type = ContentType::from_kind(record.kind.as_deref().unwrap_or_default());
        Self::from_record_as(record, content_type)
    }

    /// Map a record with a fixed content type
    pub fn from_record_as(
        record: &CatalogRecord,
        content_type: ContentType,
    ) -> Result<Self, RecordError> {
        let id = record.id().ok_or_else(|| RecordError::MissingId {
            title: record.title().unwrap_or_default().to_string(),
        })?;

        Ok(Self::with_id(record, id, content_type))
    }

    /// Map a record under an id supplied by the caller
    pub(crate) fn with_id(record: &CatalogRecord, id: String, content_type: ContentType) -> Self {
        Self {
            id,
            title: record.title().unwrap_or_default().to_string(),
            description: record.summary().unwrap_or_default().to_string(),
            artwork_url: record.artwork().unwrap_or_default().to_string(),
            release_date: record.release_date.clone().unwrap_or_default(),
            genres: record.genre_names(),
            genre_ids: record.numeric_genre_ids(),
            kind: record.resolved_kind().unwrap_or_default().to_string(),
            content_type,
        }
    }

    /// Artwork URL at the given pixel size
    pub fn artwork(&self, size: u32) -> String {
        artwork_url(&self.artwork_url, size)
    }

    /// Display names for the numeric genre ids
    pub fn genre_names(&self) -> Vec<&'static str> {
        self.genre_ids.iter().map(|&id| genre_name(id)).collect()
    }
}

/// A discovery together with its episodes and related videos
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryDetails {
    #[serde(flatten)]
    pub discovery: Discovery,
    pub episodes: Vec<Episode>,
    /// Empty when no related videos were found or the lookup failed
    pub videos: Vec<DiscoveryVideo>,
}

impl Deref for DiscoveryDetails {
    type Target = Discovery;

    fn deref(&self) -> &Self::Target {
        &self.discovery
    }
}
