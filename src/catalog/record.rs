// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::error::{CatalogError, RecordError};

/// Top-level body of every catalog response
///
/// Records are kept as raw JSON here and validated one by one, so a single
/// odd record does not take the whole page down with it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    #[serde(default)]
    pub result_count: Option<u64>,
    /// Absent on some error-shaped bodies (e.g. `{"resultCount": 0}`)
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

impl CatalogResponse {
    /// Parse a response body fetched from `url`
    pub fn parse(body: &[u8], url: &Url) -> Result<Self, CatalogError> {
        serde_json::from_slice(body).map_err(|e| CatalogError::ParseFailed {
            url: url.to_string(),
            source: e,
        })
    }
}

/// Identifier as sent by the catalog; normally a number, occasionally a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{}", n),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

/// A single catalog record with every field optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogRecord {
    pub wrapper_type: Option<String>,
    pub kind: Option<String>,
    pub track_id: Option<RawId>,
    pub collection_id: Option<RawId>,
    pub track_name: Option<String>,
    pub collection_name: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url_100: Option<String>,
    pub release_date: Option<String>,
    /// Plain names for podcasts, `{ "name": .., "id": .. }` objects for episodes
    pub genres: Option<Vec<Value>>,
    /// Numbers or numeric strings
    pub genre_ids: Option<Vec<Value>>,
    pub track_time_millis: Option<u64>,
    pub preview_url: Option<String>,
    pub episode_url: Option<String>,
}

impl CatalogRecord {
    /// Validate a raw JSON record against the input schema
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        serde_json::from_value(value).map_err(|e| RecordError::Malformed {
            reason: e.to_string(),
        })
    }

    /// `trackId`, else `collectionId`, rendered as a string
    pub fn id(&self) -> Option<String> {
        [&self.track_id, &self.collection_id]
            .into_iter()
            .flatten()
            .map(RawId::to_string)
            .find(|id| !id.is_empty())
    }

    /// `trackName`, else `collectionName`
    pub fn title(&self) -> Option<&str> {
        first_non_empty([&self.track_name, &self.collection_name])
    }

    /// `kind`, else `wrapperType`
    pub fn resolved_kind(&self) -> Option<&str> {
        first_non_empty([&self.kind, &self.wrapper_type])
    }

    /// `description`, then `shortDescription`, then `longDescription`
    pub fn summary(&self) -> Option<&str> {
        first_non_empty([
            &self.description,
            &self.short_description,
            &self.long_description,
        ])
    }

    /// `longDescription`, then `shortDescription`, then `description`
    pub fn long_summary(&self) -> Option<&str> {
        first_non_empty([
            &self.long_description,
            &self.short_description,
            &self.description,
        ])
    }

    pub fn artwork(&self) -> Option<&str> {
        first_non_empty([&self.artwork_url_100])
    }

    pub fn preview(&self) -> Option<&str> {
        first_non_empty([&self.preview_url])
    }

    /// `previewUrl`, else `episodeUrl`
    pub fn audio(&self) -> Option<&str> {
        first_non_empty([&self.preview_url, &self.episode_url])
    }

    /// Genre names, whichever of the two upstream shapes was sent
    pub fn genre_names(&self) -> Vec<String> {
        self.genres
            .iter()
            .flatten()
            .filter_map(|genre| match genre {
                Value::String(name) => Some(name.clone()),
                Value::Object(fields) => fields
                    .get("name")
                    .and_then(Value::as_str)
                    .map(String::from),
                _ => None,
            })
            .collect()
    }

    /// Numeric genre ids; entries that are not numbers are dropped
    pub fn numeric_genre_ids(&self) -> Vec<u64> {
        self.genre_ids
            .iter()
            .flatten()
            .filter_map(|id| match id {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .collect()
    }
}

/// The first field that is present and not empty
fn first_non_empty<const N: usize>(fields: [&Option<String>; N]) -> Option<&str> {
    fields
        .into_iter()
        .filter_map(|field| field.as_deref())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn record(value: Value) -> CatalogRecord {
        CatalogRecord::from_value(value).unwrap()
    }

    #[test]
    fn parses_response_envelope() {
        let url = Url::parse("https://itunes.apple.com/search").unwrap();
        let body = br#"{"resultCount": 2, "results": [{"trackId": 1}, {"trackId": 2}]}"#;

        let response = CatalogResponse::parse(body, &url).unwrap();

        assert_eq!(response.result_count, Some(2));
        assert_eq!(response.results.map(|r| r.len()), Some(2));
    }

    #[test]
    fn body_without_results_has_no_list() {
        let url = Url::parse("https://itunes.apple.com/lookup").unwrap();

        let response = CatalogResponse::parse(br#"{"resultCount": 0}"#, &url).unwrap();

        assert_eq!(response.result_count, Some(0));
        assert!(response.results.is_none());
    }

    #[test]
    fn rejects_bodies_that_are_not_json_objects() {
        let url = Url::parse("https://itunes.apple.com/search").unwrap();

        let err = CatalogResponse::parse(b"<html>", &url).unwrap_err();
        assert!(matches!(err, CatalogError::ParseFailed { .. }));

        let err = CatalogResponse::parse(br#"{"results": "nope"}"#, &url).unwrap_err();
        assert!(matches!(err, CatalogError::ParseFailed { .. }));
    }

    #[test]
    fn id_prefers_track_id() {
        let rec = record(json!({"trackId": 111, "collectionId": 222}));
        assert_eq!(rec.id(), Some("111".to_string()));
    }

    #[test]
    fn id_falls_back_to_collection_id() {
        let rec = record(json!({"collectionId": 222}));
        assert_eq!(rec.id(), Some("222".to_string()));
    }

    #[test]
    fn id_accepts_string_ids() {
        let rec = record(json!({"trackId": "abc-1"}));
        assert_eq!(rec.id(), Some("abc-1".to_string()));
    }

    #[test]
    fn id_is_none_when_both_are_missing() {
        let rec = record(json!({"trackName": "Orphan", "trackId": null}));
        assert_eq!(rec.id(), None);
    }

    #[test]
    fn empty_strings_fall_through() {
        let rec = record(json!({
            "trackName": "",
            "collectionName": "Collection",
            "description": "",
            "shortDescription": "Short",
        }));

        assert_eq!(rec.title(), Some("Collection"));
        assert_eq!(rec.summary(), Some("Short"));
    }

    #[test]
    fn long_summary_prefers_long_description() {
        let rec = record(json!({
            "description": "Plain",
            "shortDescription": "Short",
            "longDescription": "Long",
        }));

        assert_eq!(rec.summary(), Some("Plain"));
        assert_eq!(rec.long_summary(), Some("Long"));
    }

    #[test]
    fn kind_falls_back_to_wrapper_type() {
        let rec = record(json!({"wrapperType": "audiobook"}));
        assert_eq!(rec.resolved_kind(), Some("audiobook"));
    }

    #[test]
    fn audio_prefers_preview_over_episode_url() {
        let both = record(json!({
            "previewUrl": "https://example.com/preview.m4a",
            "episodeUrl": "https://example.com/full.mp3",
        }));
        assert_eq!(both.audio(), Some("https://example.com/preview.m4a"));

        let episode_only = record(json!({"episodeUrl": "https://example.com/full.mp3"}));
        assert_eq!(episode_only.audio(), Some("https://example.com/full.mp3"));
        assert_eq!(episode_only.preview(), None);
    }

    #[test]
    fn genre_names_accepts_both_shapes() {
        let podcast = record(json!({"genres": ["Science", "Podcasts"]}));
        assert_eq!(podcast.genre_names(), vec!["Science", "Podcasts"]);

        let episode = record(json!({"genres": [{"name": "Science", "id": "1533"}, 7]}));
        assert_eq!(episode.genre_names(), vec!["Science"]);
    }

    #[test]
    fn genre_ids_are_coerced_to_numbers() {
        let rec = record(json!({"genreIds": ["1533", 26, " 1477 ", "Science", null]}));
        assert_eq!(rec.numeric_genre_ids(), vec![1533, 26, 1477]);
    }

    #[test]
    fn missing_genre_fields_yield_empty_lists() {
        let rec = record(json!({"trackId": 1}));
        assert!(rec.genre_names().is_empty());
        assert!(rec.numeric_genre_ids().is_empty());
    }

    #[test]
    fn wrong_field_types_are_malformed() {
        let err = CatalogRecord::from_value(json!({"trackName": 42})).unwrap_err();
        assert!(matches!(err, RecordError::Malformed { .. }));

        let err = CatalogRecord::from_value(json!("not an object")).unwrap_err();
        assert!(matches!(err, RecordError::Malformed { .. }));
    }
}
