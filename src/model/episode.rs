use serde::Serialize;

use crate::catalog::CatalogRecord;
use crate::error::RecordError;

use super::artwork::artwork_url;

/// A playable audio unit belonging to a discovery
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub description: String,
    pub artwork_url: String,
    pub release_date: String,
    /// Running time in milliseconds, when the catalog knows it
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    pub audio_url: String,
}

impl Episode {
    /// Map an episode record; `parent_artwork` is used when the episode has none of its own
    pub fn from_record(record: &CatalogRecord, parent_artwork: &str) -> Result<Self, RecordError> {
        let title = record.track_name.clone().unwrap_or_default();
        let id = record
            .id()
            .ok_or_else(|| RecordError::MissingId { title: title.clone() })?;

        Ok(Self {
            id,
            title,
            description: record.summary().unwrap_or_default().to_string(),
            artwork_url: record.artwork().unwrap_or(parent_artwork).to_string(),
            release_date: record.release_date.clone().unwrap_or_default(),
            duration_ms: record.track_time_millis,
            audio_url: record.audio().unwrap_or_default().to_string(),
        })
    }

    /// Artwork URL at the given pixel size
    pub fn artwork(&self, size: u32) -> String {
        artwork_url(&self.artwork_url, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{Value, json};

    const PARENT_ARTWORK: &str = "https://example.com/parent/100x100bb.jpg";

    fn record(value: Value) -> CatalogRecord {
        CatalogRecord::from_value(value).unwrap()
    }

    #[test]
    fn maps_episode_fields() {
        let episode = Episode::from_record(
            &record(json!({
                "wrapperType": "podcastEpisode",
                "kind": "podcast-episode",
                "trackId": 1000650000001u64,
                "trackName": "Black Holes",
                "description": "Where does it all go?",
                "artworkUrl100": "https://example.com/ep/100x100bb.jpg",
                "releaseDate": "2024-02-01T10:00:00Z",
                "trackTimeMillis": 2_400_000,
                "episodeUrl": "https://example.com/ep.mp3",
            })),
            PARENT_ARTWORK,
        )
        .unwrap();

        assert_eq!(episode.id, "1000650000001");
        assert_eq!(episode.title, "Black Holes");
        assert_eq!(episode.description, "Where does it all go?");
        assert_eq!(episode.artwork_url, "https://example.com/ep/100x100bb.jpg");
        assert_eq!(episode.duration_ms, Some(2_400_000));
        assert_eq!(episode.audio_url, "https://example.com/ep.mp3");
    }

    #[test]
    fn falls_back_to_parent_artwork() {
        let episode = Episode::from_record(&record(json!({"trackId": 5})), PARENT_ARTWORK).unwrap();

        assert_eq!(episode.artwork_url, PARENT_ARTWORK);
        assert_eq!(episode.artwork(200), "https://example.com/parent/200x200bb.jpg");
    }

    #[test]
    fn missing_optional_fields_have_defaults() {
        let episode = Episode::from_record(&record(json!({"trackId": 5})), "").unwrap();

        assert_eq!(episode.title, "");
        assert_eq!(episode.description, "");
        assert_eq!(episode.duration_ms, None);
        assert_eq!(episode.audio_url, "");
    }

    #[test]
    fn episode_without_id_is_rejected() {
        let err = Episode::from_record(&record(json!({"trackName": "Lost"})), PARENT_ARTWORK)
            .unwrap_err();

        assert!(matches!(err, RecordError::MissingId { .. }));
    }

    #[test]
    fn duration_serializes_under_catalog_name() {
        let episode = Episode::from_record(
            &record(json!({"trackId": 5, "trackTimeMillis": 61_000})),
            PARENT_ARTWORK,
        )
        .unwrap();

        let json = serde_json::to_value(&episode).unwrap();
        assert_eq!(json["duration"], 61_000);
        assert_eq!(json["audioUrl"], "");
    }
}
