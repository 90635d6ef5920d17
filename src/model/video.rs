use std::fmt;

use serde::Serialize;

use crate::catalog::CatalogRecord;
use crate::error::RecordError;

use super::artwork::artwork_url;

/// Label attached to every video, naming where it is hosted
pub const VIDEO_SITE: &str = "iTunes";

/// Which query produced a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VideoKind {
    /// Free-text video search
    Preview,
    /// The documentaries list
    Documentary,
    /// Videos related to a discovery
    Related,
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VideoKind::Preview => "Preview",
            VideoKind::Documentary => "Documentary",
            VideoKind::Related => "Related",
        })
    }
}

/// A playable short video clip
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryVideo {
    pub id: String,
    /// Same value as `id`
    pub key: String,
    pub name: String,
    pub description: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: VideoKind,
    pub url: String,
    pub artwork_url: String,
    pub release_date: String,
}

impl DiscoveryVideo {
    /// Map a movie record; records without a preview URL are not playable and are rejected
    pub fn from_record(record: &CatalogRecord, kind: VideoKind) -> Result<Self, RecordError> {
        let name = record.track_name.clone().unwrap_or_default();

        let url = record
            .preview()
            .ok_or_else(|| RecordError::MissingPreview { title: name.clone() })?
            .to_string();
        let id = record
            .id()
            .ok_or_else(|| RecordError::MissingId { title: name.clone() })?;

        Ok(Self {
            key: id.clone(),
            id,
            name,
            description: record.long_summary().unwrap_or_default().to_string(),
            site: VIDEO_SITE.to_string(),
            kind,
            url,
            artwork_url: record.artwork().unwrap_or_default().to_string(),
            release_date: record.release_date.clone().unwrap_or_default(),
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

    fn record(value: Value) -> CatalogRecord {
        CatalogRecord::from_value(value).unwrap()
    }

    #[test]
    fn maps_movie_record() {
        let video = DiscoveryVideo::from_record(
            &record(json!({
                "wrapperType": "track",
                "kind": "feature-movie",
                "trackId": 1440811123,
                "trackName": "Apollo 11",
                "shortDescription": "Short",
                "longDescription": "Crafted from a newly discovered trove of footage",
                "previewUrl": "https://example.com/apollo.m4v",
                "artworkUrl100": "https://example.com/100x100bb.jpg",
                "releaseDate": "2019-03-08T08:00:00Z",
            })),
            VideoKind::Documentary,
        )
        .unwrap();

        assert_eq!(video.id, "1440811123");
        assert_eq!(video.key, video.id);
        assert_eq!(video.name, "Apollo 11");
        assert_eq!(
            video.description,
            "Crafted from a newly discovered trove of footage"
        );
        assert_eq!(video.site, "iTunes");
        assert_eq!(video.kind, VideoKind::Documentary);
        assert_eq!(video.url, "https://example.com/apollo.m4v");
        assert_eq!(video.artwork(400), "https://example.com/400x400bb.jpg");
    }

    #[test]
    fn description_falls_back_to_short_description() {
        let video = DiscoveryVideo::from_record(
            &record(json!({
                "trackId": 1,
                "previewUrl": "https://example.com/a.m4v",
                "shortDescription": "Short",
            })),
            VideoKind::Preview,
        )
        .unwrap();

        assert_eq!(video.description, "Short");
    }

    #[test]
    fn records_without_preview_are_rejected() {
        let missing = DiscoveryVideo::from_record(
            &record(json!({"trackId": 1, "trackName": "Trailerless"})),
            VideoKind::Related,
        );
        assert_eq!(
            missing.unwrap_err(),
            RecordError::MissingPreview {
                title: "Trailerless".to_string()
            }
        );

        let empty = DiscoveryVideo::from_record(
            &record(json!({"trackId": 1, "previewUrl": ""})),
            VideoKind::Related,
        );
        assert!(matches!(empty, Err(RecordError::MissingPreview { .. })));
    }

    #[test]
    fn kind_serializes_as_type() {
        let video = DiscoveryVideo::from_record(
            &record(json!({"trackId": 1, "previewUrl": "https://example.com/a.m4v"})),
            VideoKind::Related,
        )
        .unwrap();

        let json = serde_json::to_value(&video).unwrap();
        assert_eq!(json["type"], "Related");
        assert_eq!(json["key"], "1");
        assert_eq!(VideoKind::Related.to_string(), "Related");
    }
}
