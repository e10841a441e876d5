//! Response DTOs for the HTTP API.

use serde::Serialize;

use crate::media::MediaItem;

/// Result of an on-demand ingestion.
#[derive(Debug, Serialize)]
pub struct FetchResponse {
    /// Always true on success.
    pub success: bool,
    /// Number of entries collected from the feeds.
    pub added: usize,
}

impl FetchResponse {
    /// Create a success response.
    pub fn new(added: usize) -> Self {
        Self {
            success: true,
            added,
        }
    }
}

/// Stored media item as returned to clients.
#[derive(Debug, Serialize)]
pub struct MediaItemResponse {
    /// Storage id.
    pub id: i64,
    /// Upstream video id.
    #[serde(rename = "videoId")]
    pub video_id: String,
    /// Title.
    pub title: String,
    /// Channel display name reported by the feed.
    pub channel: String,
    /// Discovery time (RFC 3339).
    pub timestamp: String,
}

impl From<MediaItem> for MediaItemResponse {
    fn from(item: MediaItem) -> Self {
        Self {
            id: item.id,
            video_id: item.external_id,
            title: item.title,
            channel: item.channel_name,
            timestamp: item.discovered_at.to_rfc3339(),
        }
    }
}

/// Storage connectivity check result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbStatusResponse {
    /// Always true on success.
    pub success: bool,
    /// Publishers in the registry.
    pub channel_count: i64,
    /// Stored media items.
    pub song_count: i64,
}

impl DbStatusResponse {
    /// Create a success response.
    pub fn new(channel_count: i64, song_count: i64) -> Self {
        Self {
            success: true,
            channel_count,
            song_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_fetch_response_json() {
        let value = serde_json::to_value(FetchResponse::new(3)).unwrap();
        assert_eq!(value, json!({ "success": true, "added": 3 }));
    }

    #[test]
    fn test_media_item_response_json() {
        let item = MediaItem {
            id: 7,
            external_id: "dQw4w9WgXcQ".to_string(),
            title: "Some Song".to_string(),
            channel_name: "Some Channel".to_string(),
            discovered_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };

        let value = serde_json::to_value(MediaItemResponse::from(item)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "videoId": "dQw4w9WgXcQ",
                "title": "Some Song",
                "channel": "Some Channel",
                "timestamp": "2024-05-01T12:30:00+00:00",
            })
        );
    }

    #[test]
    fn test_db_status_response_json() {
        let value = serde_json::to_value(DbStatusResponse::new(15, 42)).unwrap();
        assert_eq!(
            value,
            json!({ "success": true, "channelCount": 15, "songCount": 42 })
        );
    }
}
