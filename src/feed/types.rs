//! Feed types.

use chrono::{DateTime, Utc};

use crate::media::NewMediaItem;

/// One complete entry extracted from a feed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// Upstream video identifier (`yt:videoId`).
    pub video_id: String,
    /// Entry title.
    pub title: String,
    /// Entry author name.
    pub channel_name: String,
}

impl ParsedEntry {
    /// Convert into a storable item stamped with `discovered_at`.
    pub fn into_new_item(self, discovered_at: DateTime<Utc>) -> NewMediaItem {
        NewMediaItem::new(self.video_id, self.title, self.channel_name)
            .with_discovered_at(discovered_at)
    }
}
