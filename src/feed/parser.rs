//! Atom feed parser.
//!
//! Only the fields needed to build a media item are read: `entry/yt:videoId`,
//! `entry/title` and the first `entry/author/name`. Everything else in the
//! document is ignored. Elements are matched by local name, so `yt:videoId`
//! is declared as `videoId`.

use serde::Deserialize;
use tracing::debug;

use super::types::ParsedEntry;
use crate::{Result, SamplerError};

#[derive(Debug, Deserialize)]
struct FeedDocument {
    #[serde(rename = "entry", default)]
    entries: Vec<EntryElement>,
}

#[derive(Debug, Deserialize)]
struct EntryElement {
    #[serde(rename = "videoId", default)]
    video_id: Option<TextElement>,
    #[serde(default)]
    title: Option<TextElement>,
    #[serde(rename = "author", default)]
    authors: Vec<AuthorElement>,
}

#[derive(Debug, Deserialize)]
struct AuthorElement {
    #[serde(default)]
    name: Option<TextElement>,
}

/// Element whose text may be empty.
#[derive(Debug, Deserialize)]
struct TextElement {
    #[serde(rename = "$text", default)]
    value: String,
}

impl EntryElement {
    /// A present but empty title or author name is kept as an empty string.
    fn into_parsed(self) -> Option<ParsedEntry> {
        let video_id = self
            .video_id
            .map(|id| id.value.trim().to_string())
            .filter(|id| !id.is_empty())?;
        let title = self.title?.value;
        let channel_name = self.authors.into_iter().next()?.name?.value;

        Some(ParsedEntry {
            video_id,
            title,
            channel_name,
        })
    }
}

/// Parse a feed document into its complete entries.
///
/// A document without `entry` elements yields an empty vector. Entries
/// without a video id, a title or an author name are skipped, as are entries
/// whose video id is empty. A document that is not well-formed XML is an
/// error.
pub fn parse_feed(raw: &str) -> Result<Vec<ParsedEntry>> {
    let document: FeedDocument = quick_xml::de::from_str(raw)
        .map_err(|e| SamplerError::Parse(format!("failed to parse feed: {}", e)))?;

    let total = document.entries.len();
    let entries: Vec<ParsedEntry> = document
        .entries
        .into_iter()
        .filter_map(EntryElement::into_parsed)
        .collect();

    if entries.len() < total {
        debug!(
            skipped = total - entries.len(),
            "Skipped feed entries with missing fields"
        );
    }

    Ok(entries)
}
