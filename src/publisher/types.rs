//! Publisher types.

use serde::Serialize;

/// A registered upstream feed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publisher {
    /// Row ID.
    pub id: i64,
    /// Opaque external identifier used to build the feed URL.
    pub publisher_id: String,
    /// Display name.
    pub name: String,
}

/// New publisher for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPublisher {
    /// Opaque external identifier.
    pub publisher_id: String,
    /// Display name.
    pub name: String,
}

impl NewPublisher {
    /// Create a new publisher.
    pub fn new(publisher_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            publisher_id: publisher_id.into(),
            name: name.into(),
        }
    }
}
