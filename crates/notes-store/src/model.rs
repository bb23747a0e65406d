use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single note: titled, tagged text content with creation/update instants.
///
/// Serialized field order is stable (struct order), so pretty-printed JSON
/// renders deterministically for views and tool payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque identifier, unique for the life of the session and never
    /// reassigned after deletion.
    pub id: String,
    /// Non-empty title.
    pub title: String,
    /// Body text; may be empty.
    pub content: String,
    /// Labels in insertion order. Multiple notes may share a tag.
    pub tags: Vec<String>,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation; always >= `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Exact, case-sensitive tag membership check.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match against title or content.
    ///
    /// An empty query trivially matches (substring semantics); tags are
    /// never consulted.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }
}
