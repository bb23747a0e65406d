//! Read-only `notes://` views over the note store.
//!
//! Two addresses are supported: `notes://all` (full JSON dump) and
//! `notes://summary` (plain-text tag statistics). Every read renders from
//! the live store at call time; nothing is cached.

use notes_store::NoteStore;
use rmcp::model::{AnnotateAble, RawResource, Resource};

pub const ALL_URI: &str = "notes://all";
pub const SUMMARY_URI: &str = "notes://summary";

pub const ALL_MIME_TYPE: &str = "application/json";
pub const SUMMARY_MIME_TYPE: &str = "text/plain";

/// Static view catalog, constant for the life of the process.
pub fn view_descriptors() -> Vec<Resource> {
    let mut all = RawResource::new(ALL_URI, "All Notes");
    all.description = Some("Complete list of notes with all attributes".into());
    all.mime_type = Some(ALL_MIME_TYPE.into());

    let mut summary = RawResource::new(SUMMARY_URI, "Notes Summary");
    summary.description = Some("Note count and tag statistics".into());
    summary.mime_type = Some(SUMMARY_MIME_TYPE.into());

    vec![all.no_annotation(), summary.no_annotation()]
}

/// Pretty-printed JSON array of every note, in insertion order.
pub fn render_all(store: &NoteStore) -> String {
    let notes: Vec<_> = store.iter().collect();
    serde_json::to_string_pretty(&notes).unwrap_or_default()
}

/// Plain-text summary: total count, distinct tag count, and the distinct
/// tag values in first-seen order ("none" when the collection has no tags).
pub fn render_summary(store: &NoteStore) -> String {
    let mut tags: Vec<&str> = Vec::new();
    for note in store.iter() {
        for tag in &note.tags {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
    }
    let rendered = if tags.is_empty() {
        "none".to_string()
    } else {
        tags.join(", ")
    };
    format!(
        "Total notes: {}\nUnique tags: {}\nTags: {}",
        store.len(),
        tags.len(),
        rendered
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_counts_distinct_tags() {
        let mut store = NoteStore::new();
        store.insert("A".into(), "x".into(), vec!["work".into()]);
        store.insert("B".into(), "y".into(), vec!["work".into()]);
        store.insert("C".into(), "z".into(), vec!["personal".into()]);

        assert_eq!(
            render_summary(&store),
            "Total notes: 3\nUnique tags: 2\nTags: work, personal"
        );
    }

    #[test]
    fn summary_of_empty_store_renders_none() {
        let store = NoteStore::new();
        assert_eq!(
            render_summary(&store),
            "Total notes: 0\nUnique tags: 0\nTags: none"
        );
    }

    #[test]
    fn all_view_is_a_json_array_in_insertion_order() {
        let mut store = NoteStore::new();
        let id1 = store.insert("First".into(), "x".into(), vec![]);
        let id2 = store.insert("Second".into(), "y".into(), vec![]);

        let parsed: serde_json::Value =
            serde_json::from_str(&render_all(&store)).expect("valid JSON");
        let items = parsed.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("id"), Some(&serde_json::json!(id1)));
        assert_eq!(items[1].get("id"), Some(&serde_json::json!(id2)));
        assert!(items[0].get("createdAt").is_some());
    }

    #[test]
    fn all_view_of_empty_store_is_empty_array() {
        let store = NoteStore::new();
        assert_eq!(render_all(&store), "[]");
    }

    #[test]
    fn catalog_lists_both_views() {
        let views = view_descriptors();
        let uris: Vec<&str> = views.iter().map(|v| v.uri.as_str()).collect();
        assert_eq!(uris, vec![ALL_URI, SUMMARY_URI]);
        assert_eq!(views[0].mime_type.as_deref(), Some(ALL_MIME_TYPE));
        assert_eq!(views[1].mime_type.as_deref(), Some(SUMMARY_MIME_TYPE));
    }
}
