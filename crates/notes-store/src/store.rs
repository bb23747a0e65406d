use chrono::Utc;

use crate::error::{Result, StoreError};
use crate::model::Note;

/// Partial update for a note. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Authoritative keeper of the note collection.
///
/// Notes are held in insertion order, which is the order every listing
/// operation reports. Ids come from a monotonic counter and are never
/// reused within a session, even after deletion.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: u64,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new note and return its freshly assigned id.
    pub fn insert(&mut self, title: String, content: String, tags: Vec<String>) -> String {
        self.next_id += 1;
        let id = format!("note-{}", self.next_id);
        let now = Utc::now();
        log::debug!("inserting note {id}");
        self.notes.push(Note {
            id: id.clone(),
            title,
            content,
            tags,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Exact lookup; no partial matching.
    pub fn get(&self, id: &str) -> Result<&Note> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// All notes, or only those carrying `tag` exactly (case-sensitive).
    pub fn list(&self, tag: Option<&str>) -> Vec<&Note> {
        match tag {
            Some(tag) => self.notes.iter().filter(|n| n.has_tag(tag)).collect(),
            None => self.notes.iter().collect(),
        }
    }

    /// Overwrite the supplied fields and refresh `updated_at`.
    ///
    /// An update carrying no fields still succeeds and still refreshes
    /// `updated_at`. Fails without any partial application when `id` is
    /// absent.
    pub fn update(&mut self, id: &str, update: NoteUpdate) -> Result<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if let Some(title) = update.title {
            note.title = title;
        }
        if let Some(content) = update.content {
            note.content = content;
        }
        if let Some(tags) = update.tags {
            note.tags = tags;
        }
        note.updated_at = Utc::now();
        Ok(())
    }

    /// Remove the note; the id is retired for the rest of the session.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.notes.remove(pos);
        log::debug!("deleted note {id}");
        Ok(())
    }

    /// Case-insensitive substring search over title and content.
    ///
    /// The empty query matches every note (substring semantics).
    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.matches(query)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
