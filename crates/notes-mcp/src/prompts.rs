//! Prompt templates rendered from the current note collection.
//!
//! Each template resolves to a single user-role message; an empty or
//! non-matching collection still renders (with an empty note list) rather
//! than erroring, so downstream reasoning always gets a well-formed prompt.

use notes_store::NoteStore;
use rmcp::model::{Prompt, PromptArgument};

pub const SUMMARIZE_NOTES: &str = "summarize_notes";
pub const ORGANIZE_NOTES: &str = "organize_notes";

const NOTE_DELIMITER: &str = "---";

/// Static template catalog, constant for the life of the process.
pub fn prompt_descriptors() -> Vec<Prompt> {
    vec![
        Prompt::new(
            SUMMARIZE_NOTES,
            Some("Summarize all notes, optionally filtered by tag"),
            Some(vec![PromptArgument {
                name: "tag".to_string(),
                title: None,
                description: Some("Only include notes carrying this tag".to_string()),
                required: Some(false),
            }]),
        ),
        Prompt::new(
            ORGANIZE_NOTES,
            Some("Ask for suggestions on organizing the note collection"),
            None,
        ),
    ]
}

/// Instruction plus one `- {title}: {content}` line per matching note.
pub fn summarize_notes(store: &NoteStore, tag: Option<&str>) -> String {
    let header = match tag {
        Some(tag) => format!("Please summarize the following notes tagged \"{tag}\":"),
        None => "Please summarize the following notes:".to_string(),
    };
    let body = store
        .list(tag)
        .iter()
        .map(|n| format!("- {}: {}", n.title, n.content))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{header}\n\n{body}")
}

/// Full id/title/content/tags block per note, delimiter-separated, followed
/// by a fixed request for organizational suggestions.
pub fn organize_notes(store: &NoteStore) -> String {
    let blocks = store
        .iter()
        .map(|n| {
            format!(
                "ID: {}\nTitle: {}\nContent: {}\nTags: {}",
                n.id,
                n.title,
                n.content,
                n.tags.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{NOTE_DELIMITER}\n"));
    format!(
        "Here are all my notes:\n\n{blocks}\n\nPlease suggest how these notes could be organized: \
         propose categories, useful tags, and any notes that could be merged or archived."
    )
}
