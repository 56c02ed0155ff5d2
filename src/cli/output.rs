//! Output formatting utilities

use crate::domain::note::format_timestamp;
use crate::domain::Note;

/// Format one note for display
pub fn format_note(note: &Note) -> String {
    format!(
        "Note #{}\nTitle: {}\nBody: {}\nCreated: {}\nUpdated: {}\n",
        note.id,
        note.title,
        note.body,
        format_timestamp(&note.created_at),
        format_timestamp(&note.updated_at)
    )
}

/// Format a list of notes, separated by blank lines
pub fn format_note_list<'a>(notes: impl IntoIterator<Item = &'a Note>) -> String {
    let output = notes
        .into_iter()
        .map(format_note)
        .collect::<Vec<_>>()
        .join("\n");

    if output.is_empty() {
        return "No notes found".to_string();
    }
    output
}
