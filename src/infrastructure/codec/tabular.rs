//! Tabular encoding: `;`-delimited rows with a fixed header

use super::{DecodeError, Encoding, NoteCodec};
use crate::domain::note::{format_timestamp, parse_timestamp};
use crate::domain::Note;
use crate::error::Result;

pub const DELIMITER: char = ';';

/// Column names, in row order.
///
/// Written joined by a bare `;` with no space after it. Loading skips the
/// first row whatever its text, so headers written as `; ` still load.
pub const HEADER: [&str; 5] = [
    "Номер заметки",
    "Заголовок",
    "Текст",
    "Дата создания",
    "Дата последнего изменения",
];

const LINE_TERMINATOR: &str = "\r\n";
const BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy, Default)]
pub struct TabularCodec;

impl NoteCodec for TabularCodec {
    fn encoding(&self) -> Encoding {
        Encoding::Tabular
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<Vec<Note>, DecodeError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| DecodeError(format!("file is not valid UTF-8: {}", e)))?;
        let text = text.strip_prefix(BOM).unwrap_or(text);

        // First record is the header
        split_records(text)?
            .into_iter()
            .skip(1)
            .map(|(line, fields)| note_from_row(line, fields))
            .collect()
    }

    fn encode(&self, notes: &[Note]) -> Result<Vec<u8>> {
        let mut output = String::new();
        push_row(&mut output, HEADER.iter().map(|h| h.to_string()));

        for note in notes {
            push_row(
                &mut output,
                [
                    note.id.to_string(),
                    note.title.clone(),
                    note.body.clone(),
                    format_timestamp(&note.created_at),
                    format_timestamp(&note.updated_at),
                ],
            );
        }

        Ok(output.into_bytes())
    }
}

fn push_row(output: &mut String, fields: impl IntoIterator<Item = String>) {
    let row = fields
        .into_iter()
        .map(|f| escape_field(&f))
        .collect::<Vec<_>>()
        .join(DELIMITER.to_string().as_str());
    output.push_str(&row);
    output.push_str(LINE_TERMINATOR);
}

fn escape_field(field: &str) -> String {
    if field.contains([DELIMITER, '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn note_from_row(line: usize, fields: Vec<String>) -> std::result::Result<Note, DecodeError> {
    let [id, title, body, created, updated]: [String; 5] =
        fields.try_into().map_err(|fields: Vec<String>| {
            DecodeError(format!(
                "line {}: expected {} columns, found {}",
                line,
                HEADER.len(),
                fields.len()
            ))
        })?;

    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|_| DecodeError(format!("line {}: invalid note id '{}'", line, id)))?;
    let timestamp = |raw: &str, column: &str| {
        parse_timestamp(raw).ok_or_else(|| {
            DecodeError(format!(
                "line {}: invalid {} '{}', expected DD-MM-YYYY HH:MM:SS",
                line, column, raw
            ))
        })
    };
    let created_at = timestamp(&created, "creation date")?;
    let updated_at = timestamp(&updated, "update date")?;

    Ok(Note {
        id,
        title,
        body,
        created_at,
        updated_at,
    })
}

/// Split text into records of fields, tagged with the line each record starts on.
/// Blank lines are skipped; quoted fields may span lines.
fn split_records(text: &str) -> std::result::Result<Vec<(usize, Vec<String>)>, DecodeError> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut after_quote = false;
    let mut row_has_content = false;
    let mut line = 1;
    let mut record_line = 1;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    after_quote = true;
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            DELIMITER => {
                fields.push(std::mem::take(&mut field));
                after_quote = false;
                row_has_content = true;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if row_has_content {
                    fields.push(std::mem::take(&mut field));
                    records.push((record_line, std::mem::take(&mut fields)));
                }
                after_quote = false;
                row_has_content = false;
                line += 1;
                record_line = line;
            }
            '"' if field.is_empty() && !after_quote => {
                in_quotes = true;
                row_has_content = true;
            }
            _ if after_quote => {
                return Err(DecodeError(format!(
                    "line {}: unexpected character after closing quote",
                    line
                )));
            }
            _ => {
                field.push(c);
                row_has_content = true;
            }
        }
    }

    if in_quotes {
        return Err(DecodeError(format!(
            "line {}: unterminated quoted field",
            record_line
        )));
    }
    if row_has_content {
        fields.push(field);
        records.push((record_line, fields));
    }

    Ok(records)
}
