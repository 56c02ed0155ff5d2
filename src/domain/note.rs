//! Note entity and timestamp layout

use crate::domain::Clock;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Layout used for every persisted timestamp (`DD-MM-YYYY HH:MM:SS`)
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Layout used for calendar date queries (`DD-MM-YYYY`)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// A single titled text note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "note_id")]
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,
}

impl Note {
    /// Create a note stamped with `now` for both timestamps
    pub fn new(id: u64, title: String, body: String, now: NaiveDateTime) -> Self {
        Note {
            id,
            title,
            body,
            created_at: now,
            updated_at: now,
        }
    }

    /// Present time from `clock`, rendered in the persisted layout
    pub fn current_timestamp(clock: &dyn Clock) -> String {
        format_timestamp(&clock.now())
    }

    /// Calendar date the note was created on
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date()
    }
}

/// Render a timestamp in the persisted layout
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp in the persisted layout
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).ok()
}

/// Serde adapter for `NaiveDateTime` fields stored as `DD-MM-YYYY HH:MM:SS`
pub mod timestamp {
    use super::{format_timestamp, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid timestamp '{}', expected DD-MM-YYYY HH:MM:SS",
                raw
            ))
        })
    }
}
