//! Calendar date queries for listing notes by creation day

use crate::domain::note::DATE_FORMAT;
use crate::error::{NoteError, Result};
use chrono::{Duration, NaiveDate};

/// A user-supplied date that resolves to one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateQuery {
    /// Current day at the store's offset
    Today,
    /// Previous day
    Yesterday,
    /// Specific date (DD-MM-YYYY)
    SpecificDate(NaiveDate),
}

impl DateQuery {
    /// Parse a date query string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" => Ok(DateQuery::Today),
            "yesterday" => Ok(DateQuery::Yesterday),
            _ => NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
                .map(DateQuery::SpecificDate)
                .map_err(|_| NoteError::InvalidInput(format!("Invalid date: {}", input.trim()))),
        }
    }

    /// Resolve this query against the current day
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateQuery::Today => today,
            DateQuery::Yesterday => today - Duration::days(1),
            DateQuery::SpecificDate(date) => *date,
        }
    }
}
