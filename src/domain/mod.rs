//! Domain layer - Note entity, clock and date queries

pub mod clock;
pub mod date_query;
pub mod note;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_query::DateQuery;
pub use note::Note;
