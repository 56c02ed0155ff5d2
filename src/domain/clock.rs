//! Clock abstraction for note timestamps

use chrono::{FixedOffset, NaiveDateTime, Offset, Timelike, Utc};
use std::cell::Cell;

/// Default civil offset for timestamps (UTC+3)
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 3;

/// Source of the current civil time, truncated to whole seconds
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock rendered at a fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        SystemClock { offset }
    }

    /// Build a clock from a whole-hour offset, `None` if out of range
    pub fn from_offset_hours(hours: i32) -> Option<Self> {
        FixedOffset::east_opt(hours * 3600).map(Self::new)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::from_offset_hours(DEFAULT_UTC_OFFSET_HOURS)
            .unwrap_or_else(|| SystemClock::new(Utc.fix()))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let local = Utc::now().with_timezone(&self.offset).naive_local();
        local.with_nanosecond(0).unwrap_or(local)
    }
}

/// Clock returning a preset time, used to get deterministic timestamps
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        FixedClock {
            current: Cell::new(at),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: chrono::Duration) {
        self.current.set(self.current.get() + by);
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.current.set(at);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.current.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
