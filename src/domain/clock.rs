//! Date sources
//!
//! The account never reads the system clock directly; it asks a `Clock`
//! for "today" so callers control which day the daily limits apply to.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Days, Local, NaiveDate};

/// Supplies the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually controlled clock.
///
/// Clones share the same date, so a test can hand one clone to an account
/// and keep another to move time forward.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Rc<Cell<NaiveDate>>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Rc::new(Cell::new(date)),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }

    /// Move the clock forward by whole days.
    pub fn advance_days(&self, days: u64) {
        let current = self.date.get();
        // Saturates at chrono's maximum date
        let next = current.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
        self.date.set(next);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
