use chrono::NaiveDateTime;

use crate::history::Entry;

/// Whether `now` falls on a later calendar date than the last entry.
///
/// An empty history never counts as a new day: the first entry seeds the day by itself.
#[must_use]
pub fn is_new_day(last_entry: Option<&Entry>, now: NaiveDateTime) -> bool {
    last_entry.is_some_and(|entry| entry.timestamp.date() != now.date())
}
