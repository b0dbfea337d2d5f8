use chrono::{NaiveDateTime, TimeDelta};

use crate::{
    core::{
        day_boundary::is_new_day,
        reconciler::{Reconciliation, reconcile},
        retention::prune,
        sample::Sample,
    },
    history::History,
};

/// One sampling cycle over an already loaded history: prune, reconcile and append.
///
/// The caller owns the I/O on both ends: loading, querying the DTU and saving.
pub fn run(
    history: History,
    sample: Option<Sample>,
    now: NaiveDateTime,
    retention: TimeDelta,
) -> (History, Reconciliation) {
    let mut history = prune(history, now, retention);
    let last_entry = history.last();
    let reconciliation = reconcile(sample, last_entry, is_new_day(last_entry, now), now);
    history.push(reconciliation.entry);
    (history, reconciliation)
}
